//! Text line input port interface

use async_trait::async_trait;

/// Port for acquiring one line of typed input
///
/// `Ok(None)` means the input source is exhausted (EOF or interrupt); the
/// session loop treats that as an implicit `/done`.
#[async_trait]
pub trait LineInput: Send {
    async fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

#[async_trait]
impl<T: LineInput + ?Sized> LineInput for Box<T> {
    async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        (**self).next_line().await
    }
}
