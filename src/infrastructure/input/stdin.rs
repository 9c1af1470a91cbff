//! Stdin line source
//!
//! Prints a `> ` prompt and blocks on one line. EOF and Ctrl-C both end
//! the source, which the session loop reads as an implicit `/done`.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::application::ports::LineInput;

/// Line input backed by standard input
pub struct StdinLineInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinLineInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinLineInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineInput for StdinLineInput {
    async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"> ");
            let _ = out.flush();
        }

        tokio::select! {
            line = self.lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => Ok(None),
        }
    }
}
