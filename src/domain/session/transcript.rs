//! Session transcript append-log

/// Ordered log of captured session lines.
///
/// Append-only apart from `undo`, which removes the most recent entry.
/// Insertion order is the reading order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Remove and return the most recent entry, if any.
    pub fn undo(&mut self) -> Option<String> {
        self.entries.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries, joined with newlines. This is the read-back and the
    /// on-disk save format.
    pub fn joined(&self) -> String {
        self.entries.join("\n")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
