//! Environment history abstraction
//!
//! The router never touches its host directly. A host (the terminal
//! browser, a test, a web shell) implements [`History`] and hands it to the
//! router, which then pushes or replaces entries as it navigates.

/// The host's address bar and history stack
pub trait History {
    /// The address the environment currently shows
    fn location(&self) -> String;

    /// Adds a new entry after the current one
    fn push(&mut self, path: &str);

    /// Overwrites the current entry
    fn replace(&mut self, path: &str);

    /// Moves one entry back. Returns false when there is nothing to go back to.
    fn back(&mut self) -> bool {
        false
    }

    /// Moves one entry forward. Returns false when there is nothing ahead.
    fn forward(&mut self) -> bool {
        false
    }
}

/// In-memory history stack with a cursor
///
/// `back` and `forward` move the environment on its own; the router learns
/// about it through `Router::sync_from_history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Creates a history with a single entry
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.index] = path.to_string();
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        true
    }
}
