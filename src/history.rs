//! Session history.
//!
//! [`History`] is the in-process stand-in for the browser's history stack:
//! full URL paths, a cursor, and the usual push / replace / back / forward
//! moves. Pushing truncates any forward entries.

/// Direction of a history move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
    Replace,
}

/// A single move through the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryChange {
    pub from: String,
    pub to: String,
    pub direction: NavigationDirection,
}

/// History stack of URL paths.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    current: usize,
}

impl History {
    /// Create a history whose only entry is `initial_url`.
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            current: 0,
        }
    }

    /// URL of the current entry.
    pub fn current_url(&self) -> &str {
        &self.entries[self.current]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history has at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a new entry after the current one, dropping forward entries.
    pub fn push(&mut self, url: String) -> HistoryChange {
        let from = self.current_url().to_string();
        self.entries.truncate(self.current + 1);
        self.entries.push(url.clone());
        self.current += 1;

        HistoryChange {
            from,
            to: url,
            direction: NavigationDirection::Forward,
        }
    }

    /// Overwrite the current entry.
    pub fn replace(&mut self, url: String) -> HistoryChange {
        let from = std::mem::replace(&mut self.entries[self.current], url.clone());

        HistoryChange {
            from,
            to: url,
            direction: NavigationDirection::Replace,
        }
    }

    /// Move one entry back.
    pub fn back(&mut self) -> Option<HistoryChange> {
        if !self.can_go_back() {
            return None;
        }
        let from = self.current_url().to_string();
        self.current -= 1;

        Some(HistoryChange {
            from,
            to: self.current_url().to_string(),
            direction: NavigationDirection::Back,
        })
    }

    /// Move one entry forward.
    pub fn forward(&mut self) -> Option<HistoryChange> {
        if !self.can_go_forward() {
            return None;
        }
        let from = self.current_url().to_string();
        self.current += 1;

        Some(HistoryChange {
            from,
            to: self.current_url().to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    /// Check if there is an entry before the current one.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if there is an entry after the current one.
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }
}
