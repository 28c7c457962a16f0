//! Breadcrumb history: the path of topics from the root to the current entry.

use std::fmt;

/// Ordered topics, index 0 is always the root label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    topics: Vec<String>,
}

/// Navigation target outside the current history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "history index {} out of range (length {})",
            self.index, self.len
        )
    }
}

impl History {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            topics: vec![root.into()],
        }
    }

    pub fn push(&mut self, topic: impl Into<String>) {
        self.topics.push(topic.into());
    }

    /// Jump back to `index`.
    ///
    /// Returns `Ok(None)` when `index` is already the last entry (nothing
    /// changes), otherwise truncates to `index + 1` entries and returns the
    /// topic now at the end.
    pub fn navigate_to(&mut self, index: usize) -> Result<Option<&str>, HistoryError> {
        let len = self.topics.len();
        if index >= len {
            return Err(HistoryError { index, len });
        }
        if index == len - 1 {
            return Ok(None);
        }
        self.topics.truncate(index + 1);
        Ok(Some(self.topics[index].as_str()))
    }

    /// Replace everything with a single root entry.
    pub fn reset(&mut self, root: impl Into<String>) {
        self.topics.clear();
        self.topics.push(root.into());
    }

    pub fn root(&self) -> &str {
        &self.topics[0]
    }

    pub fn current(&self) -> &str {
        // Never empty: `new` and `reset` both leave one entry, `truncate`
        // keeps at least index 0.
        &self.topics[self.topics.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn is_at_root(&self) -> bool {
        self.topics.len() == 1
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}
