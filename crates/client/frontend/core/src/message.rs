//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Info)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Error)
    }
}

/// Circular buffer of messages displayed to the user.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::info(message));
    }

    /// Most recent entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push(MessageEntry::warning("three"));

        let texts: Vec<_> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.recent(1).next().unwrap().level, MessageLevel::Warning);
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.push_text("a");
        log.push_text("b");
        assert_eq!(log.len(), 1);
    }
}
