//! Diagnostics sink - ordered record of why checks passed or failed.

use std::collections::VecDeque;

/// Entries kept by [`Diagnostics::default`].
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded, append-only log of human-readable check messages.
///
/// Once full, the oldest entry is evicted for each new one. Entries are
/// recorded for every check; whether a caller shows them is decided by the
/// `debug` flag of the rule set in use (see `Sanity::debug_info`).
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Diagnostics {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();

        #[cfg(feature = "tracing")]
        tracing::debug!("{}", message);

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    /// Entries in insertion order, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut log = Diagnostics::default();
        log.push("first");
        log.push(String::from("second"));
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(log.last(), Some("second"));
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut log = Diagnostics::with_capacity(2);
        log.push("a");
        log.push("b");
        log.push("c");
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_reset() {
        let mut log = Diagnostics::default();
        log.push("x");
        log.reset();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_still_keeps_latest() {
        let mut log = Diagnostics::with_capacity(0);
        log.push("a");
        log.push("b");
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b"]);
    }
}
