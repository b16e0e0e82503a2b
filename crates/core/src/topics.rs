//! Per-topic match frequency, used for the weak-topics panel.

use crate::model::VideoMatch;

/// Counts how often each topic key shows up among answer matches.
///
/// Process-wide and monotonically incremented; nothing resets it short of a
/// restart. Entries keep first-appearance order so `top_n` tie-breaking is
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicTracker {
    entries: Vec<(String, u32)>,
}

impl TopicTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for every match's derived topic key by one.
    pub fn record_matches(&mut self, matches: &[VideoMatch]) {
        for m in matches {
            let key = m.topic_key();
            match self.entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, count)) => *count += 1,
                None => self.entries.push((key, 1)),
            }
        }
    }

    /// Hit count for a single topic key.
    #[must_use]
    pub fn count(&self, key: &str) -> u32 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most-hit topics, highest count first. Ties keep
    /// first-appearance order (the sort is stable).
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(String, u32)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Bar width for the weak-topics display, as a percentage.
#[must_use]
pub fn bar_width_percent(count: u32) -> u32 {
    20u32.saturating_add(count.saturating_mul(15)).min(100)
}
