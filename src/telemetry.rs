//! Message resolution hook.
//!
//! Every successful lookup reports which key was resolved for which locale.
//! The default tracker does nothing; [`UsageCounter`] keeps per-process
//! counts that an application can export however it likes.

use std::{
    collections::BTreeMap,
    sync::{Mutex, PoisonError},
};

/// A resolved message, as seen by a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEvent<'a> {
    pub key: &'a str,
    /// The locale the caller asked for, before canonicalization.
    pub requested_locale: &'a str,
    /// The locale whose template was used.
    pub resolved_locale: &'a str,
    pub fell_back: bool,
}

pub trait MessageTracker: Send + Sync {
    fn track(&self, event: &MessageEvent<'_>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl MessageTracker for NoopTracker {
    fn track(&self, _event: &MessageEvent<'_>) {}
}

/// Counts resolutions per (key, resolved locale).
#[derive(Debug, Default)]
pub struct UsageCounter {
    counts: Mutex<BTreeMap<(String, String), u64>>,
}

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, key: &str, locale: &str) -> u64 {
        let counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts
            .get(&(key.to_string(), locale.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        let counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts.values().sum()
    }

    /// All counts, sorted by key then locale.
    pub fn snapshot(&self) -> Vec<(String, String, u64)> {
        let counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts
            .iter()
            .map(|((key, locale), n)| (key.clone(), locale.clone(), *n))
            .collect()
    }
}

impl MessageTracker for UsageCounter {
    fn track(&self, event: &MessageEvent<'_>) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        *counts
            .entry((event.key.to_string(), event.resolved_locale.to_string()))
            .or_insert(0) += 1;
    }
}
