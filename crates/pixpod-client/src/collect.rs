//! Typed per-item results for collection fetches.
//!
//! One corrupt or unreachable document never blocks the rest of a
//! collection; it becomes a [`Skip`] the caller can inspect instead of a
//! line lost in a log.

use serde::Serialize;

/// An item a collection fetch left out, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skip {
    pub uri: String,
    pub reason: String,
}

/// Result of a collection fetch: the items that resolved, plus the skips.
#[derive(Debug, Clone, Serialize)]
pub struct Collected<T> {
    pub items: Vec<T>,
    pub skipped: Vec<Skip>,
}

impl<T> Default for Collected<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> Collected<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Record a skipped item and log it.
    pub fn skip(&mut self, uri: &str, reason: &impl std::fmt::Display) {
        tracing::warn!(uri = %uri, reason = %reason, "skipping item");
        self.skipped.push(Skip {
            uri: uri.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn merge(&mut self, other: Collected<T>) {
        self.items.extend(other.items);
        self.skipped.extend(other.skipped);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
