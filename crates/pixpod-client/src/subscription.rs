//! Remote-change subscriptions.
//!
//! Registering a document yields a handle; the registration lives exactly as
//! long as the handle. Registration is pure bookkeeping from the caller's
//! point of view: nothing awaits it, and a notifier can drain the registry
//! out of band.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use uuid::Uuid;

type Registrations = Mutex<HashMap<Uuid, String>>;

#[derive(Clone, Default)]
pub struct SubscriptionRegistry {
    inner: Arc<Registrations>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching a document for remote changes.
    pub fn register(&self, uri: &str) -> SubscriptionHandle {
        let id = Uuid::new_v4();
        self.inner.lock().insert(id, uri.to_string());
        tracing::debug!(uri = %uri, "watching document for remote changes");
        SubscriptionHandle {
            id,
            uri: uri.to_string(),
            registrations: Arc::downgrade(&self.inner),
        }
    }

    pub fn is_watched(&self, uri: &str) -> bool {
        self.inner.lock().values().any(|watched| watched == uri)
    }

    /// The distinct documents currently watched, sorted.
    pub fn watched(&self) -> Vec<String> {
        let mut uris: Vec<String> = self.inner.lock().values().cloned().collect();
        uris.sort();
        uris.dedup();
        uris
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

/// A live registration; dropping it (or calling [`unsubscribe`]) ends it.
///
/// [`unsubscribe`]: SubscriptionHandle::unsubscribe
pub struct SubscriptionHandle {
    id: Uuid,
    uri: String,
    registrations: Weak<Registrations>,
}

impl SubscriptionHandle {
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn unsubscribe(self) {}
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(registrations) = self.registrations.upgrade() {
            registrations.lock().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_lifetime_bounds_the_registration() {
        let registry = SubscriptionRegistry::new();
        let handle = registry.register("http://e.org/doc");
        assert!(registry.is_watched("http://e.org/doc"));

        handle.unsubscribe();
        assert!(!registry.is_watched("http://e.org/doc"));
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_registrations_are_independent() {
        let registry = SubscriptionRegistry::new();
        let first = registry.register("http://e.org/doc");
        let second = registry.register("http://e.org/doc");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.watched(), vec!["http://e.org/doc".to_string()]);

        drop(first);
        assert!(registry.is_watched("http://e.org/doc"));
        drop(second);
        assert!(!registry.is_watched("http://e.org/doc"));
    }
}
