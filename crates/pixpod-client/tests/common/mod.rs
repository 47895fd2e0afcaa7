//! An in-memory pod for backend tests: documents in a map, failures on
//! demand, every remote call recorded.

use async_trait::async_trait;
use parking_lot::Mutex;
use pixpod_client::{DocumentClient, TURTLE_CONTENT_TYPE};
use pixpod_core::{Error, Result};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct MockPod {
    docs: Mutex<HashMap<String, String>>,
    failing: Mutex<HashSet<String>>,
    failing_write_substrings: Mutex<Vec<String>>,
    loads: Mutex<Vec<String>>,
    created: Mutex<Vec<(String, String)>>,
    writes: Mutex<Vec<String>>,
    collections: Mutex<Vec<String>>,
}

impl MockPod {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_doc(&self, uri: &str, text: impl Into<String>) {
        self.docs.lock().insert(uri.to_string(), text.into());
    }

    pub fn with_doc(self, uri: &str, text: impl Into<String>) -> Self {
        self.put_doc(uri, text);
        self
    }

    /// Every operation against this URI fails from now on.
    pub fn fail_on(&self, uri: &str) {
        self.failing.lock().insert(uri.to_string());
    }

    /// Creates/writes against URIs containing this substring fail; loads
    /// still succeed.
    pub fn fail_writes_containing(&self, fragment: &str) {
        self.failing_write_substrings.lock().push(fragment.to_string());
    }

    pub fn doc(&self, uri: &str) -> Option<String> {
        self.docs.lock().get(uri).cloned()
    }

    pub fn load_count(&self, uri: &str) -> usize {
        self.loads.lock().iter().filter(|u| *u == uri).count()
    }

    /// `(uri, content_type)` pairs, in creation order.
    pub fn created(&self) -> Vec<(String, String)> {
        self.created.lock().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    pub fn collections(&self) -> Vec<String> {
        self.collections.lock().clone()
    }

    fn check(&self, uri: &str) -> bool {
        !self.failing.lock().contains(uri)
    }

    fn check_write(&self, uri: &str) -> bool {
        self.check(uri)
            && !self
                .failing_write_substrings
                .lock()
                .iter()
                .any(|fragment| uri.contains(fragment.as_str()))
    }
}

#[async_trait]
impl DocumentClient for MockPod {
    async fn load(&self, uri: &str) -> Result<String> {
        self.loads.lock().push(uri.to_string());
        if !self.check(uri) {
            return Err(Error::fetch(uri));
        }
        self.docs
            .lock()
            .get(uri)
            .cloned()
            .ok_or_else(|| Error::fetch(uri))
    }

    async fn create(&self, uri: &str, body: Vec<u8>, content_type: &str) -> Result<String> {
        if !self.check_write(uri) {
            return Err(Error::write(uri));
        }
        self.created
            .lock()
            .push((uri.to_string(), content_type.to_string()));
        if content_type == TURTLE_CONTENT_TYPE {
            self.docs
                .lock()
                .insert(uri.to_string(), String::from_utf8_lossy(&body).into_owned());
        }
        Ok(uri.to_string())
    }

    async fn write(&self, uri: &str, body: String) -> Result<String> {
        if !self.check_write(uri) {
            return Err(Error::write(uri));
        }
        self.writes.lock().push(uri.to_string());
        self.docs.lock().insert(uri.to_string(), body);
        Ok(uri.to_string())
    }

    async fn create_collection(&self, uri: &str) -> Result<String> {
        if !self.check_write(uri) {
            return Err(Error::write(uri));
        }
        self.collections.lock().push(uri.to_string());
        Ok(uri.to_string())
    }
}
