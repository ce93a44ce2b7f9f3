//! In-memory test doubles for the HTTP and preference ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, PreferenceStore, Response};

/// Mock HTTP client for testing.
///
/// Configured with responses per URL; records every request so tests can
/// verify what was fetched. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, Result<Response, HttpError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for a specific URL.
    pub fn set_response(&self, url: &str, response: Result<Response, HttpError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, _headers: &Headers) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(HttpError::Other(format!("no mock response for {}", url))))
    }
}

/// In-memory preference store recording every write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    stored: Arc<Mutex<Option<usize>>>,
    writes: Arc<Mutex<Vec<usize>>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already persisted.
    pub fn with_page_size(n: usize) -> Self {
        let store = Self::default();
        *store.stored.lock().unwrap() = Some(n);
        store
    }

    /// Every page size saved so far, in order.
    pub fn recorded_writes(&self) -> Vec<usize> {
        self.writes.lock().unwrap().clone()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn load_page_size(&self) -> Option<usize> {
        *self.stored.lock().unwrap()
    }

    fn save_page_size(&self, n: usize) {
        *self.stored.lock().unwrap() = Some(n);
        self.writes.lock().unwrap().push(n);
    }
}
