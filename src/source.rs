//! REST Countries API client.
//!
//! This module provides the HTTP client that populates the record set,
//! queried exactly once per session. There is no retry, no cancellation,
//! and no partial-data recovery: on any failure the caller logs the error
//! and browses an empty list.

use std::sync::Arc;
use thiserror::Error;

use crate::models::Country;
use crate::traits::{Headers, HttpClient, HttpError};

/// Default base URL for the REST Countries API.
pub const COUNTRIES_BASE_URL: &str = "https://restcountries.com";

/// Endpoint path requesting only the fields the browser needs.
const ALL_COUNTRIES_PATH: &str = "/v2/all?fields=name,region,area";

/// Error type for country fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// Server returned an error status
    #[error("server returned status {status}")]
    Status { status: u16 },
    /// JSON deserialization failed
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the country collection endpoint.
pub struct CountrySource {
    base_url: String,
    client: Arc<dyn HttpClient>,
}

impl CountrySource {
    /// Create a source against the default REST Countries base URL.
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: COUNTRIES_BASE_URL.to_string(),
            client,
        }
    }

    /// Create a source against a custom base URL (used by tests).
    pub fn with_base_url(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Fetch the full record set.
    ///
    /// One GET for all countries with name/region/area fields; the order
    /// of the returned records is whatever the remote sent.
    pub async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let url = format!("{}{}", self.base_url, ALL_COUNTRIES_PATH);
        tracing::debug!("fetching country records from {}", url);

        let response = self.client.get(&url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let countries: Vec<Country> = response.json()?;
        tracing::info!("fetched {} country records", countries.len());
        Ok(countries)
    }
}
