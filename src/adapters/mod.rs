//! Concrete implementations of trait abstractions.
//!
//! Production adapters wrap reqwest and the filesystem; the [`mock`]
//! submodule provides in-memory test doubles for both ports.

pub mod file_preferences;
pub mod mock;
pub mod reqwest_http;

pub use file_preferences::FilePreferences;
pub use mock::{InMemoryPreferences, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
