//! Trait abstractions for external side effects.
//!
//! The core never talks to the network or the filesystem directly; it goes
//! through these ports so tests can substitute in-memory implementations.

pub mod http;
pub mod preferences;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use preferences::PreferenceStore;
