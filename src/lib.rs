//! Atlas - a terminal browser for country data
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod models;
pub mod pipeline;
pub mod source;
pub mod traits;
pub mod ui;
pub mod view_state;
