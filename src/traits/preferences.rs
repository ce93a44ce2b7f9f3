//! Preference store trait abstraction.
//!
//! A narrow key-value port for the one persisted setting (the page size),
//! so the core state logic has no dependency on a specific storage
//! technology.

/// Trait for loading and saving the page-size preference.
///
/// Saves are fire-and-forget: the implementation logs failures and
/// swallows them, matching the minimal-durability semantics of a single
/// user preference.
pub trait PreferenceStore: Send + Sync {
    /// Load the persisted page size.
    ///
    /// Returns `None` when nothing has been stored yet or the stored
    /// value is unusable (unparseable, zero).
    fn load_page_size(&self) -> Option<usize>;

    /// Persist the page size. Failures are logged, never surfaced.
    fn save_page_size(&self, n: usize);
}
