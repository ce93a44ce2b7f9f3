//! File-backed preference store.
//!
//! Persists the page-size preference as a decimal string in a small file
//! under the platform data directory, read once at startup and rewritten
//! on every page-size change.

use std::fs;
use std::path::PathBuf;

use crate::traits::PreferenceStore;

/// File name holding the page-size preference.
const PAGE_SIZE_FILE: &str = "page_size";

/// Preference store backed by a file in the user's data directory
/// (`~/.local/share/atlas` on Linux).
#[derive(Debug, Clone)]
pub struct FilePreferences {
    dir: PathBuf,
}

impl FilePreferences {
    /// Create a store rooted at the platform data directory.
    ///
    /// Returns `None` when the platform has no data directory to offer;
    /// the caller falls back to an in-memory store.
    pub fn new() -> Option<Self> {
        let dir = dirs::data_dir()?.join("atlas");
        Some(Self { dir })
    }

    /// Create a store rooted at a specific directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn page_size_path(&self) -> PathBuf {
        self.dir.join(PAGE_SIZE_FILE)
    }
}

impl PreferenceStore for FilePreferences {
    fn load_page_size(&self) -> Option<usize> {
        let contents = fs::read_to_string(self.page_size_path()).ok()?;
        match contents.trim().parse::<usize>() {
            Ok(n) if n > 0 => Some(n),
            _ => {
                tracing::warn!("ignoring unusable page-size preference: {:?}", contents);
                None
            }
        }
    }

    fn save_page_size(&self, n: usize) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!("failed to create preference directory: {}", e);
            return;
        }
        if let Err(e) = fs::write(self.page_size_path(), n.to_string()) {
            tracing::warn!("failed to save page-size preference: {}", e);
        }
    }
}
