//! File-backed preference store tests.

use atlas::adapters::FilePreferences;
use atlas::traits::PreferenceStore;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    assert_eq!(store.load_page_size(), None);

    store.save_page_size(15);
    assert_eq!(store.load_page_size(), Some(15));

    // The value is stored as a plain decimal string
    let contents = std::fs::read_to_string(temp_dir.path().join("page_size")).unwrap();
    assert_eq!(contents, "15");
}

#[test]
fn test_save_overwrites_previous_value() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    store.save_page_size(10);
    store.save_page_size(20);
    assert_eq!(store.load_page_size(), Some(20));
}

#[test]
fn test_garbage_contents_load_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    std::fs::write(temp_dir.path().join("page_size"), "twelve").unwrap();
    assert_eq!(store.load_page_size(), None);

    std::fs::write(temp_dir.path().join("page_size"), "0").unwrap();
    assert_eq!(store.load_page_size(), None);
}

#[test]
fn test_trailing_whitespace_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let store = FilePreferences::with_dir(temp_dir.path().to_path_buf());

    std::fs::write(temp_dir.path().join("page_size"), "15\n").unwrap();
    assert_eq!(store.load_page_size(), Some(15));
}

#[test]
fn test_save_creates_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested").join("atlas");
    let store = FilePreferences::with_dir(nested);

    store.save_page_size(10);
    assert_eq!(store.load_page_size(), Some(10));
}
