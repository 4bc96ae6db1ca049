use crate::io::LocalStore;
use tempfile::TempDir;

pub fn create_test_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// A store rooted in a fresh temp directory. Keep the `TempDir` alive for
/// the duration of the test.
pub fn create_test_store() -> (TempDir, LocalStore) {
    let dir = create_test_data_dir();
    let store = LocalStore::new(dir.path());
    (dir, store)
}
