//! JSON file-based bookmark storage.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) so a
//! crash during a save never leaves a truncated bookmark file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n), once when the state store is created
//! - **Write**: O(n), serializes and writes the entire bookmark set
//! - **Best for**: hundreds of bookmarks, one write per user action

use crate::domain::error::{ForkifyError, Result};
use crate::domain::Recipe;
use crate::storage::backend::BookmarkStorage;
use crate::storage::models::{BookmarkFile, StoredBookmarks};
use std::path::{Path, PathBuf};

/// File name of the bookmark file inside the data directory.
pub const BOOKMARKS_FILE_NAME: &str = "bookmarks.json";

/// JSON file bookmark storage.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "bookmarks": [
///     {
///       "id": "5ed6604591c37cdc054bc886",
///       "title": "Pasta",
///       "servings": 4,
///       ...
///     }
///   ]
/// }
/// ```
#[derive(Debug)]
pub struct JsonBookmarkStore {
    file_path: PathBuf,
}

impl JsonBookmarkStore {
    /// Creates a JSON bookmark store backed by `file_path`.
    ///
    /// Parent directories are created automatically. The file itself is only
    /// created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON bookmark storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { file_path })
    }

    /// Creates a store for `bookmarks.json` inside `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::new(data_dir.join(BOOKMARKS_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write_atomic(&self, file: &BookmarkFile) -> Result<()> {
        let json = serde_json::to_string_pretty(file)
            .map_err(|e| ForkifyError::Storage(format!("failed to serialize bookmarks: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl BookmarkStorage for JsonBookmarkStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        let _span = tracing::debug_span!("json_load_bookmarks", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no bookmark file yet, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stored: StoredBookmarks = serde_json::from_str(&contents)
            .map_err(|e| ForkifyError::Storage(format!("failed to parse bookmarks: {e}")))?;
        let bookmarks = stored.into_bookmarks();

        tracing::debug!(count = bookmarks.len(), "loaded bookmarks");
        Ok(bookmarks)
    }

    fn persist(&mut self, bookmarks: &[Recipe]) -> Result<()> {
        let _span = tracing::debug_span!("json_persist_bookmarks", count = bookmarks.len()).entered();

        self.write_atomic(&BookmarkFile::new(bookmarks.to_vec()))?;

        tracing::debug!("bookmarks saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_clear_bookmarks").entered();

        match std::fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str) -> Recipe {
        Recipe::new(id, format!("Recipe {id}"), 2)
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonBookmarkStore::in_dir(dir.path()).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn persist_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonBookmarkStore::in_dir(dir.path()).unwrap();

        store.persist(&[recipe("b"), recipe("a"), recipe("c")]).unwrap();

        let reopened = JsonBookmarkStore::in_dir(dir.path()).unwrap();
        let ids: Vec<_> = reopened.load().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert!(!dir.path().join("bookmarks.tmp").exists());
    }

    #[test]
    fn bare_array_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BOOKMARKS_FILE_NAME);
        let json = serde_json::to_string(&vec![recipe("x")]).unwrap();
        std::fs::write(&path, json).unwrap();

        let store = JsonBookmarkStore::new(path).unwrap();
        assert_eq!(store.load().unwrap()[0].id, "x");
    }

    #[test]
    fn browser_bookmarks_with_camel_case_fields_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BOOKMARKS_FILE_NAME);
        let json = r#"[{
            "id": "5ed6604591c37cdc054bc886",
            "title": "Pizza",
            "publisher": "Closet Cooking",
            "source": "http://example.com/pizza",
            "image": "http://example.com/pizza.jpg",
            "servings": 4,
            "cookingTime": 45,
            "ingredients": [{"quantity": 1.5, "unit": "cups", "description": "flour"}],
            "bookmarked": true
        }]"#;
        std::fs::write(&path, json).unwrap();

        let store = JsonBookmarkStore::new(path).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].source_url, "http://example.com/pizza");
        assert_eq!(loaded[0].image_url, "http://example.com/pizza.jpg");
        assert_eq!(loaded[0].cooking_time, 45);
        assert_eq!(loaded[0].ingredients[0].quantity, Some(1.5));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(BOOKMARKS_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonBookmarkStore::new(path).unwrap();
        assert!(matches!(store.load(), Err(ForkifyError::Storage(_))));
    }

    #[test]
    fn clear_removes_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonBookmarkStore::in_dir(dir.path()).unwrap();
        store.persist(&[recipe("a")]).unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
