//! In-memory bookmark storage.
//!
//! Holds the last persisted bookmark set in process memory. Clones share the same
//! underlying set, so a test can keep a handle and inspect what the state store
//! wrote.

use crate::domain::error::{ForkifyError, Result};
use crate::domain::Recipe;
use crate::storage::backend::BookmarkStorage;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct MemoryBookmarkStore {
    bookmarks: Arc<Mutex<Vec<Recipe>>>,
}

impl MemoryBookmarkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bookmarks`.
    #[must_use]
    pub fn with_bookmarks(bookmarks: Vec<Recipe>) -> Self {
        Self {
            bookmarks: Arc::new(Mutex::new(bookmarks)),
        }
    }

    /// Returns a copy of the currently stored set.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Storage`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Recipe>> {
        self.bookmarks
            .lock()
            .map(|b| b.clone())
            .map_err(|e| ForkifyError::Storage(format!("bookmark lock poisoned: {e}")))
    }
}

impl BookmarkStorage for MemoryBookmarkStore {
    fn load(&self) -> Result<Vec<Recipe>> {
        self.snapshot()
    }

    fn persist(&mut self, bookmarks: &[Recipe]) -> Result<()> {
        let mut stored = self
            .bookmarks
            .lock()
            .map_err(|e| ForkifyError::Storage(format!("bookmark lock poisoned: {e}")))?;
        *stored = bookmarks.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.persist(&[])
    }
}
