//! Bookmark storage abstraction.
//!
//! This module defines the [`BookmarkStorage`] trait, the durable-storage seam of
//! the state store. The store reads the bookmark set once when it is created and
//! hands the complete set back after every mutation; backends never see partial
//! updates.

use crate::domain::error::Result;
use crate::domain::Recipe;

/// Abstraction over durable bookmark storage.
///
/// # Implementations
///
/// - [`JsonBookmarkStore`](crate::storage::JsonBookmarkStore): JSON file with atomic writes (default)
/// - [`MemoryBookmarkStore`](crate::storage::MemoryBookmarkStore): in-process store for tests
///
/// # Examples
///
/// ```no_run
/// use forkify::storage::{BookmarkStorage, JsonBookmarkStore};
/// use std::path::PathBuf;
///
/// let store = JsonBookmarkStore::new(PathBuf::from("/tmp/bookmarks.json"))?;
/// let bookmarks = store.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait BookmarkStorage: Send {
    /// Reads the stored bookmark set in insertion order.
    ///
    /// Returns an empty list if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be read or parsed.
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Overwrites the stored bookmark set with `bookmarks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previously stored set must
    /// remain intact in that case.
    fn persist(&mut self, bookmarks: &[Recipe]) -> Result<()>;

    /// Removes every stored bookmark.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be modified.
    fn clear(&mut self) -> Result<()>;
}

impl<S: BookmarkStorage + ?Sized> BookmarkStorage for Box<S> {
    fn load(&self) -> Result<Vec<Recipe>> {
        (**self).load()
    }

    fn persist(&mut self, bookmarks: &[Recipe]) -> Result<()> {
        (**self).persist(bookmarks)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}
