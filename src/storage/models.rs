//! On-disk representation of the bookmark set.
//!
//! The bookmark file is kept separate from the domain types so the storage
//! format can be versioned without touching [`Recipe`].

use crate::domain::Recipe;
use serde::{Deserialize, Serialize};

/// Current version of the bookmark file format.
pub const BOOKMARK_FORMAT_VERSION: u32 = 1;

/// Top-level structure serialized to the bookmark file.
///
/// ```json
/// {
///   "version": 1,
///   "bookmarks": [ { "id": "...", "title": "...", ... } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkFile {
    pub version: u32,
    #[serde(default)]
    pub bookmarks: Vec<Recipe>,
}

impl BookmarkFile {
    #[must_use]
    pub fn new(bookmarks: Vec<Recipe>) -> Self {
        Self {
            version: BOOKMARK_FORMAT_VERSION,
            bookmarks,
        }
    }
}

impl Default for BookmarkFile {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Any bookmark layout accepted on read.
///
/// Besides the versioned object, a bare JSON array of recipes is accepted, which
/// is what browser local storage held under the `bookmarks` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredBookmarks {
    Versioned(BookmarkFile),
    Bare(Vec<Recipe>),
}

impl StoredBookmarks {
    pub(crate) fn into_bookmarks(self) -> Vec<Recipe> {
        match self {
            Self::Versioned(file) => file.bookmarks,
            Self::Bare(bookmarks) => bookmarks,
        }
    }
}
