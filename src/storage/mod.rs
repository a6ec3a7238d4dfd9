//! Storage layer for persistent bookmark data.
//!
//! Bookmarks are the only state that outlives a session. They are kept as an
//! ordered list of full recipes, unique by id, and written back wholesale after
//! every mutation.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: In-memory storage for tests and ephemeral sessions
//! - `models`: On-disk bookmark file format

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::BookmarkStorage;
pub use json::JsonBookmarkStore;
pub use memory::MemoryBookmarkStore;
pub use models::BookmarkFile;
