//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently limited to resolving the per-user data directory that holds the
//! bookmark file and rotated log files.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, DATA_DIR_ENV};
