//! Structured logging to a rotating JSON-lines file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (JSON) → RotatingFileWriter → forkify.log
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: events written to `<data_dir>/forkify.log`
//! - **Automatic Rotation**: files rotate at 10 MiB with 3-backup retention
//! - **JSON Lines**: one object per event, with the current span attached
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

pub mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
