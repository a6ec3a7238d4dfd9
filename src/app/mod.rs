//! Application layer coordinating state, events, and view updates.
//!
//! This module sits between the front end (the CLI in `main.rs`, or any other
//! host) and the domain/api/storage/ui layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI hook → Event → Controller → Store operation → view model → ViewPort
//!                       ↓
//!                    Actions → host (location, modal window)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the host
//! - [`controller`]: Event processing and view coordination
//! - [`pagination`]: Pure pagination policy
//! - [`state`]: The state store
//! - [`upload`]: Add-recipe form parsing

pub mod actions;
pub mod controller;
pub mod pagination;
pub mod state;
pub mod upload;

pub use actions::Action;
pub use controller::{Controller, Event};
pub use state::{SearchState, Store};
pub use upload::UploadForm;
