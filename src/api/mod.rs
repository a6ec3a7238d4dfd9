//! HTTP collaborator for the recipe API.
//!
//! The state store never talks to the network directly; it goes through the
//! [`RecipeApi`] trait. [`ForkifyClient`] is the production implementation on top
//! of `reqwest`, and tests substitute in-process fakes.
//!
//! # Endpoints
//!
//! - `GET <base>/<id>?key=<key>` → one recipe
//! - `GET <base>?search=<q>&key=<key>` → list of previews
//! - `POST <base>?key=<key>` with a JSON body → the created recipe
//!
//! Every call is raced against the configured timeout (see [`race_timeout`]).
//!
//! # Modules
//!
//! - [`client`]: `reqwest`-backed implementation
//! - [`payloads`]: JSON wire types and their domain conversions
//! - [`timeout`]: request-versus-timer race

pub mod client;
pub mod payloads;
pub mod timeout;

pub use client::ForkifyClient;
pub use payloads::RecipeUpload;
pub use timeout::race_timeout;

use crate::domain::error::Result;
use crate::domain::{Recipe, RecipePreview};
use std::future::Future;

/// Abstraction over the remote recipe API.
///
/// Returned recipes always have `bookmarked == false`; bookmark membership is
/// the state store's concern.
pub trait RecipeApi: Send + Sync {
    /// Fetches one recipe by id.
    ///
    /// # Errors
    ///
    /// [`ForkifyError::Fetch`](crate::ForkifyError::Fetch) on network failure, unknown id or
    /// any non-2xx response; [`ForkifyError::Timeout`](crate::ForkifyError::Timeout) when the
    /// deadline passes first.
    fn fetch_recipe(&self, id: &str) -> impl Future<Output = Result<Recipe>> + Send;

    /// Searches recipes matching `query`.
    ///
    /// # Errors
    ///
    /// Same as [`RecipeApi::fetch_recipe`].
    fn search_recipes(&self, query: &str) -> impl Future<Output = Result<Vec<RecipePreview>>> + Send;

    /// Creates a recipe and returns it as stored by the API (with `id` and `key`).
    ///
    /// # Errors
    ///
    /// Same as [`RecipeApi::fetch_recipe`].
    fn upload_recipe(&self, upload: &RecipeUpload) -> impl Future<Output = Result<Recipe>> + Send;
}
