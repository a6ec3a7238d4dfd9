//! Forkify: recipe search, serving scaling and bookmarks on top of the Forkify API.
//!
//! Forkify is a client core that provides:
//! - Recipe search with client-side pagination
//! - Recipe detail with linear ingredient scaling by servings
//! - Persistent bookmarks backed by an atomically written JSON file
//! - Recipe upload from free-text ingredient lines
//! - Views rendered to node trees and patched in place by a keyed reconciler

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Controller: UI hooks → store → views             │
//! │  - Store: recipe, search and bookmark state         │
//! │  - Pagination policy, upload form parsing           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - Node trees  │   │ - JSON I/O    │   │ - reqwest     │
//! │ - Reconciler  │   │ - Atomic save │   │ - Timeout race│
//! │ - Views       │   │ - Backend API │   │ - Payloads    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Recipe model (domain/recipe)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON-lines tracing to a rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: HTTP collaborator (`RecipeApi`, `ForkifyClient`)
//! - [`app`]: State store, controller, pagination, upload parsing
//! - [`domain`]: Core domain types (Recipe, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Bookmark persistence
//! - [`ui`]: Node trees, reconciler and view variants
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file; every key is optional:
//!
//! ```toml
//! api_url = "https://forkify-api.herokuapp.com/api/v2/recipes/"
//! api_key = "your-key"
//! timeout_secs = 10
//! results_per_page = 10
//! modal_close_secs = 2.5
//! data_dir = "~/.local/share/forkify"
//! trace_level = "debug"
//! ```
//!
//! `FORKIFY_API_KEY` overrides `api_key` when set.
//!
//! # Example
//!
//! ```no_run
//! use forkify::{initialize, Config, Event};
//!
//! # async fn run() -> forkify::Result<()> {
//! let config = Config::load(None)?;
//! let mut controller = initialize(&config)?;
//!
//! controller.handle(Event::SearchSubmit { query: "pizza".into() }).await?;
//! controller.handle(Event::PaginationClick { goto: 2 }).await?;
//! println!("{}", controller.results_view().to_html());
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Keyed Reconciliation
//!
//! List items carry the recipe id as a reconciliation key, so a growing,
//! shrinking or reordered list is patched with inserts, removals and moves
//! instead of positional overwrites.
//!
//! ## Explicit Collaborators
//!
//! The store owns its state and receives the HTTP and storage collaborators as
//! trait implementations, so every operation can be exercised without a
//! network or a browser.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use api::{ForkifyClient, RecipeApi};
pub use app::{Action, Controller, Event, SearchState, Store, UploadForm};
pub use domain::{ForkifyError, Ingredient, Recipe, RecipePreview, Result};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::JsonBookmarkStore;

/// Default base URL of the recipe API.
pub const API_URL: &str = "https://forkify-api.herokuapp.com/api/v2/recipes/";

/// Environment variable overriding [`Config::api_key`].
pub const API_KEY_ENV: &str = "FORKIFY_API_KEY";

/// Client configuration.
///
/// Missing keys fall back to the [`Default`] values.
///
/// # Example
///
/// ```rust
/// use forkify::Config;
///
/// let config = Config::from_toml_str("results_per_page = 5\ntimeout_secs = 3")?;
/// assert_eq!(config.results_per_page, 5);
/// assert_eq!(config.timeout_secs, 3);
/// assert_eq!(config.api_url, forkify::API_URL);
/// # Ok::<(), forkify::ForkifyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the recipe API. Default: [`API_URL`]
    pub api_url: String,

    /// API key appended to every request as `?key=`.
    ///
    /// Required for uploads; searches and lookups work without one.
    pub api_key: Option<String>,

    /// Deadline of each HTTP request in seconds. Default: 10
    pub timeout_secs: u64,

    /// Search results shown per page. Default: 10
    pub results_per_page: usize,

    /// Delay before the add-recipe window closes after a successful upload.
    /// Default: 2.5
    pub modal_close_secs: f64,

    /// Directory for bookmarks and logs. Default: see
    /// [`infrastructure::get_data_dir`]. A leading `~` is expanded.
    pub data_dir: Option<String>,

    /// Tracing filter, e.g. `info` or `forkify=debug`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            api_key: None,
            timeout_secs: 10,
            results_per_page: 10,
            modal_close_secs: 2.5,
            data_dir: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// Environment overrides are not applied; see [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Config`] if the document is not valid TOML, has
    /// mistyped keys, or fails [`Config::validate`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ForkifyError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// [`ForkifyError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&source).map_err(|e| ForkifyError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration for a run.
    ///
    /// Reads `path` when given, otherwise starts from the defaults, then applies
    /// the `FORKIFY_API_KEY` override.
    ///
    /// # Errors
    ///
    /// As [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.apply_api_key_override(Some(key));
        }

        tracing::debug!(api_url = %config.api_url, has_key = config.api_key.is_some(), "configuration loaded");
        Ok(config)
    }

    /// Replaces `api_key` with `key` unless `key` is missing or blank.
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Config`] if `api_url` is blank, `timeout_secs` or
    /// `results_per_page` is 0, or `modal_close_secs` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(ForkifyError::Config("api_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ForkifyError::Config("timeout_secs must be greater than 0".to_string()));
        }
        if self.results_per_page == 0 {
            return Err(ForkifyError::Config("results_per_page must be greater than 0".to_string()));
        }
        if !self.modal_close_secs.is_finite() || self.modal_close_secs < 0.0 {
            return Err(ForkifyError::Config(format!(
                "modal_close_secs must be a non-negative number, got {}",
                self.modal_close_secs
            )));
        }
        Ok(())
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The modal close delay; zero if the configured value is out of range.
    #[must_use]
    pub fn modal_close(&self) -> Duration {
        Duration::try_from_secs_f64(self.modal_close_secs).unwrap_or(Duration::ZERO)
    }

    /// Resolved data directory, with `~` expanded.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.as_deref().map_or_else(infrastructure::get_data_dir, |dir| {
            PathBuf::from(infrastructure::expand_tilde(dir))
        })
    }
}

/// Builds the production controller for `config`.
///
/// Wires a [`ForkifyClient`] and a [`JsonBookmarkStore`] in the configured data
/// directory into a [`Store`], and wraps it in a [`Controller`]. Tracing is set
/// up separately with [`observability::init_tracing`].
///
/// # Errors
///
/// - [`ForkifyError::Config`] for an invalid configuration or API URL
/// - the storage error if the bookmark file exists but cannot be read
pub fn initialize(config: &Config) -> Result<Controller<ForkifyClient, JsonBookmarkStore>> {
    config.validate()?;
    tracing::debug!("initializing forkify");

    let client = ForkifyClient::new(config)?;
    let storage = JsonBookmarkStore::in_dir(&config.data_dir())?;
    tracing::debug!(bookmarks = %storage.path().display(), "bookmark storage ready");

    let store = Store::new(client, storage, config.results_per_page)?;
    Ok(Controller::new(store, config.modal_close()))
}
