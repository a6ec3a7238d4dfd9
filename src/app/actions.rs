//! Side effects requested by the controller from its host.
//!
//! The controller updates its view ports itself, but some effects belong to
//! whoever embeds it: a browser shell changes the location hash, a CLI prints.
//! [`Controller::handle`](crate::app::Controller::handle) returns these as a
//! `Vec<Action>` to be executed in order.

use std::time::Duration;

/// Commands for the host of a [`Controller`](crate::app::Controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Points the location (URL hash) at `recipe_id` without emitting a load event.
    ///
    /// Sent after an upload, when the new recipe is already rendered.
    SetLocation { recipe_id: String },

    /// Closes the add-recipe window once `after` has elapsed.
    CloseUploadWindow { after: Duration },
}
