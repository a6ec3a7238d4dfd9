//! Rendering layer: node trees, incremental reconciliation and view variants.
//!
//! Views are pure functions from data to a node tree. A [`ViewPort`] holds the
//! live tree of one view and either replaces it wholesale or patches it in
//! place through the keyed reconciler in [`renderer`].
//!
//! # Architecture
//!
//! ```text
//! Store → view model → View::render → Vec<Node> → reconcile → Patch list
//!                                                     ↓
//!                                          live Document (ViewPort)
//! ```
//!
//! # Modules
//!
//! - [`node`]: Node tree, builders and HTML serialisation
//! - [`document`]: Live tree and patch application
//! - [`renderer`]: Keyed reconciliation (the incremental renderer)
//! - [`view`]: `View` capability trait and `ViewPort`
//! - [`viewmodel`]: Data passed to list and pagination views
//! - [`components`]: View variants
//! - [`helpers`]: Escaping and quantity formatting
//!
//! # Example
//!
//! ```rust
//! use forkify::domain::Recipe;
//! use forkify::ui::{RecipeView, ViewPort};
//!
//! let mut port = ViewPort::new(RecipeView);
//! let mut recipe = Recipe::new("r1", "Pizza", 4);
//! port.render(&recipe);
//!
//! recipe.bookmarked = true;
//! let patches = port.update(&recipe);
//! assert_eq!(patches.len(), 1); // only the bookmark icon changes
//! ```

pub mod components;
pub mod document;
pub mod helpers;
pub mod node;
pub mod renderer;
pub mod view;
pub mod viewmodel;

pub use components::{AddRecipeView, BookmarksView, PaginationView, PreviewView, RecipeView, ResultsView};
pub use document::{Document, NodePath, Patch};
pub use node::{el, text, Element, Node};
pub use renderer::reconcile;
pub use view::{PortState, View, ViewPort};
pub use viewmodel::{PaginationControls, PreviewList};
