//! View variants and shared markup fragments.
//!
//! Each component renders one part of the interface as a node tree. The list
//! views key every preview by recipe id so the incremental renderer can match
//! items across updates.
//!
//! # Components
//!
//! - [`recipe`]: Recipe detail view (servings controls, bookmark button, ingredients)
//! - [`preview`]: One recipe preview, shared by the list views
//! - [`results`]: Search results page
//! - [`bookmarks`]: Bookmarks panel
//! - [`pagination`]: Previous/next page buttons
//! - [`upload`]: Add-recipe form
//! - [`feedback`]: Spinner, error and message fragments

pub mod bookmarks;
pub mod feedback;
pub mod pagination;
pub mod preview;
pub mod recipe;
pub mod results;
pub mod upload;

pub use bookmarks::BookmarksView;
pub use pagination::PaginationView;
pub use preview::PreviewView;
pub use recipe::RecipeView;
pub use results::ResultsView;
pub use upload::AddRecipeView;

use crate::ui::node::{el, Element};

/// Path of the SVG sprite holding all icons.
pub const ICONS: &str = "img/icons.svg";

/// An `<svg>` showing `icon` from the sprite.
pub(crate) fn icon(class: Option<&str>, icon: &str) -> Element {
    let svg = el("svg").child(el("use").attr("href", format!("{ICONS}#icon-{icon}")));
    match class {
        Some(class) => svg.class(class),
        None => svg,
    }
}
