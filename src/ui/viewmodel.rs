//! View models consumed by the list and pagination views.
//!
//! View models are plain data computed by the state store. They carry everything
//! a view needs, such as which preview is active, so views stay pure functions of
//! their input.

use crate::domain::{Recipe, RecipePreview};

/// A list of previews with the currently open recipe marked.
///
/// Used for both the search results page and the bookmarks panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewList {
    pub items: Vec<RecipePreview>,
    /// Id of the recipe shown in the detail view, if any.
    pub active_id: Option<String>,
}

impl PreviewList {
    #[must_use]
    pub const fn new(items: Vec<RecipePreview>, active_id: Option<String>) -> Self {
        Self { items, active_id }
    }

    /// Builds a list from full bookmarked recipes.
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe], active_id: Option<String>) -> Self {
        Self {
            items: recipes.iter().map(Recipe::preview).collect(),
            active_id,
        }
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_deref() == Some(id)
    }
}

/// Which pagination buttons to show, and the pages they lead to.
///
/// Computed by [`crate::app::pagination::controls`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationControls {
    pub page: usize,
    pub num_pages: usize,
    /// Target page of the "previous" button, if shown.
    pub previous: Option<usize>,
    /// Target page of the "next" button, if shown.
    pub next: Option<usize>,
}

impl PaginationControls {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}
