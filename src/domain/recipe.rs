//! Recipe domain model and serving-size scaling.
//!
//! This module defines the full [`Recipe`] record shown in the detail view, the
//! abbreviated [`RecipePreview`] used by list views, and the [`Ingredient`] line
//! items whose quantities scale linearly with the number of servings.

use crate::domain::error::{ForkifyError, Result};
use serde::{Deserialize, Serialize};

/// A single ingredient line of a recipe.
///
/// `quantity` is `None` for ingredients without an amount ("salt to taste").
/// Such lines are left untouched when servings change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

impl Ingredient {
    #[must_use]
    pub fn new(quantity: Option<f64>, unit: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            quantity,
            unit: unit.into(),
            description: description.into(),
        }
    }
}

/// Full detail record for one dish.
///
/// The `bookmarked` flag is not provided by the API; the state store derives it
/// from bookmark membership whenever the recipe is loaded, and keeps it in sync
/// on every bookmark mutation. `key` is present only for user-uploaded recipes.
///
/// Serialises with snake_case names; the camelCase names the browser client
/// stored (`source`, `image`, `cookingTime`) are accepted on read.
///
/// # Invariants
///
/// - `servings` is always at least 1 (enforced by [`Recipe::scale_servings`])
/// - ingredient quantities are proportional to `servings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    #[serde(alias = "source")]
    pub source_url: String,
    #[serde(alias = "image")]
    pub image_url: String,
    pub servings: u32,
    #[serde(alias = "cookingTime")]
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Recipe {
    /// Creates an empty recipe with the given id, title and servings.
    ///
    /// Remaining fields are blank; mostly useful for tests and for building
    /// recipes field by field.
    ///
    /// # Examples
    ///
    /// ```
    /// use forkify::domain::Recipe;
    ///
    /// let recipe = Recipe::new("5ed6604591c37cdc054bc886", "Pasta", 4);
    /// assert_eq!(recipe.servings, 4);
    /// assert!(!recipe.bookmarked);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            publisher: String::new(),
            source_url: String::new(),
            image_url: String::new(),
            servings,
            cooking_time: 0,
            ingredients: Vec::new(),
            bookmarked: false,
            key: None,
        }
    }

    /// Rescales every ingredient quantity to `new_servings` and stores the new count.
    ///
    /// Each quantity becomes `quantity * new_servings / servings`. Quantities that
    /// are `None` stay `None`. Scaling to the current servings value leaves the
    /// quantities unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::InvalidServings`] if `new_servings` is zero, or if
    /// the recipe currently has zero servings (which would divide by zero). The
    /// recipe is left unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use forkify::domain::{Ingredient, Recipe};
    ///
    /// let mut recipe = Recipe::new("r1", "Bread", 4);
    /// recipe.ingredients.push(Ingredient::new(Some(2.0), "kg", "flour"));
    /// recipe.scale_servings(8)?;
    /// assert_eq!(recipe.ingredients[0].quantity, Some(4.0));
    /// assert_eq!(recipe.servings, 8);
    /// # Ok::<(), forkify::ForkifyError>(())
    /// ```
    pub fn scale_servings(&mut self, new_servings: u32) -> Result<()> {
        if new_servings == 0 {
            return Err(ForkifyError::InvalidServings(0));
        }
        if self.servings == 0 {
            return Err(ForkifyError::InvalidServings(0));
        }
        if new_servings == self.servings {
            return Ok(());
        }

        let old = f64::from(self.servings);
        let new = f64::from(new_servings);
        for ingredient in &mut self.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity = *quantity * new / old;
            }
        }
        self.servings = new_servings;
        Ok(())
    }

    /// Returns `true` if this recipe was uploaded by the user (carries an API key).
    #[must_use]
    pub const fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }

    /// Builds the abbreviated list representation of this recipe.
    #[must_use]
    pub fn preview(&self) -> RecipePreview {
        RecipePreview {
            id: self.id.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            image_url: self.image_url.clone(),
            key: self.key.clone(),
        }
    }
}

/// Abbreviated record used in list displays (search results, bookmarks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePreview {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RecipePreview {
    #[must_use]
    pub const fn is_user_generated(&self) -> bool {
        self.key.is_some()
    }
}

impl From<&Recipe> for RecipePreview {
    fn from(recipe: &Recipe) -> Self {
        recipe.preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> Recipe {
        let mut recipe = Recipe::new("r1", "Bread", 4);
        recipe.ingredients = vec![
            Ingredient::new(Some(2.0), "kg", "flour"),
            Ingredient::new(Some(0.5), "l", "water"),
            Ingredient::new(None, "", "salt"),
        ];
        recipe
    }

    #[test]
    fn doubling_servings_doubles_quantities() {
        let mut recipe = bread();
        recipe.scale_servings(8).unwrap();

        assert_eq!(recipe.servings, 8);
        assert_eq!(recipe.ingredients[0].quantity, Some(4.0));
        assert_eq!(recipe.ingredients[1].quantity, Some(1.0));
        assert_eq!(recipe.ingredients[2].quantity, None);
    }

    #[test]
    fn scaling_to_current_servings_is_a_no_op() {
        let mut recipe = bread();
        let before = recipe.clone();
        recipe.scale_servings(4).unwrap();
        recipe.scale_servings(4).unwrap();
        assert_eq!(recipe, before);
    }

    #[test]
    fn zero_servings_is_rejected_without_mutation() {
        let mut recipe = bread();
        let before = recipe.clone();

        let err = recipe.scale_servings(0).unwrap_err();
        assert!(matches!(err, ForkifyError::InvalidServings(0)));
        assert_eq!(recipe, before);
    }

    #[test]
    fn halving_then_restoring_round_trips() {
        let mut recipe = bread();
        recipe.scale_servings(2).unwrap();
        assert_eq!(recipe.ingredients[0].quantity, Some(1.0));
        recipe.scale_servings(4).unwrap();
        assert_eq!(recipe.ingredients[0].quantity, Some(2.0));
    }

    #[test]
    fn preview_copies_list_fields() {
        let mut recipe = bread();
        recipe.publisher = "Home".to_string();
        recipe.key = Some("abc".to_string());

        let preview = recipe.preview();
        assert_eq!(preview.id, "r1");
        assert_eq!(preview.publisher, "Home");
        assert!(preview.is_user_generated());
    }
}
