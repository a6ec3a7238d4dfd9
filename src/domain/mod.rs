//! Domain layer for the Forkify client.
//!
//! This module contains the core domain types, independent of HTTP, storage or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe, ingredient and preview models with serving scaling
//!
//! # Examples
//!
//! ```
//! use forkify::domain::{Ingredient, Recipe};
//!
//! let mut recipe = Recipe::new("r1", "Pizza", 4);
//! recipe.ingredients.push(Ingredient::new(Some(2.0), "kg", "flour"));
//! recipe.scale_servings(8)?;
//! assert_eq!(recipe.ingredients[0].quantity, Some(4.0));
//! # Ok::<(), forkify::ForkifyError>(())
//! ```

pub mod error;
pub mod recipe;

pub use error::{ForkifyError, Result};
pub use recipe::{Ingredient, Recipe, RecipePreview};
