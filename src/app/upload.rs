//! Parsing of the add-recipe form.
//!
//! The form arrives as free text: recipe fields plus any number of ingredient
//! lines of the form `"quantity,unit,description"`. Parsing happens before any
//! network call, so a malformed form never reaches the API.

use crate::api::RecipeUpload;
use crate::domain::error::{ForkifyError, Result};
use crate::domain::Ingredient;
use serde::Deserialize;

/// Raw add-recipe form data.
///
/// Can be deserialized from a TOML/JSON file (snake_case keys) or built from
/// submitted `(name, value)` pairs with [`UploadForm::from_fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadForm {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    /// Ingredient lines, `"quantity,unit,description"`; blank lines are ignored.
    pub ingredients: Vec<String>,
}

impl UploadForm {
    /// Builds a form from submitted `(name, value)` pairs.
    ///
    /// Recognised names are `title`, `sourceUrl`, `image`, `publisher`,
    /// `cookingTime` and `servings` (snake_case spellings are accepted too).
    /// Every field whose name starts with `ingredient` is an ingredient line,
    /// kept in submission order. Unknown names are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Format`] if `cookingTime` or `servings` is not a
    /// non-negative integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forkify::app::upload::UploadForm;
    ///
    /// let form = UploadForm::from_fields([
    ///     ("title", "Bread"),
    ///     ("servings", "4"),
    ///     ("ingredient-1", "0.5,kg,flour"),
    ///     ("ingredient-2", ""),
    /// ])?;
    /// assert_eq!(form.servings, 4);
    /// assert_eq!(form.ingredients, vec!["0.5,kg,flour", ""]);
    /// # Ok::<(), forkify::ForkifyError>(())
    /// ```
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::default();

        for (name, value) in fields {
            let (name, value) = (name.as_ref(), value.as_ref());
            match name {
                "title" => form.title = value.to_string(),
                "sourceUrl" | "source_url" => form.source_url = value.to_string(),
                "image" | "image_url" => form.image_url = value.to_string(),
                "publisher" => form.publisher = value.to_string(),
                "cookingTime" | "cooking_time" => form.cooking_time = parse_count("cookingTime", value)?,
                "servings" => form.servings = parse_count("servings", value)?,
                n if n.starts_with("ingredient") => form.ingredients.push(value.to_string()),
                other => tracing::trace!(field = other, "ignoring unknown upload field"),
            }
        }

        Ok(form)
    }

    /// Validates the form and converts it into the API request body.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Format`] if any non-empty ingredient line is
    /// malformed (see [`parse_ingredient`]), and
    /// [`ForkifyError::InvalidServings`] if `servings` is 0.
    pub fn to_upload(&self) -> Result<RecipeUpload> {
        if self.servings == 0 {
            return Err(ForkifyError::InvalidServings(0));
        }

        Ok(RecipeUpload {
            title: self.title.clone(),
            source_url: self.source_url.clone(),
            image_url: self.image_url.clone(),
            publisher: self.publisher.clone(),
            cooking_time: self.cooking_time,
            servings: self.servings,
            ingredients: parse_ingredients(&self.ingredients)?,
        })
    }
}

/// Parses every non-empty line with [`parse_ingredient`], keeping order.
///
/// # Errors
///
/// Returns the first [`ForkifyError::Format`] encountered.
pub fn parse_ingredients<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Ingredient>> {
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .map(parse_ingredient)
        .collect()
}

/// Parses one `"quantity,unit,description"` line.
///
/// Fields are trimmed. An empty quantity means "no quantity" (`None`); the unit
/// may be empty.
///
/// # Errors
///
/// Returns [`ForkifyError::Format`] if the line does not split into exactly three
/// comma-separated fields, or if the quantity is not a number.
///
/// # Example
///
/// ```rust
/// use forkify::app::upload::parse_ingredient;
/// use forkify::domain::Ingredient;
///
/// assert_eq!(parse_ingredient("2,kg,flour")?, Ingredient::new(Some(2.0), "kg", "flour"));
/// assert_eq!(parse_ingredient(",,salt")?, Ingredient::new(None, "", "salt"));
/// assert!(parse_ingredient("2,kg").is_err());
/// # Ok::<(), forkify::ForkifyError>(())
/// ```
pub fn parse_ingredient(line: &str) -> Result<Ingredient> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [quantity, unit, description] = fields.as_slice() else {
        return Err(ForkifyError::Format(format!(
            "Wrong ingredient format! Please use the correct format 'Quantity,Unit,Description': {line:?}"
        )));
    };

    let quantity = if quantity.is_empty() {
        None
    } else {
        let value: f64 = quantity
            .parse()
            .map_err(|_| ForkifyError::Format(format!("Wrong ingredient quantity {quantity:?} in {line:?}")))?;
        if !value.is_finite() {
            return Err(ForkifyError::Format(format!("Wrong ingredient quantity {quantity:?} in {line:?}")));
        }
        Some(value)
    };

    Ok(Ingredient::new(quantity, *unit, *description))
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| ForkifyError::Format(format!("{field} must be a whole number, got {value:?}")))
}
