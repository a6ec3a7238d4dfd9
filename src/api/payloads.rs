//! JSON wire payloads of the recipe API.
//!
//! The API wraps every successful response in an envelope
//! `{"status": "success", "data": {...}}` and uses snake_case field names.
//! These types convert between that shape and the domain models.

use crate::domain::{Ingredient, Recipe, RecipePreview};
use serde::{Deserialize, Serialize};

/// Success envelope shared by all endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    /// Result count, present on search responses only.
    #[serde(default)]
    pub results: Option<usize>,
    pub data: T,
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub recipe: RecipePayload,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub recipes: Vec<PreviewPayload>,
}

/// Full recipe as returned by `GET <base>/<id>` and `POST <base>`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipePayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub image_url: String,
    pub servings: u32,
    #[serde(default)]
    pub cooking_time: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub key: Option<String>,
}

impl From<RecipePayload> for Recipe {
    fn from(payload: RecipePayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            publisher: payload.publisher,
            source_url: payload.source_url,
            image_url: payload.image_url,
            servings: payload.servings,
            cooking_time: payload.cooking_time,
            ingredients: payload.ingredients,
            bookmarked: false,
            key: payload.key,
        }
    }
}

/// One search hit as returned by `GET <base>?search=<q>`.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewPayload {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

impl From<PreviewPayload> for RecipePreview {
    fn from(payload: PreviewPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title,
            publisher: payload.publisher,
            image_url: payload.image_url,
            key: payload.key,
        }
    }
}

/// Request body of `POST <base>` for a user-submitted recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeUpload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_envelope_maps_snake_case_fields() {
        let json = r#"{
            "status": "success",
            "data": { "recipe": {
                "id": "abc", "title": "Pizza", "publisher": "Closet Cooking",
                "source_url": "http://example.com/pizza", "image_url": "http://example.com/p.jpg",
                "servings": 4, "cooking_time": 45,
                "ingredients": [
                    { "quantity": 1.5, "unit": "cups", "description": "flour" },
                    { "quantity": null, "unit": "", "description": "salt" }
                ]
            } }
        }"#;

        let envelope: Envelope<RecipeData> = serde_json::from_str(json).unwrap();
        let recipe = Recipe::from(envelope.data.recipe);

        assert_eq!(recipe.source_url, "http://example.com/pizza");
        assert_eq!(recipe.cooking_time, 45);
        assert_eq!(recipe.ingredients[0].quantity, Some(1.5));
        assert_eq!(recipe.ingredients[1].quantity, None);
        assert!(recipe.key.is_none());
        assert!(!recipe.bookmarked);
    }

    #[test]
    fn upload_serializes_null_quantities() {
        let upload = RecipeUpload {
            title: "T".into(),
            source_url: "s".into(),
            image_url: "i".into(),
            publisher: "p".into(),
            cooking_time: 10,
            servings: 2,
            ingredients: vec![Ingredient::new(None, "", "salt")],
        };

        let value = serde_json::to_value(&upload).unwrap();
        assert_eq!(value["cooking_time"], 10);
        assert!(value["ingredients"][0]["quantity"].is_null());
    }
}
