//! Shared fixtures for integration tests.

#![allow(dead_code)]

use forkify::api::{RecipeApi, RecipeUpload};
use forkify::{ForkifyError, Ingredient, Recipe, RecipePreview, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-process stand-in for the recipe API.
#[derive(Default)]
pub struct FakeApi {
    recipes: Mutex<HashMap<String, Recipe>>,
    results: Vec<RecipePreview>,
    fail_search: bool,
    calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `count` previews `r0..r{count-1}`, each also fetchable as a recipe.
    pub fn with_results(count: usize) -> Self {
        let api = Self {
            results: (0..count)
                .map(|i| recipe(&format!("r{i}"), &format!("Recipe {i}")).preview())
                .collect(),
            ..Self::default()
        };
        for i in 0..count {
            api.insert(recipe(&format!("r{i}"), &format!("Recipe {i}")));
        }
        api
    }

    pub fn failing_search() -> Self {
        Self {
            fail_search: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, recipe: Recipe) {
        if let Ok(mut recipes) = self.recipes.lock() {
            recipes.insert(recipe.id.clone(), recipe);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecipeApi for FakeApi {
    async fn fetch_recipe(&self, id: &str) -> Result<Recipe> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recipes
            .lock()
            .ok()
            .and_then(|r| r.get(id).cloned())
            .ok_or_else(|| ForkifyError::Fetch(format!("Invalid _id: {id} (400)")))
    }

    async fn search_recipes(&self, _query: &str) -> Result<Vec<RecipePreview>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(ForkifyError::Timeout(10));
        }
        Ok(self.results.clone())
    }

    async fn upload_recipe(&self, upload: &RecipeUpload) -> Result<Recipe> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut recipe = Recipe::new("uploaded-1", upload.title.clone(), upload.servings);
        recipe.publisher = upload.publisher.clone();
        recipe.cooking_time = upload.cooking_time;
        recipe.ingredients = upload.ingredients.clone();
        recipe.key = Some("user-key".to_string());
        self.insert(recipe.clone());
        Ok(recipe)
    }
}

/// A 4-serving recipe with 2 kg of flour and unmeasured salt.
pub fn recipe(id: &str, title: &str) -> Recipe {
    let mut recipe = Recipe::new(id, title, 4);
    recipe.publisher = "Test Kitchen".to_string();
    recipe.image_url = format!("http://img/{id}.jpg");
    recipe.cooking_time = 45;
    recipe.ingredients = vec![
        Ingredient::new(Some(2.0), "kg", "flour"),
        Ingredient::new(None, "", "salt"),
    ];
    recipe
}
