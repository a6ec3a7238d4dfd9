//! The state store: single source of truth for recipe, search and bookmark data.
//!
//! [`Store`] owns the currently loaded [`Recipe`], the [`SearchState`] and the
//! bookmark set. It reaches the network only through a [`RecipeApi`] and durable
//! storage only through a [`BookmarkStorage`], both injected at construction, so
//! tests can drive it with in-process fakes.
//!
//! # Invariants
//!
//! - the bookmark set is unique by id and keeps insertion order
//! - the loaded recipe's `bookmarked` flag always agrees with membership in the
//!   bookmark set
//! - the bookmark set is persisted after every mutation; a failed write rolls
//!   the in-memory set back so memory and storage never disagree
//!
//! Every mutation is visible to the next read immediately. Network operations
//! take `&mut self`, so one store serialises its own loads; there is no queuing
//! beyond that.
//!
//! # Example
//!
//! ```no_run
//! use forkify::app::Store;
//! use forkify::storage::MemoryBookmarkStore;
//! use forkify::{Config, ForkifyClient};
//!
//! # async fn run() -> forkify::Result<()> {
//! let config = Config::default();
//! let mut store = Store::new(ForkifyClient::new(&config)?, MemoryBookmarkStore::new(), 10)?;
//! store.load_search_results("pizza").await?;
//! let first_page = store.get_results_page(None);
//! # Ok(())
//! # }
//! ```

use crate::api::RecipeApi;
use crate::app::pagination;
use crate::app::upload::UploadForm;
use crate::domain::error::{ForkifyError, Result};
use crate::domain::{Recipe, RecipePreview};
use crate::storage::BookmarkStorage;
use crate::ui::viewmodel::{PaginationControls, PreviewList};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// The current search: query, full result list and the page being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<RecipePreview>,
    /// 1-based page last requested through [`Store::get_results_page`].
    pub page: usize,
    pub results_per_page: usize,
}

impl SearchState {
    #[must_use]
    pub const fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page,
        }
    }

    #[must_use]
    pub fn num_pages(&self) -> usize {
        pagination::num_pages(self.results.len(), self.results_per_page)
    }
}

/// Owns all application data and the collaborators that load and persist it.
pub struct Store<A, S> {
    api: A,
    storage: S,
    recipe: Option<Recipe>,
    search: SearchState,
    bookmarks: Vec<Recipe>,
}

impl<A: RecipeApi, S: BookmarkStorage> Store<A, S> {
    /// Creates a store and reads the bookmark set from `storage`.
    ///
    /// Duplicate ids in the stored set are dropped (first occurrence wins) and
    /// every loaded bookmark is flagged `bookmarked`.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::Config`] if `results_per_page` is 0, or the
    /// storage error if the bookmark set cannot be read.
    pub fn new(api: A, storage: S, results_per_page: usize) -> Result<Self> {
        if results_per_page == 0 {
            return Err(ForkifyError::Config("results_per_page must be greater than 0".to_string()));
        }

        let mut seen = HashSet::new();
        let bookmarks: Vec<Recipe> = storage
            .load()?
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .map(|mut r| {
                r.bookmarked = true;
                r
            })
            .collect();

        info!(bookmarks = bookmarks.len(), "state store initialized");

        Ok(Self {
            api,
            storage,
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks,
        })
    }

    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn bookmarks(&self) -> &[Recipe] {
        &self.bookmarks
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Fetches recipe `id` and makes it the current recipe.
    ///
    /// The `bookmarked` flag is set by membership in the bookmark set.
    ///
    /// # Errors
    ///
    /// Propagates [`ForkifyError::Fetch`] and [`ForkifyError::Timeout`] from the
    /// API. The current recipe is left unchanged on failure.
    #[instrument(skip(self))]
    pub async fn load_recipe(&mut self, id: &str) -> Result<&Recipe> {
        let mut recipe = self.api.fetch_recipe(id).await?;
        recipe.bookmarked = self.is_bookmarked(&recipe.id);
        debug!(title = %recipe.title, bookmarked = recipe.bookmarked, "recipe loaded");
        Ok(self.recipe.insert(recipe))
    }

    /// Runs a search for `query`, replacing the results and resetting the page to 1.
    ///
    /// A blank query returns immediately without a network call and leaves the
    /// search state untouched.
    ///
    /// # Errors
    ///
    /// Propagates [`ForkifyError::Fetch`] and [`ForkifyError::Timeout`] from the
    /// API. On failure the query is updated but the previous results are kept.
    #[instrument(skip(self))]
    pub async fn load_search_results(&mut self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            debug!("empty query, skipping search");
            return Ok(());
        }

        self.search.query = query.to_string();
        let results = self.api.search_recipes(query).await?;
        info!(results = results.len(), "search results loaded");

        self.search.results = results;
        self.search.page = 1;
        Ok(())
    }

    /// Returns the results on `page` (the current page when `None`).
    ///
    /// The window `[(page-1)*per_page, page*per_page)` is clamped to the result
    /// list, so a page past the end (or page 0) gives an empty list. This is a
    /// query with a write side effect: the requested page becomes the current
    /// page, floored at 1.
    pub fn get_results_page(&mut self, page: Option<usize>) -> Vec<RecipePreview> {
        let page = page.unwrap_or(self.search.page);
        self.search.page = page.max(1);

        let bounds = pagination::page_bounds(page, self.search.results_per_page, self.search.results.len());
        self.search.results[bounds].to_vec()
    }

    /// Pagination controls for the current page.
    #[must_use]
    pub fn pagination(&self) -> PaginationControls {
        pagination::controls(self.search.page, self.search.num_pages())
    }

    /// The current results page as a list view model, with `active_id` marked.
    ///
    /// Reads the current page without changing it.
    #[must_use]
    pub fn results_view_model(&self, active_id: Option<&str>) -> PreviewList {
        let bounds = pagination::page_bounds(
            self.search.page,
            self.search.results_per_page,
            self.search.results.len(),
        );
        PreviewList::new(self.search.results[bounds].to_vec(), active_id.map(str::to_string))
    }

    /// The bookmark set as a list view model, with `active_id` marked.
    #[must_use]
    pub fn bookmarks_view_model(&self, active_id: Option<&str>) -> PreviewList {
        PreviewList::from_recipes(&self.bookmarks, active_id.map(str::to_string))
    }

    /// Rescales the current recipe to `servings`.
    ///
    /// # Errors
    ///
    /// - [`ForkifyError::NotFound`] if no recipe is loaded
    /// - [`ForkifyError::InvalidServings`] if `servings` is 0 (recipe unchanged)
    pub fn update_servings(&mut self, servings: u32) -> Result<&Recipe> {
        let recipe = self
            .recipe
            .as_mut()
            .ok_or_else(|| ForkifyError::NotFound("no recipe loaded".to_string()))?;

        let before = recipe.servings;
        recipe.scale_servings(servings)?;
        debug!(recipe = %recipe.id, from = before, to = servings, "servings updated");
        Ok(recipe)
    }

    /// Adds `recipe` to the bookmark set and persists it.
    ///
    /// Adding an id that is already bookmarked is a no-op. If the recipe is the
    /// current one, its flag is set too.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the in-memory set and the
    /// current recipe's flag are rolled back in that case.
    pub fn add_bookmark(&mut self, mut recipe: Recipe) -> Result<()> {
        if self.is_bookmarked(&recipe.id) {
            debug!(recipe = %recipe.id, "already bookmarked");
            return Ok(());
        }

        let id = recipe.id.clone();
        recipe.bookmarked = true;
        self.bookmarks.push(recipe);

        if let Err(e) = self.storage.persist(&self.bookmarks) {
            warn!(recipe = %id, error = %e, "failed to persist bookmark, rolling back");
            self.bookmarks.pop();
            return Err(e);
        }

        self.set_current_flag(&id, true);
        info!(recipe = %id, total = self.bookmarks.len(), "bookmark added");
        Ok(())
    }

    /// Removes bookmark `id` and persists the set.
    ///
    /// Deleting an id that is not bookmarked is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the bookmark is restored
    /// in that case.
    pub fn delete_bookmark(&mut self, id: &str) -> Result<()> {
        let Some(index) = self.bookmarks.iter().position(|b| b.id == id) else {
            debug!(recipe = %id, "not bookmarked, nothing to delete");
            return Ok(());
        };

        let removed = self.bookmarks.remove(index);

        if let Err(e) = self.storage.persist(&self.bookmarks) {
            warn!(recipe = %id, error = %e, "failed to persist bookmark removal, rolling back");
            self.bookmarks.insert(index, removed);
            return Err(e);
        }

        self.set_current_flag(id, false);
        info!(recipe = %id, total = self.bookmarks.len(), "bookmark removed");
        Ok(())
    }

    /// Bookmarks the current recipe, or removes its bookmark if it has one.
    ///
    /// Returns the new bookmarked state.
    ///
    /// # Errors
    ///
    /// [`ForkifyError::NotFound`] if no recipe is loaded, or the storage error.
    pub fn toggle_bookmark(&mut self) -> Result<bool> {
        let recipe = self
            .recipe
            .as_ref()
            .ok_or_else(|| ForkifyError::NotFound("no recipe loaded".to_string()))?;

        if recipe.bookmarked {
            let id = recipe.id.clone();
            self.delete_bookmark(&id)?;
            Ok(false)
        } else {
            let recipe = recipe.clone();
            self.add_bookmark(recipe)?;
            Ok(true)
        }
    }

    /// Removes every bookmark from memory and from storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error; the in-memory set is left untouched then.
    pub fn clear_bookmarks(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.bookmarks.clear();
        if let Some(recipe) = self.recipe.as_mut() {
            recipe.bookmarked = false;
        }
        info!("bookmarks cleared");
        Ok(())
    }

    /// Validates `form`, uploads it, and makes the created recipe current and bookmarked.
    ///
    /// # Errors
    ///
    /// - [`ForkifyError::Format`] / [`ForkifyError::InvalidServings`] for a
    ///   malformed form, before any network call
    /// - [`ForkifyError::Fetch`] / [`ForkifyError::Timeout`] from the API
    /// - the storage error if the bookmark cannot be persisted (the uploaded
    ///   recipe stays current, unbookmarked)
    #[instrument(skip_all, fields(title = %form.title))]
    pub async fn upload_recipe(&mut self, form: &UploadForm) -> Result<&Recipe> {
        let upload = form.to_upload()?;
        let mut recipe = self.api.upload_recipe(&upload).await?;
        recipe.bookmarked = false;
        info!(recipe = %recipe.id, "recipe uploaded");

        let bookmark = recipe.clone();
        self.recipe = Some(recipe);
        self.add_bookmark(bookmark)?;

        self.recipe
            .as_ref()
            .ok_or_else(|| ForkifyError::NotFound("uploaded recipe missing".to_string()))
    }

    fn set_current_flag(&mut self, id: &str, bookmarked: bool) {
        if let Some(recipe) = self.recipe.as_mut().filter(|r| r.id == id) {
            recipe.bookmarked = bookmarked;
        }
    }
}

impl<A, S> std::fmt::Debug for Store<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("recipe", &self.recipe.as_ref().map(|r| &r.id))
            .field("query", &self.search.query)
            .field("results", &self.search.results.len())
            .field("page", &self.search.page)
            .field("bookmarks", &self.bookmarks.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecipeUpload;
    use crate::domain::Ingredient;
    use crate::storage::MemoryBookmarkStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves one fixed recipe and `n` numbered search results; counts calls.
    #[derive(Default)]
    struct StubApi {
        results: usize,
        calls: AtomicUsize,
    }

    impl RecipeApi for StubApi {
        async fn fetch_recipe(&self, id: &str) -> Result<Recipe> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut recipe = Recipe::new(id, "Bread", 4);
            recipe.ingredients.push(Ingredient::new(Some(2.0), "kg", "flour"));
            recipe.ingredients.push(Ingredient::new(None, "", "salt"));
            Ok(recipe)
        }

        async fn search_recipes(&self, _query: &str) -> Result<Vec<RecipePreview>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((0..self.results)
                .map(|i| Recipe::new(format!("r{i}"), format!("Recipe {i}"), 1).preview())
                .collect())
        }

        async fn upload_recipe(&self, upload: &RecipeUpload) -> Result<Recipe> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut recipe = Recipe::new("uploaded", upload.title.clone(), upload.servings);
            recipe.ingredients = upload.ingredients.clone();
            recipe.key = Some("user-key".to_string());
            Ok(recipe)
        }
    }

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl BookmarkStorage for BrokenStorage {
        fn load(&self) -> Result<Vec<Recipe>> {
            Ok(Vec::new())
        }

        fn persist(&mut self, _bookmarks: &[Recipe]) -> Result<()> {
            Err(ForkifyError::Storage("disk full".to_string()))
        }

        fn clear(&mut self) -> Result<()> {
            Err(ForkifyError::Storage("disk full".to_string()))
        }
    }

    fn store_with(results: usize) -> Store<StubApi, MemoryBookmarkStore> {
        let api = StubApi {
            results,
            ..StubApi::default()
        };
        Store::new(api, MemoryBookmarkStore::new(), 10).unwrap()
    }

    #[test]
    fn zero_results_per_page_is_rejected() {
        let err = Store::new(StubApi::default(), MemoryBookmarkStore::new(), 0).unwrap_err();
        assert!(matches!(err, ForkifyError::Config(_)));
    }

    #[test]
    fn stored_duplicates_are_dropped_on_load() {
        let stored = vec![Recipe::new("a", "A", 1), Recipe::new("b", "B", 1), Recipe::new("a", "A2", 1)];
        let store = Store::new(StubApi::default(), MemoryBookmarkStore::with_bookmarks(stored), 10).unwrap();

        let ids: Vec<_> = store.bookmarks().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(store.bookmarks().iter().all(|b| b.bookmarked));
    }

    #[tokio::test]
    async fn loaded_recipe_reflects_bookmark_membership() {
        let storage = MemoryBookmarkStore::with_bookmarks(vec![Recipe::new("fav", "Fav", 2)]);
        let mut store = Store::new(StubApi::default(), storage, 10).unwrap();

        assert!(store.load_recipe("fav").await.unwrap().bookmarked);
        assert!(!store.load_recipe("other").await.unwrap().bookmarked);
    }

    #[tokio::test]
    async fn blank_query_makes_no_network_call() {
        let mut store = store_with(5);
        store.load_search_results("   ").await.unwrap();

        assert_eq!(store.api().calls.load(Ordering::SeqCst), 0);
        assert!(store.search().query.is_empty());
    }

    #[tokio::test]
    async fn new_search_resets_page() {
        let mut store = store_with(25);
        store.load_search_results("pizza").await.unwrap();
        store.get_results_page(Some(3));

        store.load_search_results("pasta").await.unwrap();
        assert_eq!(store.search().page, 1);
        assert_eq!(store.search().query, "pasta");
    }

    #[tokio::test]
    async fn last_page_holds_the_remainder() {
        let mut store = store_with(25);
        store.load_search_results("pizza").await.unwrap();

        assert_eq!(store.search().num_pages(), 3);
        let page = store.get_results_page(Some(3));
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].id, "r20");
        assert_eq!(page[4].id, "r24");
        assert_eq!(store.search().page, 3);
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty() {
        let mut store = store_with(25);
        store.load_search_results("pizza").await.unwrap();

        assert!(store.get_results_page(Some(7)).is_empty());
        assert!(store.pagination().is_empty());

        assert!(store.get_results_page(Some(0)).is_empty());
        assert_eq!(store.search().page, 1);
    }

    #[tokio::test]
    async fn default_page_is_the_current_one() {
        let mut store = store_with(25);
        store.load_search_results("pizza").await.unwrap();
        store.get_results_page(Some(2));

        let page = store.get_results_page(None);
        assert_eq!(page[0].id, "r10");
        assert_eq!(store.pagination().previous, Some(1));
        assert_eq!(store.pagination().next, Some(3));
    }

    #[tokio::test]
    async fn servings_scale_ingredients() {
        let mut store = store_with(0);
        store.load_recipe("bread").await.unwrap();

        let recipe = store.update_servings(8).unwrap();
        assert_eq!(recipe.ingredients[0].quantity, Some(4.0));
        assert_eq!(recipe.ingredients[1].quantity, None);
    }

    #[tokio::test]
    async fn zero_servings_leaves_recipe_unchanged() {
        let mut store = store_with(0);
        store.load_recipe("bread").await.unwrap();

        assert!(matches!(store.update_servings(0), Err(ForkifyError::InvalidServings(0))));
        assert_eq!(store.recipe().unwrap().servings, 4);
    }

    #[test]
    fn servings_without_recipe_is_not_found() {
        let mut store = store_with(0);
        assert!(matches!(store.update_servings(2), Err(ForkifyError::NotFound(_))));
    }

    #[tokio::test]
    async fn bookmark_round_trip_restores_state() {
        let storage = MemoryBookmarkStore::with_bookmarks(vec![Recipe::new("old", "Old", 1)]);
        let handle = storage.clone();
        let mut store = Store::new(StubApi::default(), storage, 10).unwrap();
        let before: Vec<String> = store.bookmarks().iter().map(|b| b.id.clone()).collect();

        let recipe = store.load_recipe("bread").await.unwrap().clone();
        store.add_bookmark(recipe).unwrap();
        assert!(store.recipe().unwrap().bookmarked);
        assert_eq!(handle.snapshot().unwrap().len(), 2);

        store.delete_bookmark("bread").unwrap();
        let after: Vec<String> = store.bookmarks().iter().map(|b| b.id.clone()).collect();
        assert_eq!(before, after);
        assert!(!store.recipe().unwrap().bookmarked);
        assert_eq!(handle.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn duplicate_add_and_unknown_delete_are_no_ops() {
        let mut store = store_with(0);
        store.add_bookmark(Recipe::new("a", "A", 1)).unwrap();
        store.add_bookmark(Recipe::new("a", "A again", 1)).unwrap();
        store.delete_bookmark("missing").unwrap();

        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(store.bookmarks()[0].title, "A");
    }

    #[tokio::test]
    async fn failed_persist_rolls_back() {
        let mut store = Store::new(StubApi::default(), BrokenStorage, 10).unwrap();
        store.load_recipe("bread").await.unwrap();

        let err = store.toggle_bookmark().unwrap_err();
        assert!(matches!(err, ForkifyError::Storage(_)));
        assert!(store.bookmarks().is_empty());
        assert!(!store.recipe().unwrap().bookmarked);
    }

    #[tokio::test]
    async fn toggle_flips_membership() {
        let mut store = store_with(0);
        store.load_recipe("bread").await.unwrap();

        assert!(store.toggle_bookmark().unwrap());
        assert!(store.is_bookmarked("bread"));
        assert!(!store.toggle_bookmark().unwrap());
        assert!(!store.is_bookmarked("bread"));
    }

    #[tokio::test]
    async fn upload_bookmarks_the_new_recipe() {
        let mut store = store_with(0);
        let form = UploadForm {
            title: "Soup".into(),
            servings: 2,
            ingredients: vec!["1,l,water".into(), String::new()],
            ..UploadForm::default()
        };

        let recipe = store.upload_recipe(&form).await.unwrap();
        assert_eq!(recipe.id, "uploaded");
        assert!(recipe.bookmarked);
        assert!(recipe.is_user_generated());
        assert!(store.is_bookmarked("uploaded"));
    }

    #[tokio::test]
    async fn malformed_upload_never_reaches_the_api() {
        let mut store = store_with(0);
        let form = UploadForm {
            title: "Soup".into(),
            servings: 2,
            ingredients: vec!["2,kg".into()],
            ..UploadForm::default()
        };

        assert!(matches!(store.upload_recipe(&form).await, Err(ForkifyError::Format(_))));
        assert_eq!(store.api().calls.load(Ordering::SeqCst), 0);
        assert!(store.recipe().is_none());
    }

    #[tokio::test]
    async fn clear_removes_every_bookmark() {
        let storage = MemoryBookmarkStore::with_bookmarks(vec![Recipe::new("bread", "Bread", 4)]);
        let handle = storage.clone();
        let mut store = Store::new(StubApi::default(), storage, 10).unwrap();
        store.load_recipe("bread").await.unwrap();

        store.clear_bookmarks().unwrap();
        assert!(store.bookmarks().is_empty());
        assert!(!store.recipe().unwrap().bookmarked);
        assert!(handle.snapshot().unwrap().is_empty());
    }
}
