//! Event handling: named UI hooks to store operations to view updates.
//!
//! The [`Controller`] owns the [`Store`] and one [`ViewPort`] per view. Each
//! [`Event`] corresponds to one UI hook; [`Controller::handle`] runs the matching
//! store operation and refreshes the affected views:
//!
//! | event               | store operation            | views                                       |
//! |---------------------|----------------------------|---------------------------------------------|
//! | `Load`              | `load_recipe`              | spinner, results/bookmarks update, recipe   |
//! | `SearchSubmit`      | `load_search_results`      | spinner, results (page 1), pagination       |
//! | `PaginationClick`   | `get_results_page`         | results, pagination                         |
//! | `ServingsChange`    | `update_servings`          | recipe (incremental)                        |
//! | `BookmarkToggle`    | `add/delete_bookmark`      | recipe (incremental), bookmarks             |
//! | `BookmarksLoad`     | none                       | bookmarks                                   |
//! | `UploadSubmit`      | `upload_recipe`            | upload spinner/message, recipe, bookmarks   |
//!
//! On failure the error is rendered into the view that was loading, logged, and
//! returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use forkify::app::{Controller, Event, Store};
//! use forkify::storage::MemoryBookmarkStore;
//! use forkify::{Config, ForkifyClient};
//!
//! # async fn run() -> forkify::Result<()> {
//! let config = Config::default();
//! let store = Store::new(ForkifyClient::new(&config)?, MemoryBookmarkStore::new(), 10)?;
//! let mut controller = Controller::new(store, config.modal_close());
//!
//! controller.handle(Event::SearchSubmit { query: "pizza".into() }).await?;
//! println!("{}", controller.results_view().to_html());
//! # Ok(())
//! # }
//! ```

use crate::api::RecipeApi;
use crate::app::actions::Action;
use crate::app::state::Store;
use crate::app::upload::UploadForm;
use crate::domain::error::{ForkifyError, Result};
use crate::storage::BookmarkStorage;
use crate::ui::{
    AddRecipeView, BookmarksView, PaginationView, PortState, PreviewList, RecipeView, ResultsView, ViewPort,
};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// One UI hook firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The location changed to `recipe_id` (or the page was opened on it).
    Load { recipe_id: String },
    /// The search form was submitted.
    SearchSubmit { query: String },
    /// A pagination button leading to page `goto` was clicked.
    PaginationClick { goto: usize },
    /// A servings button carrying `data-update-to = servings` was clicked.
    ServingsChange { servings: i64 },
    /// The bookmark button of the current recipe was clicked.
    BookmarkToggle,
    /// The add-recipe form was submitted.
    UploadSubmit(UploadForm),
    /// The page loaded; show the stored bookmarks.
    BookmarksLoad,
}

/// Drives the store from UI events and keeps the views in sync.
#[derive(Debug)]
pub struct Controller<A, S> {
    store: Store<A, S>,
    /// Id in the location hash; marks the active preview in list views.
    active_id: Option<String>,
    recipe_view: ViewPort<RecipeView>,
    results_view: ViewPort<ResultsView>,
    bookmarks_view: ViewPort<BookmarksView>,
    pagination_view: ViewPort<PaginationView>,
    upload_view: ViewPort<AddRecipeView>,
    modal_close: Duration,
}

impl<A: RecipeApi, S: BookmarkStorage> Controller<A, S> {
    /// Wraps `store`; the recipe view starts on its welcome message and the
    /// add-recipe view on an empty form.
    #[must_use]
    pub fn new(store: Store<A, S>, modal_close: Duration) -> Self {
        let mut recipe_view = ViewPort::new(RecipeView);
        recipe_view.render_message(None);

        let mut upload_view = ViewPort::new(AddRecipeView);
        upload_view.render(&UploadForm::default());

        Self {
            store,
            active_id: None,
            recipe_view,
            results_view: ViewPort::new(ResultsView),
            bookmarks_view: ViewPort::new(BookmarksView),
            pagination_view: ViewPort::new(PaginationView),
            upload_view,
            modal_close,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &Store<A, S> {
        &self.store
    }

    /// Direct store access for operations without a UI hook (e.g. clearing bookmarks).
    pub fn store_mut(&mut self) -> &mut Store<A, S> {
        &mut self.store
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    #[must_use]
    pub const fn recipe_view(&self) -> &ViewPort<RecipeView> {
        &self.recipe_view
    }

    #[must_use]
    pub const fn results_view(&self) -> &ViewPort<ResultsView> {
        &self.results_view
    }

    #[must_use]
    pub const fn bookmarks_view(&self) -> &ViewPort<BookmarksView> {
        &self.bookmarks_view
    }

    #[must_use]
    pub const fn pagination_view(&self) -> &ViewPort<PaginationView> {
        &self.pagination_view
    }

    #[must_use]
    pub const fn upload_view(&self) -> &ViewPort<AddRecipeView> {
        &self.upload_view
    }

    /// Processes one event and returns the actions for the host.
    ///
    /// # Errors
    ///
    /// Returns the error of the failed store operation after rendering it into
    /// the affected view. [`ForkifyError::InvalidServings`] for a servings value
    /// of 0 or less leaves every view untouched.
    pub async fn handle(&mut self, event: Event) -> Result<Vec<Action>> {
        debug!(?event, "handling event");

        match event {
            Event::Load { recipe_id } => self.load_recipe(recipe_id).await,
            Event::SearchSubmit { query } => self.search(&query).await,
            Event::PaginationClick { goto } => {
                self.show_page(Some(goto));
                Ok(vec![])
            }
            Event::ServingsChange { servings } => self.update_servings(servings),
            Event::BookmarkToggle => self.toggle_bookmark(),
            Event::BookmarksLoad => {
                self.render_bookmarks();
                Ok(vec![])
            }
            Event::UploadSubmit(form) => self.upload(&form).await,
        }
    }

    async fn load_recipe(&mut self, recipe_id: String) -> Result<Vec<Action>> {
        if recipe_id.is_empty() {
            return Ok(vec![]);
        }
        self.active_id = Some(recipe_id.clone());

        self.recipe_view.render_spinner();
        // Only lists on screen are re-marked; an error or empty port keeps its content.
        if self.results_view.state() == PortState::Content {
            self.results_view
                .update(&self.store.results_view_model(self.active_id.as_deref()));
        }
        if self.bookmarks_view.state() == PortState::Content {
            self.bookmarks_view
                .update(&self.store.bookmarks_view_model(self.active_id.as_deref()));
        }

        match self.store.load_recipe(&recipe_id).await {
            Ok(recipe) => {
                self.recipe_view.render(recipe);
                Ok(vec![])
            }
            Err(e) => {
                error!(recipe = %recipe_id, error = %e, "failed to load recipe");
                self.recipe_view.render_error(None);
                Err(e)
            }
        }
    }

    async fn search(&mut self, query: &str) -> Result<Vec<Action>> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        self.results_view.render_spinner();

        if let Err(e) = self.store.load_search_results(query).await {
            error!(query, error = %e, "search failed");
            self.results_view.render_error(Some(&e.to_string()));
            return Err(e);
        }

        self.show_page(None);
        Ok(vec![])
    }

    fn show_page(&mut self, page: Option<usize>) {
        let items = self.store.get_results_page(page);
        self.results_view
            .render(&PreviewList::new(items, self.active_id.clone()));
        self.pagination_view.render(&self.store.pagination());
    }

    fn update_servings(&mut self, servings: i64) -> Result<Vec<Action>> {
        let Some(servings) = u32::try_from(servings).ok().filter(|s| *s > 0) else {
            debug!(servings, "ignoring servings change below 1");
            return Err(ForkifyError::InvalidServings(servings));
        };

        match self.store.update_servings(servings) {
            Ok(recipe) => {
                let patches = self.recipe_view.update(recipe);
                debug!(patches = patches.len(), "recipe view updated");
                Ok(vec![])
            }
            Err(e) => {
                warn!(error = %e, "servings update rejected");
                Err(e)
            }
        }
    }

    fn toggle_bookmark(&mut self) -> Result<Vec<Action>> {
        let bookmarked = match self.store.toggle_bookmark() {
            Ok(bookmarked) => bookmarked,
            Err(e) => {
                warn!(error = %e, "bookmark toggle failed");
                return Err(e);
            }
        };
        info!(bookmarked, "bookmark toggled");

        if let Some(recipe) = self.store.recipe() {
            self.recipe_view.update(recipe);
        }
        self.render_bookmarks();
        Ok(vec![])
    }

    fn render_bookmarks(&mut self) {
        self.bookmarks_view
            .render(&self.store.bookmarks_view_model(self.active_id.as_deref()));
    }

    async fn upload(&mut self, form: &UploadForm) -> Result<Vec<Action>> {
        self.upload_view.render_spinner();

        let recipe = match self.store.upload_recipe(form).await {
            Ok(recipe) => recipe,
            Err(e) => {
                error!(error = %e, "recipe upload failed");
                self.upload_view.render_error(Some(&e.to_string()));
                return Err(e);
            }
        };

        self.recipe_view.render(recipe);
        let recipe_id = recipe.id.clone();

        self.upload_view.render_message(None);
        self.active_id = Some(recipe_id.clone());
        self.render_bookmarks();

        Ok(vec![
            Action::SetLocation { recipe_id },
            Action::CloseUploadWindow {
                after: self.modal_close,
            },
        ])
    }
}
