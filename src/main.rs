//! Command-line front end.
//!
//! Each subcommand fires the same UI hooks a browser shell would, through the
//! library [`Controller`], and prints the HTML of the views it touched.
//!
//! # Commands
//!
//! - `search <query> [--page N]`: search and show one results page
//! - `show <id> [--servings N]`: show a recipe, optionally rescaled
//! - `bookmarks`: list stored bookmarks
//! - `bookmark <id>` / `unbookmark <id>`: add or remove a bookmark
//! - `clear-bookmarks`: remove every stored bookmark
//! - `upload <file.toml>`: upload a recipe described by an add-recipe form
//!
//! `--config <path>` points at a TOML configuration file (see [`Config`]).

use clap::{Parser, Subcommand};
use forkify::api::RecipeApi;
use forkify::observability::init_tracing;
use forkify::storage::BookmarkStorage;
use forkify::{initialize, Action, Config, Controller, Event, Result, UploadForm};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "forkify", author, version, about = "Search, scale and bookmark recipes")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes.
    Search {
        query: String,
        /// Results page to show.
        #[arg(long)]
        page: Option<usize>,
    },
    /// Show one recipe.
    Show {
        id: String,
        /// Rescale the ingredients to this many servings.
        #[arg(long, allow_negative_numbers = true)]
        servings: Option<i64>,
    },
    /// List bookmarks.
    Bookmarks,
    /// Bookmark a recipe.
    Bookmark { id: String },
    /// Remove a bookmark.
    Unbookmark { id: String },
    /// Remove every bookmark.
    ClearBookmarks,
    /// Upload a recipe from a TOML add-recipe form.
    Upload { file: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("forkify: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_file) = init_tracing(&config) {
        tracing::debug!(log_file = %log_file.display(), command = ?cli.command, "forkify starting");
    }

    let mut controller = match initialize(&config) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("forkify: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&mut controller, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("forkify: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run<A: RecipeApi, S: BookmarkStorage>(controller: &mut Controller<A, S>, command: Command) -> Result<()> {
    match command {
        Command::Search { query, page } => {
            let outcome = search(controller, query, page).await;
            println!("{}", controller.results_view().to_html());
            println!("{}", controller.pagination_view().to_html());
            outcome
        }
        Command::Show { id, servings } => {
            let outcome = show(controller, id, servings).await;
            println!("{}", controller.recipe_view().to_html());
            outcome
        }
        Command::Bookmarks => {
            controller.handle(Event::BookmarksLoad).await?;
            println!("{}", controller.bookmarks_view().to_html());
            Ok(())
        }
        Command::Bookmark { id } => set_bookmark(controller, id, true).await,
        Command::Unbookmark { id } => set_bookmark(controller, id, false).await,
        Command::ClearBookmarks => {
            controller.store_mut().clear_bookmarks()?;
            controller.handle(Event::BookmarksLoad).await?;
            println!("{}", controller.bookmarks_view().to_html());
            Ok(())
        }
        Command::Upload { file } => {
            let form = read_form(&file)?;
            let outcome = controller.handle(Event::UploadSubmit(form)).await;
            println!("{}", controller.upload_view().to_html());
            for action in outcome? {
                match action {
                    Action::SetLocation { recipe_id } => println!("#{recipe_id}"),
                    Action::CloseUploadWindow { .. } => {}
                }
            }
            println!("{}", controller.recipe_view().to_html());
            Ok(())
        }
    }
}

async fn search<A: RecipeApi, S: BookmarkStorage>(
    controller: &mut Controller<A, S>,
    query: String,
    page: Option<usize>,
) -> Result<()> {
    controller.handle(Event::SearchSubmit { query }).await?;
    if let Some(goto) = page {
        controller.handle(Event::PaginationClick { goto }).await?;
    }
    Ok(())
}

async fn show<A: RecipeApi, S: BookmarkStorage>(
    controller: &mut Controller<A, S>,
    recipe_id: String,
    servings: Option<i64>,
) -> Result<()> {
    controller.handle(Event::Load { recipe_id }).await?;
    if let Some(servings) = servings {
        controller.handle(Event::ServingsChange { servings }).await?;
    }
    Ok(())
}

async fn set_bookmark<A: RecipeApi, S: BookmarkStorage>(
    controller: &mut Controller<A, S>,
    recipe_id: String,
    bookmarked: bool,
) -> Result<()> {
    controller.handle(Event::Load { recipe_id }).await?;
    let current = controller.store().recipe().is_some_and(|r| r.bookmarked);
    if current != bookmarked {
        controller.handle(Event::BookmarkToggle).await?;
    }
    controller.handle(Event::BookmarksLoad).await?;
    println!("{}", controller.bookmarks_view().to_html());
    Ok(())
}

fn read_form(path: &Path) -> Result<UploadForm> {
    let source = std::fs::read_to_string(path)?;
    toml::from_str(&source)
        .map_err(|e| forkify::ForkifyError::Format(format!("{}: {e}", path.display())))
}
