//! Recipe detail view.
//!
//! Renders the recipe header, cooking time, servings with decrease/increase
//! buttons, bookmark button, ingredient list and the link to the publisher's
//! directions. Changing servings or toggling the bookmark only changes text and
//! attributes, so the view is updated incrementally and the image is left alone.

use crate::domain::{Ingredient, Recipe};
use crate::ui::components::icon;
use crate::ui::helpers::format_quantity;
use crate::ui::node::{el, Element, Node};
use crate::ui::view::View;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeView;

impl RecipeView {
    fn header(recipe: &Recipe) -> Element {
        el("figure")
            .class("recipe__fig")
            .child(
                el("img")
                    .class("recipe__img")
                    .attr("src", &recipe.image_url)
                    .attr("alt", &recipe.title),
            )
            .child(el("h1").class("recipe__title").child(el("span").text(&recipe.title)))
    }

    fn servings_buttons(servings: u32) -> Element {
        el("div")
            .class("recipe__info-buttons")
            .child(
                el("button")
                    .class("btn--tiny btn--update-servings")
                    .attr("data-update-to", servings.saturating_sub(1).to_string())
                    .child(icon(None, "minus-circle")),
            )
            .child(
                el("button")
                    .class("btn--tiny btn--update-servings")
                    .attr("data-update-to", servings.saturating_add(1).to_string())
                    .child(icon(None, "plus-circle")),
            )
    }

    fn details(recipe: &Recipe) -> Element {
        let user_class = if recipe.is_user_generated() {
            "recipe__user-generated"
        } else {
            "recipe__user-generated hidden"
        };
        let bookmark_icon = if recipe.bookmarked { "bookmark-fill" } else { "bookmark" };

        el("div")
            .class("recipe__details")
            .child(
                el("div")
                    .class("recipe__info")
                    .child(icon(Some("recipe__info-icon"), "clock"))
                    .child(
                        el("span")
                            .class("recipe__info-data recipe__info-data--minutes")
                            .text(recipe.cooking_time.to_string()),
                    )
                    .child(el("span").class("recipe__info-text").text("minutes")),
            )
            .child(
                el("div")
                    .class("recipe__info")
                    .child(icon(Some("recipe__info-icon"), "users"))
                    .child(
                        el("span")
                            .class("recipe__info-data recipe__info-data--people")
                            .text(recipe.servings.to_string()),
                    )
                    .child(el("span").class("recipe__info-text").text("servings"))
                    .child(Self::servings_buttons(recipe.servings)),
            )
            .child(el("div").class(user_class).child(icon(None, "user")))
            .child(
                el("button")
                    .class("btn--round btn--bookmark")
                    .child(icon(None, bookmark_icon)),
            )
    }

    fn ingredient(ingredient: &Ingredient) -> Element {
        el("li")
            .class("recipe__ingredient")
            .child(icon(Some("recipe__icon"), "check"))
            .child(
                el("div")
                    .class("recipe__quantity")
                    .text(format_quantity(ingredient.quantity)),
            )
            .child(
                el("div")
                    .class("recipe__description")
                    .child(el("span").class("recipe__unit").text(&ingredient.unit))
                    .text(&ingredient.description),
            )
    }

    fn ingredients(recipe: &Recipe) -> Element {
        el("div")
            .class("recipe__ingredients")
            .child(el("h2").class("heading--2").text("Recipe ingredients"))
            .child(
                el("ul")
                    .class("recipe__ingredient-list")
                    .children(recipe.ingredients.iter().map(Self::ingredient)),
            )
    }

    fn directions(recipe: &Recipe) -> Element {
        el("div")
            .class("recipe__directions")
            .child(el("h2").class("heading--2").text("How to cook it"))
            .child(
                el("p")
                    .class("recipe__directions-text")
                    .text("This recipe was carefully designed and tested by ")
                    .child(el("span").class("recipe__publisher").text(&recipe.publisher))
                    .text(". Please check out directions at their website."),
            )
            .child(
                el("a")
                    .class("btn--small recipe__btn")
                    .attr("href", &recipe.source_url)
                    .attr("target", "_blank")
                    .child(el("span").text("Directions"))
                    .child(icon(Some("search__icon"), "arrow-right")),
            )
    }
}

impl View for RecipeView {
    type Data = Recipe;

    fn render(&self, recipe: &Recipe) -> Vec<Node> {
        vec![
            Self::header(recipe).into(),
            Self::details(recipe).into(),
            Self::ingredients(recipe).into(),
            Self::directions(recipe).into(),
        ]
    }

    fn error_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }

    fn message(&self) -> &str {
        "Start by searching for a recipe or an ingredient. Have fun!"
    }
}
