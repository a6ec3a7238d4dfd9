//! Add-recipe form.
//!
//! Renders the upload form pre-filled from an [`UploadForm`]. Field names match
//! the ones [`UploadForm::from_fields`] reads back.

use crate::app::upload::UploadForm;
use crate::ui::components::icon;
use crate::ui::node::{el, Element, Node};
use crate::ui::view::View;

/// Number of ingredient inputs shown when the form has fewer lines.
const MIN_INGREDIENT_FIELDS: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddRecipeView;

impl AddRecipeView {
    fn field(label: &str, name: &str, value: &str, input_type: &str) -> [Node; 2] {
        [
            el("label").text(label).into(),
            el("input")
                .attr("value", value)
                .attr("required", "")
                .attr("name", name)
                .attr("type", input_type)
                .into(),
        ]
    }

    fn ingredient_field(index: usize, value: &str) -> [Node; 2] {
        [
            el("label").text(format!("Ingredient {index}")).into(),
            el("input")
                .attr("value", value)
                .attr("type", "text")
                .attr("name", format!("ingredient-{index}"))
                .attr("placeholder", "Format: 'Quantity,Unit,Description'")
                .into(),
        ]
    }

    fn recipe_data(form: &UploadForm) -> Element {
        let numbers = |n: u32| if n == 0 { String::new() } else { n.to_string() };

        el("div")
            .class("upload__column")
            .child(el("h3").class("upload__heading").text("Recipe data"))
            .children(Self::field("Title", "title", &form.title, "text"))
            .children(Self::field("URL", "sourceUrl", &form.source_url, "text"))
            .children(Self::field("Image URL", "image", &form.image_url, "text"))
            .children(Self::field("Publisher", "publisher", &form.publisher, "text"))
            .children(Self::field("Prep time", "cookingTime", &numbers(form.cooking_time), "number"))
            .children(Self::field("Servings", "servings", &numbers(form.servings), "number"))
    }

    fn ingredient_data(form: &UploadForm) -> Element {
        let count = form.ingredients.len().max(MIN_INGREDIENT_FIELDS);
        let fields = (0..count).flat_map(|i| {
            let value = form.ingredients.get(i).map_or("", String::as_str);
            Self::ingredient_field(i + 1, value)
        });

        el("div")
            .class("upload__column")
            .child(el("h3").class("upload__heading").text("Ingredients"))
            .children(fields)
    }
}

impl View for AddRecipeView {
    type Data = UploadForm;

    fn render(&self, form: &UploadForm) -> Vec<Node> {
        vec![
            Self::recipe_data(form).into(),
            Self::ingredient_data(form).into(),
            el("button")
                .class("btn upload__btn")
                .child(icon(None, "upload-cloud"))
                .child(el("span").text("Upload"))
                .into(),
        ]
    }

    fn message(&self) -> &str {
        "Recipe was successfully uploaded."
    }
}
