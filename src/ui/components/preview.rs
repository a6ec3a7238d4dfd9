//! One recipe preview, as shown in the results and bookmarks lists.

use crate::domain::RecipePreview;
use crate::ui::components::icon;
use crate::ui::node::{el, Node};
use crate::ui::view::View;

/// Renders a single preview.
///
/// The link carries `preview__link--active` when the preview is the recipe open
/// in the detail view. The rendered `<li>` is keyed by recipe id.
#[derive(Debug, Clone, Default)]
pub struct PreviewView {
    pub active_id: Option<String>,
}

impl PreviewView {
    #[must_use]
    pub fn active(active_id: Option<&str>) -> Self {
        Self {
            active_id: active_id.map(str::to_string),
        }
    }

    #[must_use]
    pub fn render_item(&self, preview: &RecipePreview) -> Node {
        let active = self.active_id.as_deref() == Some(preview.id.as_str());
        let link_class = if active {
            "preview__link preview__link--active"
        } else {
            "preview__link"
        };
        let user_class = if preview.is_user_generated() {
            "preview__user-generated"
        } else {
            "preview__user-generated hidden"
        };

        el("li")
            .key(&preview.id)
            .class("preview")
            .child(
                el("a")
                    .class(link_class)
                    .attr("href", format!("#{}", preview.id))
                    .child(
                        el("figure")
                            .class("preview__fig")
                            .child(el("img").attr("src", &preview.image_url).attr("alt", &preview.title)),
                    )
                    .child(
                        el("div")
                            .class("preview__data")
                            .child(el("h4").class("preview__title").text(&preview.title))
                            .child(el("p").class("preview__publisher").text(&preview.publisher))
                            .child(el("div").class(user_class).child(icon(None, "user"))),
                    ),
            )
            .into()
    }
}

impl View for PreviewView {
    type Data = RecipePreview;

    fn render(&self, data: &RecipePreview) -> Vec<Node> {
        vec![self.render_item(data)]
    }
}
