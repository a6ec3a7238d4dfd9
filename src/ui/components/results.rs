//! Search results page.

use crate::ui::components::preview::PreviewView;
use crate::ui::node::Node;
use crate::ui::view::View;
use crate::ui::viewmodel::PreviewList;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultsView;

impl View for ResultsView {
    type Data = PreviewList;

    fn render(&self, data: &PreviewList) -> Vec<Node> {
        let preview = PreviewView::active(data.active_id.as_deref());
        data.items.iter().map(|item| preview.render_item(item)).collect()
    }

    fn is_empty(&self, data: &PreviewList) -> bool {
        data.items.is_empty()
    }

    fn error_message(&self) -> &str {
        "No recipes found for your query! Please try again."
    }
}
