//! Previous/next page buttons.
//!
//! Which buttons appear is decided by [`crate::app::pagination::controls`]; this
//! view only turns the resulting [`PaginationControls`] into markup. Each button
//! carries its target page in `data-goto`.

use crate::ui::components::icon;
use crate::ui::node::{el, Node};
use crate::ui::view::View;
use crate::ui::viewmodel::PaginationControls;

#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationView;

impl PaginationView {
    fn previous_button(page: usize) -> Node {
        el("button")
            .key("prev")
            .class("btn--inline pagination__btn--prev")
            .attr("data-goto", page.to_string())
            .child(icon(Some("search__icon"), "arrow-left"))
            .child(el("span").text(format!("Page {page}")))
            .into()
    }

    fn next_button(page: usize) -> Node {
        el("button")
            .key("next")
            .class("btn--inline pagination__btn--next")
            .attr("data-goto", page.to_string())
            .child(el("span").text(format!("Page {page}")))
            .child(icon(Some("search__icon"), "arrow-right"))
            .into()
    }
}

impl View for PaginationView {
    type Data = PaginationControls;

    fn render(&self, data: &PaginationControls) -> Vec<Node> {
        data.previous
            .map(Self::previous_button)
            .into_iter()
            .chain(data.next.map(Self::next_button))
            .collect()
    }
}
