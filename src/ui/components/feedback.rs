//! Spinner, error and message fragments shared by every view.

use crate::ui::components::icon;
use crate::ui::node::{el, Node};

#[must_use]
pub fn spinner() -> Node {
    el("div").class("spinner").child(icon(None, "loader")).into()
}

#[must_use]
pub fn error(message: &str) -> Node {
    el("div")
        .class("error")
        .child(el("div").child(icon(None, "alert-triangle")))
        .child(el("p").text(message))
        .into()
}

#[must_use]
pub fn message(message: &str) -> Node {
    el("div")
        .class("message")
        .child(el("div").child(icon(None, "smile")))
        .child(el("p").text(message))
        .into()
}
