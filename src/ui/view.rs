//! The view capability interface and the port that owns a view's live tree.
//!
//! Every view variant implements [`View`]: a pure function from its data to a
//! node tree. A [`ViewPort`] pairs a view with the [`Document`] it is shown in
//! and offers the two ways of showing new data:
//!
//! - [`ViewPort::render`]: discard the current content and install the new tree
//! - [`ViewPort::update`]: reconcile the current content against the new tree,
//!   touching only what changed
//!
//! plus the shared spinner, error and message states.

use crate::ui::components::feedback;
use crate::ui::document::{Document, Patch};
use crate::ui::node::Node;
use crate::ui::renderer::reconcile;

/// A view variant: renders its data into markup.
pub trait View {
    type Data: ?Sized;

    /// Produces the markup for `data`.
    fn render(&self, data: &Self::Data) -> Vec<Node>;

    /// Whether `data` has nothing to show. Empty data renders the error message.
    fn is_empty(&self, _data: &Self::Data) -> bool {
        false
    }

    /// Default text of the error state.
    fn error_message(&self) -> &str {
        "Something went wrong. Please try again!"
    }

    /// Default text of the message state.
    fn message(&self) -> &str {
        ""
    }
}

/// Which kind of content a port currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Empty,
    Spinner,
    Content,
    Error,
    Message,
}

/// Owns one view and its live document.
#[derive(Debug, Clone)]
pub struct ViewPort<V> {
    view: V,
    document: Document,
    state: PortState,
}

impl<V: View> ViewPort<V> {
    #[must_use]
    pub const fn new(view: V) -> Self {
        Self {
            view,
            document: Document::new(),
            state: PortState::Empty,
        }
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub const fn state(&self) -> PortState {
        self.state
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }

    /// Replaces the content with the markup for `data`.
    ///
    /// Empty data (per [`View::is_empty`]) shows the view's error message instead.
    pub fn render(&mut self, data: &V::Data) {
        if self.view.is_empty(data) {
            self.render_error(None);
            return;
        }
        self.document.replace(self.view.render(data));
        self.state = PortState::Content;
    }

    /// Reconciles the current content against the markup for `data`.
    ///
    /// Returns the applied patches.
    pub fn update(&mut self, data: &V::Data) -> Vec<Patch> {
        let next = self.view.render(data);
        let patches = reconcile(&mut self.document, &next);
        self.state = PortState::Content;
        patches
    }

    pub fn render_spinner(&mut self) {
        self.document.replace(vec![feedback::spinner()]);
        self.state = PortState::Spinner;
    }

    /// Shows an error; `None` uses the view's default error text.
    pub fn render_error(&mut self, message: Option<&str>) {
        let message = message.unwrap_or_else(|| self.view.error_message()).to_string();
        self.document.replace(vec![feedback::error(&message)]);
        self.state = PortState::Error;
    }

    /// Shows a message; `None` uses the view's default message text.
    pub fn render_message(&mut self, message: Option<&str>) {
        let message = message.unwrap_or_else(|| self.view.message()).to_string();
        self.document.replace(vec![feedback::message(&message)]);
        self.state = PortState::Message;
    }

    pub fn clear(&mut self) {
        self.document.clear();
        self.state = PortState::Empty;
    }
}
