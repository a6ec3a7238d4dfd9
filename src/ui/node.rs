//! Owned node tree used as view markup and as the live rendered tree.
//!
//! Views build [`Node`] trees directly instead of concatenating markup strings;
//! [`Node::to_html`] serialises a tree when text output is needed. Elements may
//! carry a reconciliation `key` (a recipe id for list items) which takes part in
//! diffing but is not an attribute and is never serialised.

use crate::ui::helpers::escape_html;
use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr", "use", "meta", "link"];

/// A node of a rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element node with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub key: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Shorthand for [`Element::new`].
#[must_use]
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

/// Shorthand for a text node.
#[must_use]
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

impl Element {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            key: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an existing value of the same name.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value.into());
        self
    }

    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Sets the reconciliation key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::Text(value.into()))
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`. Returns `true` if the element changed.
    pub fn set_attribute(&mut self, name: &str, value: String) -> bool {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) if *existing == value => false,
            Some((_, existing)) => {
                *existing = value;
                true
            }
            None => {
                self.attributes.push((name.to_string(), value));
                true
            }
        }
    }

    /// Returns `true` if the `class` attribute contains `class` as a whole word.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.as_element().and_then(|e| e.key.as_deref())
    }

    /// Structural equality in the DOM sense.
    ///
    /// Two nodes are equal when they have the same tag, the same attribute set
    /// (order-insensitive) and pairwise equal children, or are text nodes with
    /// identical text. Reconciliation keys are ignored.
    #[must_use]
    pub fn is_equal_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Element(a), Self::Element(b)) => {
                a.tag == b.tag
                    && a.attributes.len() == b.attributes.len()
                    && a.attributes.iter().all(|(name, value)| b.attribute(name) == Some(value.as_str()))
                    && a.children.len() == b.children.len()
                    && a.children.iter().zip(&b.children).all(|(x, y)| x.is_equal_node(y))
            }
            _ => false,
        }
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Element(e) => 1 + e.children.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    /// Serialises the subtree as HTML with escaped text and attribute values.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub(crate) fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(&escape_html(t)),
            Self::Element(e) => {
                let _ = write!(out, "<{}", e.tag);
                for (name, value) in &e.attributes {
                    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                }
                if VOID_ELEMENTS.contains(&e.tag.as_str()) && e.children.is_empty() {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in &e.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", e.tag);
            }
        }
    }

    /// Depth-first search for elements carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Self::Element(e) = self {
            if e.has_class(class) {
                found.push(e);
            }
            for child in &e.children {
                child.find_by_class(class, found);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_order_does_not_affect_equality() {
        let a: Node = el("a").attr("href", "#1").class("x").into();
        let b: Node = el("a").class("x").attr("href", "#1").into();
        assert!(a.is_equal_node(&b));
    }

    #[test]
    fn keys_do_not_affect_equality() {
        let a: Node = el("li").key("1").text("A").into();
        let b: Node = el("li").key("2").text("A").into();
        assert!(a.is_equal_node(&b));
    }

    #[test]
    fn html_is_escaped_and_keys_are_not_serialised() {
        let node: Node = el("p")
            .key("k")
            .attr("title", "a \"quoted\" <b>")
            .text("Fish & Chips")
            .child(el("img").attr("src", "x.jpg"))
            .into();

        assert_eq!(
            node.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;b&gt;\">Fish &amp; Chips<img src=\"x.jpg\" /></p>"
        );
    }

    #[test]
    fn set_attribute_reports_changes() {
        let mut e = el("div").class("a");
        assert!(!e.set_attribute("class", "a".to_string()));
        assert!(e.set_attribute("class", "b".to_string()));
        assert!(e.set_attribute("id", "x".to_string()));
        assert_eq!(e.attribute("class"), Some("b"));
    }

    #[test]
    fn text_content_and_count_cover_descendants() {
        let node: Node = el("div").text("a").child(el("span").text("b")).into();
        assert_eq!(node.text_content(), "ab");
        assert_eq!(node.node_count(), 4);
    }
}
