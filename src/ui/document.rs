//! The live rendered tree of a view and the patches that mutate it.
//!
//! A [`Document`] plays the part of a view's parent element: an ordered list of
//! root nodes. The incremental renderer mutates it in place and reports every
//! mutation as a [`Patch`]. Patches address nodes by index path at the moment
//! they were applied, so replaying them in order with [`Document::apply`]
//! against a copy of the old tree reproduces the new one.

use crate::domain::error::{ForkifyError, Result};
use crate::ui::node::{Element, Node};

/// Index path from the document root, one child index per level.
pub type NodePath = Vec<usize>;

/// One mutation applied to a live tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Overwrites the text of the text node at `path`.
    SetText { path: NodePath, text: String },
    /// Sets (adds or overwrites) one attribute of the element at `path`.
    SetAttribute {
        path: NodePath,
        name: String,
        value: String,
    },
    /// Replaces the node at `path` wholesale.
    Replace { path: NodePath, node: Node },
    /// Inserts `node` as child `index` of `parent`.
    Insert {
        parent: NodePath,
        index: usize,
        node: Node,
    },
    /// Removes child `index` of `parent`.
    Remove { parent: NodePath, index: usize },
    /// Moves child `from` of `parent` to position `to`.
    Move {
        parent: NodePath,
        from: usize,
        to: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[must_use]
    pub const fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut Vec<Node> {
        &mut self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discards the current content and installs `nodes`.
    pub fn replace(&mut self, nodes: Vec<Node>) {
        self.nodes = nodes;
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }

    /// Total number of nodes in the document.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::node_count).sum()
    }

    /// Returns the node at `path`, if any.
    #[must_use]
    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get(*first)?;
        for &index in rest {
            node = node.as_element()?.children.get(index)?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.nodes.get_mut(*first)?;
        for &index in rest {
            match node {
                Node::Element(e) => node = e.children.get_mut(index)?,
                Node::Text(_) => return None,
            }
        }
        Some(node)
    }

    fn children_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Node>> {
        if parent.is_empty() {
            return Some(&mut self.nodes);
        }
        match self.node_at_mut(parent)? {
            Node::Element(e) => Some(&mut e.children),
            Node::Text(_) => None,
        }
    }

    /// Elements anywhere in the document whose class list contains `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for node in &self.nodes {
            node.find_by_class(class, &mut found);
        }
        found
    }

    /// Applies one patch.
    ///
    /// # Errors
    ///
    /// Returns [`ForkifyError::NotFound`] if the patch addresses a node or child
    /// index that does not exist, or expects an element where a text node is.
    pub fn apply(&mut self, patch: &Patch) -> Result<()> {
        let missing = || ForkifyError::NotFound(format!("patch target {patch:?}"));

        match patch {
            Patch::SetText { path, text } => match self.node_at_mut(path).ok_or_else(missing)? {
                Node::Text(current) => current.clone_from(text),
                Node::Element(_) => return Err(missing()),
            },
            Patch::SetAttribute { path, name, value } => match self.node_at_mut(path).ok_or_else(missing)? {
                Node::Element(e) => {
                    e.set_attribute(name, value.clone());
                }
                Node::Text(_) => return Err(missing()),
            },
            Patch::Replace { path, node } => {
                *self.node_at_mut(path).ok_or_else(missing)? = node.clone();
            }
            Patch::Insert { parent, index, node } => {
                let children = self.children_mut(parent).ok_or_else(missing)?;
                if *index > children.len() {
                    return Err(missing());
                }
                children.insert(*index, node.clone());
            }
            Patch::Remove { parent, index } => {
                let children = self.children_mut(parent).ok_or_else(missing)?;
                if *index >= children.len() {
                    return Err(missing());
                }
                children.remove(*index);
            }
            Patch::Move { parent, from, to } => {
                let children = self.children_mut(parent).ok_or_else(missing)?;
                if *from >= children.len() || *to >= children.len() {
                    return Err(missing());
                }
                let node = children.remove(*from);
                children.insert(*to, node);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::node::el;

    fn sample() -> Document {
        Document::from_nodes(vec![
            el("ul").child(el("li").text("a")).child(el("li").text("b")).into(),
            el("p").class("note").text("n").into(),
        ])
    }

    #[test]
    fn node_at_walks_child_indices() {
        let doc = sample();
        assert_eq!(doc.node_at(&[0, 1, 0]), Some(&Node::Text("b".to_string())));
        assert_eq!(doc.node_at(&[0, 5]), None);
        assert_eq!(doc.node_at(&[]), None);
    }

    #[test]
    fn apply_move_and_remove() {
        let mut doc = sample();
        doc.apply(&Patch::Move { parent: vec![0], from: 1, to: 0 }).unwrap();
        assert_eq!(doc.text_content(), "ban");

        doc.apply(&Patch::Remove { parent: vec![], index: 1 }).unwrap();
        assert_eq!(doc.to_html(), "<ul><li>b</li><li>a</li></ul>");
    }

    #[test]
    fn apply_rejects_out_of_range_targets() {
        let mut doc = sample();
        let err = doc.apply(&Patch::Remove { parent: vec![0], index: 9 });
        assert!(matches!(err, Err(ForkifyError::NotFound(_))));

        let err = doc.apply(&Patch::SetText { path: vec![1], text: "x".into() });
        assert!(matches!(err, Err(ForkifyError::NotFound(_))));
    }

    #[test]
    fn find_by_class_searches_whole_tree() {
        let doc = sample();
        assert_eq!(doc.find_by_class("note").len(), 1);
        assert!(doc.find_by_class("missing").is_empty());
    }
}
