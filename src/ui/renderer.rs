//! Incremental renderer: keyed reconciliation of a live tree against new markup.
//!
//! Instead of discarding a view's tree and installing the freshly rendered one,
//! [`reconcile`] walks both trees in tandem and applies the smallest set of
//! mutations that makes the live tree show the new data. Nodes whose old and new
//! versions are structurally equal are never touched, so unrelated content (an
//! image that is already loaded, say) survives an update.
//!
//! # Pairing
//!
//! Children of two paired elements are matched as follows:
//!
//! - a keyed child pairs with the old child carrying the same key, wherever it is
//!   (the live node is moved into place when the order changed)
//! - an unkeyed child pairs with the next unclaimed unkeyed old child, in order
//! - a new child with no partner is inserted; an old child with no partner is
//!   removed
//!
//! # Per-pair rules
//!
//! - structurally equal: untouched, apart from taking over the new keys
//! - text vs text: overwrite the text, unless both sides are blank
//! - same tag: copy every attribute of the new element onto the live one
//!   (additive, attributes missing from the new element are kept), then
//!   reconcile the children
//! - anything else: replace the live node wholesale
//!
//! # Example
//!
//! ```rust
//! use forkify::ui::{el, reconcile, Document, Node, Patch};
//!
//! let mut live = Document::from_nodes(vec![el("p").text("4 servings").into()]);
//! let next: Vec<Node> = vec![el("p").text("8 servings").into()];
//!
//! let patches = reconcile(&mut live, &next);
//! assert_eq!(patches, vec![Patch::SetText { path: vec![0, 0], text: "8 servings".into() }]);
//! assert_eq!(live.to_html(), "<p>8 servings</p>");
//! ```

use crate::ui::document::{Document, NodePath, Patch};
use crate::ui::node::Node;
use std::collections::{HashMap, VecDeque};

/// Reconciles `document` against the freshly rendered `next` nodes.
///
/// Mutates `document` in place and returns the applied patches in order.
pub fn reconcile(document: &mut Document, next: &[Node]) -> Vec<Patch> {
    let _span = tracing::debug_span!("reconcile", roots = next.len()).entered();

    let mut patches = Vec::new();
    let mut path = NodePath::new();
    reconcile_children(document.nodes_mut(), next, &mut path, &mut patches);

    tracing::debug!(patches = patches.len(), "view reconciled");
    patches
}

fn reconcile_node(live: &mut Node, next: &Node, path: &mut NodePath, patches: &mut Vec<Patch>) {
    if live.is_equal_node(next) {
        adopt_keys(live, next);
        return;
    }

    match (live, next) {
        (Node::Text(current), Node::Text(new)) => {
            if current.trim().is_empty() && new.trim().is_empty() {
                return;
            }
            current.clone_from(new);
            patches.push(Patch::SetText {
                path: path.clone(),
                text: new.clone(),
            });
        }
        (Node::Element(current), Node::Element(new)) if current.tag == new.tag => {
            for (name, value) in &new.attributes {
                if current.set_attribute(name, value.clone()) {
                    patches.push(Patch::SetAttribute {
                        path: path.clone(),
                        name: name.clone(),
                        value: value.clone(),
                    });
                }
            }
            current.key.clone_from(&new.key);
            reconcile_children(&mut current.children, &new.children, path, patches);
        }
        (live, next) => {
            *live = next.clone();
            patches.push(Patch::Replace {
                path: path.clone(),
                node: next.clone(),
            });
        }
    }
}

fn reconcile_children(live: &mut Vec<Node>, next: &[Node], path: &mut NodePath, patches: &mut Vec<Patch>) {
    let sources = claim_partners(live, next);

    let mut claimed = vec![false; live.len()];
    for old in sources.iter().flatten() {
        claimed[*old] = true;
    }

    // Drop unpaired old children back to front so earlier indices stay valid.
    for index in (0..live.len()).rev() {
        if !claimed[index] {
            live.remove(index);
            patches.push(Patch::Remove {
                parent: path.clone(),
                index,
            });
        }
    }

    // Original index of each live child, kept in step with `live`.
    let mut origin: Vec<Option<usize>> = (0..claimed.len())
        .filter(|&i| claimed[i])
        .map(Some)
        .collect();

    for (index, (node, source)) in next.iter().zip(&sources).enumerate() {
        let position = source.and_then(|old| {
            origin[index..]
                .iter()
                .position(|o| *o == Some(old))
                .map(|p| p + index)
        });

        let Some(position) = position else {
            live.insert(index, node.clone());
            origin.insert(index, None);
            patches.push(Patch::Insert {
                parent: path.clone(),
                index,
                node: node.clone(),
            });
            continue;
        };

        if position != index {
            let moved = live.remove(position);
            live.insert(index, moved);
            let moved_origin = origin.remove(position);
            origin.insert(index, moved_origin);
            patches.push(Patch::Move {
                parent: path.clone(),
                from: position,
                to: index,
            });
        }

        path.push(index);
        reconcile_node(&mut live[index], node, path, patches);
        path.pop();
    }

    debug_assert_eq!(live.len(), next.len());
}

/// Copies reconciliation keys from `next` onto the structurally equal `live`.
///
/// Keys never reach the markup, so this emits no patch.
fn adopt_keys(live: &mut Node, next: &Node) {
    if let (Node::Element(current), Node::Element(new)) = (live, next) {
        current.key.clone_from(&new.key);
        for (child, new_child) in current.children.iter_mut().zip(&new.children) {
            adopt_keys(child, new_child);
        }
    }
}

/// For every new child, the index of its old partner, if it has one.
fn claim_partners(live: &[Node], next: &[Node]) -> Vec<Option<usize>> {
    let mut keyed: HashMap<&str, usize> = HashMap::new();
    let mut unkeyed: VecDeque<usize> = VecDeque::new();

    for (index, node) in live.iter().enumerate() {
        match node.key() {
            Some(key) => {
                keyed.entry(key).or_insert(index);
            }
            None => unkeyed.push_back(index),
        }
    }

    next.iter()
        .map(|node| match node.key() {
            Some(key) => {
                let partner = keyed.remove(key);
                if partner.is_none() && live.iter().any(|n| n.key() == Some(key)) {
                    tracing::warn!(key, "duplicate reconciliation key, inserting fresh node");
                }
                partner
            }
            None => unkeyed.pop_front(),
        })
        .collect()
}
