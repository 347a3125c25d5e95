//! The normalized tree and lookups over it

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

use super::error::NormalizeError;
use super::types::{NodeId, NormalizedNode, ParentRef};

/// Result of normalization: the top-level nodes in paint order.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct NormalizedTree {
    pub roots: Vec<NormalizedNode>,
}

impl NormalizedTree {
    pub fn new(roots: Vec<NormalizedNode>) -> Self {
        Self { roots }
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first, pre-order walk over every node
    pub fn iter(&self) -> DepthFirst<'_> {
        DepthFirst {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Get a node by id
    pub fn find(&self, id: &str) -> Option<&NormalizedNode> {
        self.iter().find(|node| node.id_str() == Some(id))
    }

    /// Resolve a node's parent reference
    pub fn parent_of(&self, node: &NormalizedNode) -> Option<&NormalizedNode> {
        let parent = node.parent.as_ref()?;
        let id = parent.id.as_ref()?;
        self.find(id.as_str())
            .filter(|candidate| candidate.kind() == parent.kind)
    }

    /// Check the structural invariants: unique ids, parent references that
    /// name the holding container, no invisible nodes.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        let mut stack: Vec<(&NormalizedNode, Option<ParentRef>)> =
            self.roots.iter().rev().map(|node| (node, None)).collect();

        while let Some((node, holder)) = stack.pop() {
            if let Some(id) = &node.id {
                if !seen.insert(id) {
                    return Err(NormalizeError::DuplicateId { id: id.clone() });
                }
            }
            if node.visible == Some(false) {
                return Err(NormalizeError::InvisibleNode {
                    node: describe(node),
                });
            }
            if node.parent != holder {
                return Err(NormalizeError::parent_mismatch(
                    describe(node),
                    describe_ref(node.parent.as_ref()),
                    describe_ref(holder.as_ref()),
                ));
            }

            let as_parent = node.as_parent();
            for child in node.children().iter().rev() {
                stack.push((child, Some(as_parent.clone())));
            }
        }
        Ok(())
    }

    /// Indented one-line-per-node dump: kind, id, name and box
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            write_outline(&mut out, root, 0);
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl<'a> IntoIterator for &'a NormalizedTree {
    type Item = &'a NormalizedNode;
    type IntoIter = DepthFirst<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`NormalizedTree::iter`]
#[derive(Debug)]
pub struct DepthFirst<'a> {
    stack: Vec<&'a NormalizedNode>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a NormalizedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

fn describe(node: &NormalizedNode) -> String {
    format!("{} {}", node.kind(), node.id_str().unwrap_or("<anon>"))
}

fn describe_ref(parent: Option<&ParentRef>) -> String {
    match parent {
        Some(p) => format!(
            "{} {}",
            p.kind,
            p.id.as_ref().map(NodeId::as_str).unwrap_or("<anon>")
        ),
        None => "root".to_string(),
    }
}

fn write_outline(out: &mut String, node: &NormalizedNode, depth: usize) {
    let b = node.bounds;
    let _ = writeln!(
        out,
        "{}{} {} {:?} ({}, {}, {}, {})",
        "  ".repeat(depth),
        node.kind(),
        node.id_str().unwrap_or("<anon>"),
        node.name,
        b.x,
        b.y,
        b.width,
        b.height
    );
    for child in node.children() {
        write_outline(out, child, depth + 1);
    }
}
