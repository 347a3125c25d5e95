//! Error types for the normalizer

use thiserror::Error;

use super::types::{NodeId, NodeKind};

/// Errors that can occur during normalization or tree validation
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    /// A node reached containment regrouping without an id. Real documents
    /// always carry ids; this points at a broken producer or fixture.
    #[error("{kind} node '{name}' is missing an id")]
    MissingId { name: String, kind: NodeKind },

    /// Two nodes of the tree share one id
    #[error("duplicate node id '{id}'")]
    DuplicateId { id: NodeId },

    /// A node's parent reference does not name the container holding it
    #[error("node '{node}' refers to parent {declared} but is held by {actual}")]
    ParentMismatch {
        node: String,
        declared: String,
        actual: String,
    },

    /// An invisible node survived into the tree
    #[error("invisible node '{node}' present in the normalized tree")]
    InvisibleNode { node: String },
}

impl NormalizeError {
    /// Create a missing id error
    pub fn missing_id(name: impl Into<String>, kind: NodeKind) -> Self {
        Self::MissingId {
            name: name.into(),
            kind,
        }
    }

    /// Create a parent mismatch error
    pub fn parent_mismatch(
        node: impl Into<String>,
        declared: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ParentMismatch {
            node: node.into(),
            declared: declared.into(),
            actual: actual.into(),
        }
    }
}
