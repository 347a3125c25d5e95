//! Request envelope: `{ "kind": "figma", "data": <node or node array> }`

use serde::Deserialize;
use serde_json::Value;

use crate::error::InputError;

use super::SourceNode;

/// Source formats the normalizer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Figma,
}

impl SourceFormat {
    /// Resolve a payload kind tag. Matching is exact, as sent by the plugin.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "figma" => Some(SourceFormat::Figma),
            _ => None,
        }
    }
}

/// A tagged request payload. The tag is accepted as either `kind` or `type`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Payload {
    #[serde(alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

impl Payload {
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    pub fn format(&self) -> Option<SourceFormat> {
        SourceFormat::from_kind(&self.kind)
    }

    /// Decode `data` as one root node or an array of top-level nodes
    pub fn source_nodes(&self) -> Result<Vec<SourceNode>, InputError> {
        let decoded = if self.data.is_array() {
            Vec::<SourceNode>::deserialize(&self.data)
        } else {
            SourceNode::deserialize(&self.data).map(|node| vec![node])
        };
        decoded.map_err(|e| InputError::schema("payload data", e))
    }
}
