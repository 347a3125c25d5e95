//! Magic Layout - normalizes design-tool scene graphs into layout-ready trees
//!
//! This library decodes a Figma node tree, simplifies it (hidden nodes,
//! rotation, shape-only containers, trivial groups) and re-parents siblings
//! that sit on top of a background into a frame built from that background.
//!
//! # Example
//!
//! ```rust
//! use magic_layout::{normalize_raw_json, Config};
//!
//! let tree = normalize_raw_json(
//!     r#"{ "type": "FRAME", "id": "1:1", "width": 100, "height": 100, "children": [
//!         { "type": "RECTANGLE", "id": "1:2", "width": 100, "height": 100 },
//!         { "type": "TEXT", "id": "1:3", "x": 10, "y": 10, "width": 20, "height": 20 }
//!     ] }"#,
//!     &Config::default(),
//! )
//! .unwrap();
//!
//! let bg = tree.find("1:2").unwrap();
//! assert_eq!(bg.children()[0].id_str(), Some("1:3"));
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod scene;

pub use config::{Config, ConfigError, OutputConfig};
pub use error::InputError;
pub use normalize::{normalize, NormalizeConfig, NormalizeError, NormalizedNode, NormalizedTree};
pub use scene::{Payload, SourceFormat, SourceNode};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during the normalize pipeline
#[derive(Debug, Error)]
pub enum MagicLayoutError {
    /// Error while decoding the input document
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Error during normalization
    #[error("normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Error while encoding the output
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result of handling a tagged payload
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadOutcome {
    Normalized(NormalizedTree),
    /// The payload kind names no known source format
    Unsupported { kind: String },
}

/// Dispatch a payload on its kind and normalize the data it carries.
///
/// An unknown kind is reported as [`PayloadOutcome::Unsupported`], not as an
/// error.
pub fn process_payload(
    payload: &Payload,
    config: &Config,
) -> Result<PayloadOutcome, MagicLayoutError> {
    let Some(format) = payload.format() else {
        warn!(kind = %payload.kind, "unsupported payload kind");
        return Ok(PayloadOutcome::Unsupported {
            kind: payload.kind.clone(),
        });
    };

    debug!(?format, "processing payload");
    let tree = match format {
        SourceFormat::Figma => normalize(&payload.source_nodes()?, &config.normalize)?,
    };
    Ok(PayloadOutcome::Normalized(tree))
}

/// Decode a `{ kind, data }` payload from JSON and process it
///
/// # Example
///
/// ```rust
/// use magic_layout::{normalize_json, Config, PayloadOutcome};
///
/// let outcome = normalize_json(r#"{ "kind": "sketch", "data": [] }"#, &Config::default()).unwrap();
/// assert_eq!(outcome, PayloadOutcome::Unsupported { kind: "sketch".into() });
/// ```
pub fn normalize_json(source: &str, config: &Config) -> Result<PayloadOutcome, MagicLayoutError> {
    let payload = scene::parse_payload(source)?;
    process_payload(&payload, config)
}

/// Decode a bare node tree (one root or an array of roots) and normalize it
pub fn normalize_raw_json(
    source: &str,
    config: &Config,
) -> Result<NormalizedTree, MagicLayoutError> {
    let roots = scene::parse(source)?;
    Ok(normalize(&roots, &config.normalize)?)
}

/// Encode a normalized tree as JSON, honouring the output settings
pub fn to_json(tree: &NormalizedTree, config: &Config) -> Result<String, MagicLayoutError> {
    let json = if config.output.pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_figma_payload() {
        let payload = Payload::new(
            "figma",
            json!({ "type": "TEXT", "id": "1:1", "characters": "Hi" }),
        );
        let outcome = process_payload(&payload, &Config::default()).unwrap();
        let PayloadOutcome::Normalized(tree) = outcome else {
            panic!("expected a normalized tree, got {outcome:?}");
        };
        assert_eq!(tree.roots.len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_not_an_error() {
        let payload = Payload::new("xd", json!([]));
        assert_eq!(
            process_payload(&payload, &Config::default()).unwrap(),
            PayloadOutcome::Unsupported { kind: "xd".into() }
        );
    }

    #[test]
    fn test_bad_data_is_input_error() {
        let payload = Payload::new("figma", json!({ "type": "TEXT", "children": "none" }));
        let err = process_payload(&payload, &Config::default()).unwrap_err();
        assert!(matches!(err, MagicLayoutError::Input(InputError::Schema { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let err = normalize_raw_json("{ \"type\": ", &Config::default()).unwrap_err();
        assert!(matches!(err, MagicLayoutError::Input(InputError::Json { .. })));
    }

    #[test]
    fn test_to_json_compact_and_pretty() {
        let tree = normalize_raw_json(r#"{ "type": "TEXT", "id": "t" }"#, &Config::default()).unwrap();
        let compact = to_json(&tree, &Config::default().with_pretty(false)).unwrap();
        let pretty = to_json(&tree, &Config::default()).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }
}
