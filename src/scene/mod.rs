//! Source document model and JSON decoding

mod payload;
mod source;

pub use payload::{Payload, SourceFormat};
pub use source::*;

use crate::error::InputError;

/// Decode a bare node tree: one root node or an array of top-level nodes.
pub fn parse(source: &str) -> Result<Vec<SourceNode>, InputError> {
    if source.trim_start().starts_with('[') {
        serde_json::from_str(source).map_err(|e| InputError::from_json(e, source))
    } else {
        serde_json::from_str::<SourceNode>(source)
            .map(|node| vec![node])
            .map_err(|e| InputError::from_json(e, source))
    }
}

/// Decode a `{ kind, data }` request envelope.
pub fn parse_payload(source: &str) -> Result<Payload, InputError> {
    serde_json::from_str(source).map_err(|e| InputError::from_json(e, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_root() {
        let nodes = parse(r#"{ "type": "FRAME", "id": "0:1", "children": [] }"#).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, SourceKind::Frame);
    }

    #[test]
    fn test_parse_array_root() {
        let nodes = parse(
            r#"
            [
                { "type": "RECTANGLE", "id": "a" },
                { "type": "ELLIPSE", "id": "b" }
            ]"#,
        )
        .unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].kind, SourceKind::Ellipse);
    }

    #[test]
    fn test_parse_error_has_location() {
        let err = parse("{\n  \"type\": \"FRAME\",\n  \"x\": oops\n}").unwrap_err();
        match err {
            InputError::Json { line, .. } => assert_eq!(line, 3),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }
}
