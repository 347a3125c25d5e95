//! Error types for decoding input documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum InputError {
    /// Malformed JSON, or JSON that does not fit the node schema, with the
    /// position reported by the decoder
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Json {
        span: Span,
        line: usize,
        column: usize,
        message: String,
    },

    /// Schema mismatch in an already-decoded value (no source position)
    #[error("invalid {what}: {message}")]
    Schema { what: &'static str, message: String },
}

impl InputError {
    /// Convert a decoder error, locating it in `source`
    pub fn from_json(err: serde_json::Error, source: &str) -> Self {
        let (line, column) = (err.line(), err.column());
        let start = byte_offset(source, line, column);
        let end = (start + 1).min(source.len());
        InputError::Json {
            span: start..end.max(start),
            line,
            column,
            message: strip_position(&err.to_string()),
        }
    }

    pub fn schema(what: &'static str, err: serde_json::Error) -> Self {
        InputError::Schema {
            what,
            message: err.to_string(),
        }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            InputError::Json { span, .. } => Some(span),
            InputError::Schema { .. } => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let InputError::Json { span, message, .. } = self else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid input document")
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Byte offset of a 1-based line/column position, clamped to the source
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len().saturating_sub(1))
}

/// serde_json appends " at line L column C"; the report shows that visually
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset() {
        let source = "ab\ncde\nf";
        assert_eq!(byte_offset(source, 1, 1), 0);
        assert_eq!(byte_offset(source, 2, 2), 4);
        assert_eq!(byte_offset(source, 3, 1), 7);
        assert_eq!(byte_offset(source, 9, 9), 7);
    }

    #[test]
    fn test_json_error_location() {
        let source = "{\n  \"type\" 12\n}";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let err = InputError::from_json(err, source);
        match &err {
            InputError::Json { line, message, .. } => {
                assert_eq!(*line, 2);
                assert!(!message.contains(" at line "));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.span().is_some());
    }

    #[test]
    fn test_format_includes_filename() {
        let source = "{ \"type\": }";
        let err = serde_json::from_str::<serde_json::Value>(source).unwrap_err();
        let report = InputError::from_json(err, source).format(source, "input.json");
        assert!(report.contains("input.json"));
        assert!(report.contains("invalid input document"));
    }

    #[test]
    fn test_schema_error_format_is_plain() {
        let err = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = InputError::schema("payload data", err);
        assert!(err.span().is_none());
        assert_eq!(err.format("", "x.json"), err.to_string());
    }
}
