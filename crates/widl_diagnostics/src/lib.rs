//! widl_diagnostics: structured parse errors for the WebIDL parser.
//!
//! The parser aborts on the first error and returns a single [`ParseError`]
//! value. Errors are never raised as panics; the position of the offending
//! token always survives into the value a caller sees.

use serde::Serialize;
use std::fmt;
use widl_core::text::{LineCol, LineMap, TextRange};

/// Which stage of the pipeline rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Unterminated literal, unterminated comment, or an illegal character.
    Lex,
    /// A token that does not fit the grammar at the current position.
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "lex error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// A parse failure, positioned at the exact offending token.
#[derive(Debug, Clone, thiserror::Error, Serialize)]
#[error("{kind} at {location}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    /// Byte span of the offending token (empty at end of input).
    pub span: TextRange,
    /// 1-based line/column of the span start.
    pub location: LineCol,
    /// What the parser would have accepted here, if it knows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Optional file or identifier label for the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ParseError {
    pub fn lex(message: impl Into<String>, span: TextRange, location: LineCol) -> Self {
        Self {
            kind: ErrorKind::Lex,
            message: message.into(),
            span,
            location,
            expected: None,
            file: None,
        }
    }

    pub fn syntax(message: impl Into<String>, span: TextRange, location: LineCol) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            span,
            location,
            expected: None,
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn is_lex_error(&self) -> bool {
        self.kind == ErrorKind::Lex
    }
}

/// Render an error as a multi-line diagnostic with the offending source line
/// and a caret under the span, the way the CLI prints it:
///
/// ```text
/// dom.idl:3:15: syntax error: identifier expected, but found ';'
///   attribute long;
///                 ^
/// ```
pub fn render(error: &ParseError, source: &str) -> String {
    let map = LineMap::new(source);
    let mut out = String::new();
    if let Some(ref file) = error.file {
        out.push_str(file);
        out.push(':');
    }
    out.push_str(&format!("{}: {}: {}\n", error.location, error.kind, error.message));

    let line = map.line_text(source, error.span.pos.min(source.len() as u32));
    out.push_str("  ");
    out.push_str(line);
    out.push('\n');
    out.push_str("  ");
    for _ in 1..error.location.column {
        out.push(' ');
    }
    let width = (error.span.len() as usize).max(1).min(line.len().max(1));
    for _ in 0..width {
        out.push('^');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::syntax(
            "identifier expected, but found ';'",
            TextRange::new(14, 15),
            LineCol::new(1, 15),
        );
        assert_eq!(
            err.to_string(),
            "syntax error at 1:15: identifier expected, but found ';'"
        );
    }

    #[test]
    fn test_render_caret_position() {
        let source = "interface A {\n  attribute long;\n};";
        let err = ParseError::syntax(
            "identifier expected, but found ';'",
            TextRange::new(30, 31),
            LineCol::new(2, 17),
        )
        .with_file("dom.idl");
        let rendered = render(&err, source);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "dom.idl:2:17: syntax error: identifier expected, but found ';'");
        assert_eq!(lines[1], "    attribute long;");
        assert_eq!(lines[2].trim_end(), format!("  {}^", " ".repeat(16)));
    }
}
