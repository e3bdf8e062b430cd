//! WebIDL parsing.
//!
//! The entry points are [`parse`] and [`parse_with_file`]. Both run the
//! scanner and recursive descent parser over the full input and either
//! return the definitions in declaration order or the first error
//! encountered.
//!
//! ```
//! let defs = widl_parser::parse("interface Foo {};").unwrap();
//! assert_eq!(defs[0].name(), "Foo");
//! ```

pub mod parser;

pub use parser::Parser;

use widl_ast::ast::Definition;
use widl_diagnostics::ParseError;

/// Parse WebIDL source text into a list of definitions.
///
/// Stops at the first lexical or syntax error.
pub fn parse(text: &str) -> Result<Vec<Definition>, ParseError> {
    Parser::new(text).parse()
}

/// Like [`parse`], but errors carry the given file name for reporting.
pub fn parse_with_file(text: &str, file: &str) -> Result<Vec<Definition>, ParseError> {
    Parser::new(text).parse().map_err(|e| e.with_file(file))
}
