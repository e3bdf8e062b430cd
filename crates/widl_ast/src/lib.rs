//! widl_ast: token kinds and syntax tree nodes for WebIDL.

pub mod ast;
pub mod syntax_kind;

pub use ast::*;
pub use syntax_kind::SyntaxKind;
