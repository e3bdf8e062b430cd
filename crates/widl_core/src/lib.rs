//! widl_core: shared primitives for the WebIDL parser.
//!
//! Source position tracking lives here so that every other crate (scanner,
//! parser, diagnostics, CLI) agrees on what a span is.

pub mod text;
