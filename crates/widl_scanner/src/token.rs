//! Token information produced by the scanner.

use widl_ast::SyntaxKind;
use widl_core::text::{LineCol, TextRange};

/// A classified token. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// Start byte offset in the source text.
    pub pos: u32,
    /// End byte offset (exclusive).
    pub end: u32,
    /// The raw source text of the token: always equal to the input
    /// substring at `[pos, end)`.
    pub text: String,
    /// The cooked value: string contents without quotes, identifiers with a
    /// leading-underscore escape stripped. Equals `text` for other kinds.
    pub value: String,
    /// 1-based line/column of the token start.
    pub location: LineCol,
}

impl TokenInfo {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }

    pub fn len(&self) -> u32 {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }
}
