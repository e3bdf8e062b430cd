//! widl_scanner: lexer/tokenizer for WebIDL source text.
//!
//! The scanner produces classified tokens with exact byte offsets and
//! line/column positions. Whitespace and comments are skipped as trivia.
//! Use [`Scanner`] directly for parser-style pull scanning, or [`tokenize`]
//! for a lazy token stream.

mod scanner;
mod token;

pub use scanner::{Scanner, ScannerState};
pub use token::TokenInfo;

use widl_ast::SyntaxKind;
use widl_diagnostics::ParseError;

/// Lazily tokenize source text.
///
/// The stream is finite and deterministic: it yields every token in order,
/// then a single end-of-file token, then `None`. A lex error ends the stream
/// after being yielded. Re-invoking on the same text restarts from the
/// beginning.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        scanner: Scanner::new(text),
        done: false,
    }
}

/// Iterator over the tokens of a source text. See [`tokenize`].
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<TokenInfo, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.scan() {
            Ok(kind) => {
                if kind == SyntaxKind::EndOfFileToken {
                    self.done = true;
                }
                Some(Ok(self.scanner.token_info()))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> std::iter::FusedIterator for Tokens<'a> {}
