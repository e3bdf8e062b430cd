//! The WebIDL scanner/lexer.
//!
//! Converts source text into a stream of tokens for the parser. WebIDL is an
//! ASCII grammar outside of string literals and comments, so the scanner
//! walks raw bytes and every position it reports is an exact byte offset
//! into the input.
//!
//! Whitespace and comments are trivia: skipped, but they still advance the
//! position so that token offsets and line/column stay accurate.

use memchr::memchr;
use widl_ast::SyntaxKind;
use widl_core::text::{LineCol, TextRange};
use widl_diagnostics::ParseError;

use crate::token::TokenInfo;

/// Saved scanner state for one-token lookahead.
pub struct ScannerState {
    pos: usize,
    token_start: usize,
    token: SyntaxKind,
    token_value: String,
    line: u32,
    line_start: usize,
}

/// The scanner converts WebIDL source text into tokens.
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    bytes: &'a [u8],
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// The cooked value of the current token.
    token_value: String,
    /// 0-based line index of the current position.
    line: u32,
    /// Byte offset where the current line starts.
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            line: 0,
            line_start: 0,
        }
    }

    // ========================================================================
    // Token accessors
    // ========================================================================

    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// The cooked value of the current token.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// The raw source text of the current token.
    #[inline]
    pub fn token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    pub fn token_range(&self) -> TextRange {
        TextRange::new(self.token_start as u32, self.pos as u32)
    }

    /// 1-based line/column of the current token start.
    pub fn token_location(&self) -> LineCol {
        // The scanner only moves forward within a token, so token_start is
        // always on the current line.
        LineCol::new(self.line + 1, (self.token_start - self.line_start) as u32 + 1)
    }

    /// Build a TokenInfo snapshot of the current token.
    pub fn token_info(&self) -> TokenInfo {
        TokenInfo {
            kind: self.token,
            pos: self.token_start as u32,
            end: self.pos as u32,
            text: self.token_text().to_string(),
            value: self.token_value.clone(),
            location: self.token_location(),
        }
    }

    /// Save the scanner state for lookahead.
    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token: self.token,
            token_value: self.token_value.clone(),
            line: self.line,
            line_start: self.line_start,
        }
    }

    /// Restore a previously saved state.
    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_value = state.token_value;
        self.line = state.line;
        self.line_start = state.line_start;
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    #[inline]
    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    fn location_of(&self, pos: usize) -> LineCol {
        // pos never precedes the current line start when errors are raised.
        LineCol::new(self.line + 1, (pos - self.line_start) as u32 + 1)
    }

    fn lex_error(&self, message: String, start: usize) -> ParseError {
        self.lex_error_at(message, start, self.location_of(start))
    }

    fn lex_error_at(&self, message: String, start: usize, location: LineCol) -> ParseError {
        ParseError::lex(
            message,
            TextRange::new(start as u32, self.pos.max(start + 1) as u32),
            location,
        )
    }

    /// Skip whitespace and comments. Fails on an unterminated block comment.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.byte_at(0) {
                Some(b' ') | Some(b'\t') | Some(b'\r') => {
                    self.pos += 1;
                }
                Some(b'\n') => {
                    self.pos += 1;
                    self.newline();
                }
                Some(b'/') if self.byte_at(1) == Some(b'/') => {
                    // Line comment: jump straight to the next newline.
                    match memchr(b'\n', &self.bytes[self.pos..]) {
                        Some(offset) => self.pos += offset,
                        None => self.pos = self.bytes.len(),
                    }
                }
                Some(b'/') if self.byte_at(1) == Some(b'*') => {
                    let start = self.pos;
                    // Block comments may span lines; remember where the
                    // comment opened before the line counters move past it.
                    let opened_at = self.location_of(start);
                    self.pos += 2;
                    loop {
                        match self.byte_at(0) {
                            None => {
                                return Err(self.lex_error_at(
                                    "unterminated block comment".into(),
                                    start,
                                    opened_at,
                                ));
                            }
                            Some(b'*') if self.byte_at(1) == Some(b'/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(b'\n') => {
                                self.pos += 1;
                                self.newline();
                            }
                            Some(_) => self.pos += 1,
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> Result<SyntaxKind, ParseError> {
        self.token_value.clear();
        self.skip_trivia()?;
        self.token_start = self.pos;

        let Some(ch) = self.byte_at(0) else {
            self.token = SyntaxKind::EndOfFileToken;
            return Ok(self.token);
        };

        self.token = match ch {
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b'<' => self.single(SyntaxKind::LessThanToken),
            b'>' => self.single(SyntaxKind::GreaterThanToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b'=' => self.single(SyntaxKind::EqualsToken),
            b'?' => self.single(SyntaxKind::QuestionToken),
            b'*' => self.single(SyntaxKind::AsteriskToken),

            b'.' => self.scan_dot()?,
            b'-' => self.scan_minus()?,
            b'"' => self.scan_string()?,
            b'0'..=b'9' => self.scan_number()?,

            b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.scan_identifier(),

            _ => {
                let ch = self.text[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                let start = self.pos;
                self.pos += ch.len_utf8();
                return Err(self.lex_error(format!("invalid character '{}'", ch), start));
            }
        };

        // Cooked value defaults to the raw text; strings (whose value may be
        // legitimately empty) and identifiers set theirs above.
        if self.token_value.is_empty()
            && self.token != SyntaxKind::EndOfFileToken
            && self.token != SyntaxKind::StringLiteral
        {
            self.token_value.push_str(&self.text[self.token_start..self.pos]);
        }
        Ok(self.token)
    }

    #[inline]
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    /// `...` or a fractional literal like `.5`; a lone dot is not a token.
    fn scan_dot(&mut self) -> Result<SyntaxKind, ParseError> {
        if self.byte_at(1) == Some(b'.') && self.byte_at(2) == Some(b'.') {
            self.pos += 3;
            return Ok(SyntaxKind::DotDotDotToken);
        }
        if self.byte_at(1).is_some_and(|b| b.is_ascii_digit()) {
            return self.scan_number();
        }
        let start = self.pos;
        self.pos += 1;
        Err(self.lex_error("invalid character '.'".into(), start))
    }

    /// `-` binds to a following numeric literal; otherwise it is a bare
    /// minus token (used by `-Infinity` in const values).
    fn scan_minus(&mut self) -> Result<SyntaxKind, ParseError> {
        match self.byte_at(1) {
            Some(b'0'..=b'9') => self.scan_number(),
            Some(b'.') if self.byte_at(2).is_some_and(|b| b.is_ascii_digit()) => {
                self.scan_number()
            }
            _ => {
                self.pos += 1;
                Ok(SyntaxKind::MinusToken)
            }
        }
    }

    /// String literals are quote-delimited, carry no escapes, and may not
    /// span lines.
    fn scan_string(&mut self) -> Result<SyntaxKind, ParseError> {
        let start = self.pos;
        self.pos += 1;
        loop {
            match self.byte_at(0) {
                None | Some(b'\n') => {
                    return Err(self.lex_error("unterminated string literal".into(), start));
                }
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        self.token_value
            .push_str(&self.text[start + 1..self.pos - 1]);
        Ok(SyntaxKind::StringLiteral)
    }

    /// Integer (decimal/hex/octal) and float forms, with an optional leading
    /// minus already consumed into the literal.
    fn scan_number(&mut self) -> Result<SyntaxKind, ParseError> {
        let start = self.pos;
        if self.byte_at(0) == Some(b'-') {
            self.pos += 1;
        }

        // Hex integers have no fractional or exponent part.
        if self.byte_at(0) == Some(b'0') && matches!(self.byte_at(1), Some(b'x') | Some(b'X')) {
            self.pos += 2;
            let digits_start = self.pos;
            while self.byte_at(0).is_some_and(|b| b.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            if self.pos == digits_start {
                return Err(self.lex_error("malformed hexadecimal literal".into(), start));
            }
            return Ok(SyntaxKind::IntegerLiteral);
        }

        let mut is_decimal = false;
        while self.byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.byte_at(0) == Some(b'.') && self.byte_at(1).is_some_and(|b| b.is_ascii_digit()) {
            is_decimal = true;
            self.pos += 1;
            while self.byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
        } else if self.byte_at(0) == Some(b'.') {
            // Trailing dot: `1.` is a valid WebIDL decimal.
            is_decimal = true;
            self.pos += 1;
        }
        if matches!(self.byte_at(0), Some(b'e') | Some(b'E')) {
            let mut lookahead = 1;
            if matches!(self.byte_at(1), Some(b'+') | Some(b'-')) {
                lookahead = 2;
            }
            if self.byte_at(lookahead).is_some_and(|b| b.is_ascii_digit()) {
                is_decimal = true;
                self.pos += lookahead;
                while self.byte_at(0).is_some_and(|b| b.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
        }

        Ok(if is_decimal {
            SyntaxKind::DecimalLiteral
        } else {
            SyntaxKind::IntegerLiteral
        })
    }

    /// Identifiers: `[A-Za-z_][0-9A-Za-z_-]*`. A leading underscore escapes
    /// an identifier that collides with a keyword and is stripped from the
    /// cooked value (but kept in the raw text).
    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while self
            .byte_at(0)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            self.pos += 1;
        }
        let text = &self.text[start..self.pos];

        if let Some(keyword) = SyntaxKind::from_keyword(text) {
            return keyword;
        }

        self.token_value
            .push_str(text.strip_prefix('_').unwrap_or(text));
        SyntaxKind::Identifier
    }
}
