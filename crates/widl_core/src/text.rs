//! Text range and line map types for source location tracking.
//!
//! All positions are byte offsets into the UTF-8 input. The parser never
//! keeps a live reference to the source text in the tree it builds; nodes
//! carry a `TextRange` and a caller that wants the original text slices it
//! back out of the input.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A byte offset into source text.
pub type TextPos = u32;

/// A half-open range `[pos, end)` of bytes in the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct TextRange {
    /// Start offset (inclusive).
    pub pos: TextPos,
    /// End offset (exclusive).
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= pos);
        Self { pos, end }
    }

    /// An empty range anchored at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self { pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> TextPos {
        self.end - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    #[inline]
    pub fn contains(&self, pos: TextPos) -> bool {
        pos >= self.pos && pos < self.end
    }

    /// The smallest range covering both `self` and `other`.
    pub fn union(&self, other: TextRange) -> TextRange {
        TextRange::new(self.pos.min(other.pos), self.end.max(other.end))
    }

    /// Convert to a `usize` range for slicing the source string.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.pos as usize..self.end as usize
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.pos, self.end)
    }
}

/// A 1-based line / column pair, as rendered in diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to line/column positions.
///
/// Built once per input; lookups are a binary search over line starts.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the first character of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// 0-based line index containing `pos`.
    pub fn line_index(&self, pos: TextPos) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// 1-based line and column of a byte offset.
    pub fn line_col(&self, pos: TextPos) -> LineCol {
        let line = self.line_index(pos);
        LineCol {
            line: line as u32 + 1,
            column: pos - self.line_starts[line] + 1,
        }
    }

    /// Byte offset where the given 0-based line starts.
    pub fn line_start(&self, line: usize) -> TextPos {
        self.line_starts[line]
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The full text of the line containing `pos`, without the newline.
    pub fn line_text<'a>(&self, text: &'a str, pos: TextPos) -> &'a str {
        let line = self.line_index(pos);
        let start = self.line_starts[line] as usize;
        let end = self
            .line_starts
            .get(line + 1)
            .map(|&p| p as usize)
            .unwrap_or(text.len());
        text[start..end].trim_end_matches(['\n', '\r'])
    }
}
