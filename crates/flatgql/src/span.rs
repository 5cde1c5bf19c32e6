use std::fmt;

/// A `(start, end)` byte range into a [`Document`]'s input buffer.
///
/// Every name, alias, description, enum symbol and string literal in the AST
/// is stored as a `ByteSpan` rather than an owned string. Resolving a span
/// through [`Document::resolve`] returns exactly the source bytes it was
/// lexed from, so byte equality of resolved spans is value equality of names.
///
/// The empty span is used as the "absent" sentinel for optional properties
/// such as a field alias or a definition description.
///
/// [`Document`]: crate::Document
/// [`Document::resolve`]: crate::Document::resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSpan {
    pub start: u32,
    pub end: u32,
}

impl ByteSpan {
    /// The absent-property sentinel.
    pub const EMPTY: ByteSpan = ByteSpan { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    pub fn len(self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A line/column pair, both 1-based, tracked by the lexer and carried on
/// every token, AST record and error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
