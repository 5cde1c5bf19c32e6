use crate::span::{ByteSpan, Position};
use crate::TokenKind;

use std::fmt;

/// A single token lexed from the input buffer.
///
/// The token never owns its text: `span` points back into the document input
/// and resolves through [`Document::resolve`]. String tokens span their
/// content between the quotes; variable tokens span the identifier without
/// the `$`; comment tokens span the text after the `#`.
///
/// [`Document::resolve`]: crate::Document::resolve
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: ByteSpan,
    pub(crate) position: Position,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, span: ByteSpan, position: Position) -> Self {
        Self {
            kind,
            span,
            position,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}@{}..{} {}",
            self.kind, self.span.start, self.span.end, self.position
        )
    }
}
