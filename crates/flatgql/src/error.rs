use crate::span::Position;
use crate::TokenKind;

use thiserror::Error;

/// An error produced while turning input bytes into tokens.
///
/// Lex errors are always positioned and the lexer does not consume past the
/// faulty character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character `{found}` at {position}")]
    UnexpectedCharacter { found: char, position: Position },
    #[error("unterminated string value at {position}")]
    UnterminatedString { position: Position },
    #[error("unsupported escape sequence `\\{found}` at {position}")]
    InvalidEscape { found: char, position: Position },
    #[error("invalid number literal at {position}: {message}")]
    InvalidNumber {
        message: &'static str,
        position: Position,
    },
    #[error("unterminated spread operator at {position}, expected `...`")]
    UnterminatedSpread { position: Position },
    #[error("token limit of {limit} reached at {position}, aborting lexing")]
    TokenLimit { limit: usize, position: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidNumber { position, .. }
            | LexError::UnterminatedSpread { position }
            | LexError::TokenLimit { position, .. } => *position,
        }
    }
}

/// An error produced by the parser.
///
/// A failed parse aborts the document; the document handle is rolled back to
/// its state before the parse, so partial pools are never observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("expected {expected}, got {got} at {position}")]
    UnexpectedToken {
        expected: &'static str,
        got: TokenKind,
        position: Position,
    },
    #[error("integer value out of range at {position}")]
    IntegerOverflow { position: Position },
    #[error("float value out of range at {position}")]
    FloatOverflow { position: Position },
    #[error("recursion limit of {limit} reached at {position}")]
    RecursionLimit { limit: usize, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(err) => err.position(),
            ParseError::UnexpectedToken { position, .. }
            | ParseError::IntegerOverflow { position }
            | ParseError::FloatOverflow { position }
            | ParseError::RecursionLimit { position, .. } => *position,
        }
    }
}

/// A fatal error raised by the walker and lookup layer.
///
/// These indicate a programmer error or a corrupt AST; the operation that
/// raised one terminates and the walker makes no attempt at recovery. Rules
/// that merely find a document invalid do not produce a `LookupError`; they
/// return their own structured results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("fragment `{name}` is spread at {position} but never defined")]
    MissingFragment { name: String, position: Position },
    #[error("walk already in progress")]
    ReentrantWalk,
    #[error("no type named `{name}` in the schema")]
    UnknownType { name: String },
    #[error("type `{type_name}` has no field `{field_name}`")]
    UnknownField {
        type_name: String,
        field_name: String,
    },
    #[error("no root operation type for {operation}")]
    MissingRootType { operation: &'static str },
}
