pub(crate) mod grammar;

use crate::ast::Document;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::span::ByteSpan;
use crate::{LimitTracker, ParseError};

use std::collections::HashMap;

/// Nesting budget for selection sets, list types and composite values.
const NESTING_LIMIT: usize = 4_096;

/// Recursive-descent parser over a pre-lexed token stream, appending records
/// into a [`Document`]'s pools as productions complete.
///
/// The grammar lives in [`grammar`], one module per production group, and
/// every production takes the parser by `&mut` and returns the pool id of
/// the record it built.
pub(crate) struct Parser<'doc> {
    pub(crate) doc: &'doc mut Document,
    tokens: Vec<Token>,
    cursor: usize,
    /// Maps a token index to the content span of the comment immediately
    /// preceding it, for comment-as-description absorption.
    comment_before: HashMap<usize, ByteSpan>,
    recursion: LimitTracker,
}

impl<'doc> Parser<'doc> {
    /// Append `input` to the document buffer and lex it fully. The first lex
    /// error aborts; the caller rolls the document back.
    pub(crate) fn new(doc: &'doc mut Document, input: &str) -> Result<Self, ParseError> {
        let base = doc.append_input(input);

        let mut tokens = Vec::new();
        let mut comment_before = HashMap::new();
        {
            let mut lexer = Lexer::with_offset(doc.input(), base);
            loop {
                let token = lexer.read()?;
                match token.kind() {
                    TokenKind::Comment => {
                        comment_before.insert(tokens.len(), token.span());
                    }
                    TokenKind::Eof => {
                        tokens.push(token);
                        break;
                    }
                    _ => tokens.push(token),
                }
            }
        }

        Ok(Self {
            doc,
            tokens,
            cursor: 0,
            comment_before,
            recursion: LimitTracker::new(NESTING_LIMIT),
        })
    }

    /// Kind of the current token.
    pub(crate) fn peek(&self) -> TokenKind {
        self.tokens[self.cursor].kind()
    }

    /// The current token, without consuming it.
    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.cursor]
    }

    /// Consume and return the current token. EOF is sticky.
    pub(crate) fn pop(&mut self) -> Token {
        let token = self.tokens[self.cursor];
        if token.kind() != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind, or fail with a
    /// positioned error naming what was expected.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<Token, ParseError> {
        if self.peek() == kind {
            Ok(self.pop())
        } else {
            Err(self.err_expected(expected))
        }
    }

    /// Consume the current token if it can serve as a `Name`. Reserved words
    /// are valid names outside their keyword position.
    pub(crate) fn expect_name(&mut self, expected: &'static str) -> Result<Token, ParseError> {
        if self.peek().is_name() {
            Ok(self.pop())
        } else {
            Err(self.err_expected(expected))
        }
    }

    /// A positioned error at the current token.
    pub(crate) fn err_expected(&self, expected: &'static str) -> ParseError {
        let token = self.peek_token();
        ParseError::UnexpectedToken {
            expected,
            got: token.kind(),
            position: token.position(),
        }
    }

    /// Enter a nested construct, failing once the nesting budget is spent.
    pub(crate) fn descend(&mut self) -> Result<(), ParseError> {
        if !self.recursion.enter() {
            return Err(ParseError::RecursionLimit {
                limit: self.recursion.limit(),
                position: self.peek_token().position(),
            });
        }
        Ok(())
    }

    /// Leave a nested construct, refunding its budget unit.
    pub(crate) fn ascend(&mut self) {
        self.recursion.exit();
    }

    /// The comment immediately preceding the current token, if any, for use
    /// as a definition description.
    pub(crate) fn comment_description(&self) -> ByteSpan {
        self.comment_before
            .get(&self.cursor)
            .copied()
            .unwrap_or(ByteSpan::EMPTY)
    }
}

/// Parse a GraphQL type-system document (schema SDL) into a fresh
/// [`Document`].
///
/// ```rust
/// let doc = flatgql::parse_type_system("type Query { dog: Dog }").unwrap();
/// assert_eq!(doc.type_system().objects.len(), 1);
/// ```
pub fn parse_type_system(input: &str) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    doc.extend_type_system(input)?;
    Ok(doc)
}

/// Parse an executable document (operations and fragments) into a fresh
/// [`Document`] with no schema. Lookups that need type information require
/// a schema-bearing document; parse the schema first and use
/// [`Document::parse_executable`] for those.
pub fn parse_executable_document(input: &str) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    doc.parse_executable(input)?;
    Ok(doc)
}

impl Document {
    /// Parse executable definitions and merge them into this document,
    /// alongside whatever was parsed before. On failure the document is
    /// rolled back to its prior state and the error is returned.
    pub fn parse_executable(&mut self, input: &str) -> Result<(), ParseError> {
        let snapshot = self.snapshot();
        let result = Parser::new(self, input)
            .and_then(|mut parser| grammar::document::executable_document(&mut parser));
        if result.is_err() {
            self.restore(snapshot);
        }
        result
    }

    /// Parse additional type-system definitions (including `extend`
    /// definitions) into this document. On failure the document is rolled
    /// back to its prior state and the error is returned.
    pub fn extend_type_system(&mut self, input: &str) -> Result<(), ParseError> {
        let snapshot = self.snapshot();
        let result = Parser::new(self, input)
            .and_then(|mut parser| grammar::document::type_system_document(&mut parser));
        if result.is_err() {
            self.restore(snapshot);
        }
        result
    }
}
