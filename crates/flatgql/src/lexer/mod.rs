mod cursor;
mod token;
mod token_kind;

use crate::lexer::cursor::Cursor;
use crate::span::{ByteSpan, Position};
use crate::{LexError, LimitTracker};

pub use token::Token;
pub use token_kind::TokenKind;

/// Streams keyword-tagged tokens from GraphQL source text.
///
/// The lexer never copies input bytes: each token carries a [`ByteSpan`] back
/// into the buffer it was created over. Whitespace and commas are skipped as
/// insignificant separators; comments are produced as tokens and discarded
/// (or absorbed as descriptions) by the parser.
///
/// ```rust
/// use flatgql::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("{ animal ...snackSelection }");
/// assert_eq!(lexer.peek().unwrap().kind(), TokenKind::LCurly);
/// assert_eq!(lexer.read().unwrap().kind(), TokenKind::LCurly);
/// assert_eq!(lexer.read().unwrap().kind(), TokenKind::Name);
/// ```
pub struct Lexer<'a> {
    input: &'a [u8],
    cursor: Cursor<'a>,
    peeked: Option<Token>,
    limit: Option<LimitTracker>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`, producing spans relative to its start.
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, 0)
    }

    /// Create a lexer over `input[offset..]`. Spans are absolute into
    /// `input`; positions restart at line 1.
    pub(crate) fn with_offset(input: &'a str, offset: usize) -> Self {
        Self {
            input: input.as_bytes(),
            cursor: Cursor::new(input.as_bytes(), offset),
            peeked: None,
            limit: None,
        }
    }

    /// Abort lexing with [`LexError::TokenLimit`] after `limit` tokens.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(LimitTracker::new(limit));
        self
    }

    /// Utilization of the token limit, if one was set.
    pub fn limit_usage(&self) -> Option<LimitTracker> {
        self.limit
    }

    /// Consume and return the next token. At the end of input this returns
    /// the EOF token, repeatedly.
    pub fn read(&mut self) -> Result<Token, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.advance(),
        }
    }

    /// Return the next token without consuming it.
    pub fn peek(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.peeked {
            return Ok(token);
        }
        let token = self.advance()?;
        self.peeked = Some(token);
        Ok(token)
    }

    fn advance(&mut self) -> Result<Token, LexError> {
        self.skip_insignificant();

        let position = self.cursor.position();
        let start = self.cursor.offset();

        if self.cursor.is_eof() {
            return Ok(Token::new(
                TokenKind::Eof,
                ByteSpan::new(start, start),
                position,
            ));
        }

        if let Some(limit) = &mut self.limit {
            if !limit.enter() {
                return Err(LexError::TokenLimit {
                    limit: limit.limit(),
                    position,
                });
            }
        }

        let first = self.cursor.bump().unwrap();
        match first {
            b'"' => self.string_value(start, position),
            b'#' => Ok(self.comment(position)),
            b'.' => self.spread(start, position),
            b'$' => self.variable(position),
            b'-' => self.number(start, position, first),
            b'!' => Ok(self.punctuator(TokenKind::Bang, start, position)),
            b'&' => Ok(self.punctuator(TokenKind::Amp, start, position)),
            b'(' => Ok(self.punctuator(TokenKind::LParen, start, position)),
            b')' => Ok(self.punctuator(TokenKind::RParen, start, position)),
            b':' => Ok(self.punctuator(TokenKind::Colon, start, position)),
            b'=' => Ok(self.punctuator(TokenKind::Eq, start, position)),
            b'@' => Ok(self.punctuator(TokenKind::At, start, position)),
            b'[' => Ok(self.punctuator(TokenKind::LBracket, start, position)),
            b']' => Ok(self.punctuator(TokenKind::RBracket, start, position)),
            b'{' => Ok(self.punctuator(TokenKind::LCurly, start, position)),
            b'}' => Ok(self.punctuator(TokenKind::RCurly, start, position)),
            b'|' => Ok(self.punctuator(TokenKind::Pipe, start, position)),
            b if is_ident_start(b) => Ok(self.ident(start, position)),
            b if b.is_ascii_digit() => self.number(start, position, b),
            _ => Err(LexError::UnexpectedCharacter {
                found: self.char_at(start),
                position,
            }),
        }
    }

    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.first() {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => {
                    self.cursor.bump();
                }
                // Unicode BOM
                0xEF if self.cursor.second() == 0xBB => {
                    self.cursor.bump();
                    self.cursor.bump();
                    self.cursor.bump();
                }
                _ => break,
            }
        }
    }

    fn punctuator(&self, kind: TokenKind, start: usize, position: Position) -> Token {
        Token::new(kind, ByteSpan::new(start, self.cursor.offset()), position)
    }

    fn ident(&mut self, start: usize, position: Position) -> Token {
        while is_ident_continue(self.cursor.first()) {
            self.cursor.bump();
        }
        let span = ByteSpan::new(start, self.cursor.offset());
        let kind = TokenKind::from_ident(&self.input[start..self.cursor.offset()]);
        Token::new(kind, span, position)
    }

    fn variable(&mut self, position: Position) -> Result<Token, LexError> {
        if !is_ident_start(self.cursor.first()) {
            return Err(LexError::UnexpectedCharacter {
                found: '$',
                position,
            });
        }
        let name_start = self.cursor.offset();
        while is_ident_continue(self.cursor.first()) {
            self.cursor.bump();
        }
        Ok(Token::new(
            TokenKind::Variable,
            ByteSpan::new(name_start, self.cursor.offset()),
            position,
        ))
    }

    fn comment(&mut self, position: Position) -> Token {
        let content_start = self.cursor.offset();
        while !self.cursor.is_eof() && !is_line_terminator(self.cursor.first()) {
            self.cursor.bump();
        }
        Token::new(
            TokenKind::Comment,
            ByteSpan::new(content_start, self.cursor.offset()),
            position,
        )
    }

    fn spread(&mut self, start: usize, position: Position) -> Result<Token, LexError> {
        if (self.cursor.first(), self.cursor.second()) != (b'.', b'.') {
            return Err(LexError::UnterminatedSpread { position });
        }
        self.cursor.bump();
        self.cursor.bump();
        Ok(Token::new(
            TokenKind::Spread,
            ByteSpan::new(start, self.cursor.offset()),
            position,
        ))
    }

    fn number(&mut self, start: usize, position: Position, first: u8) -> Result<Token, LexError> {
        let mut is_float = false;

        let int_start = if first == b'-' {
            if !self.cursor.first().is_ascii_digit() {
                return Err(LexError::InvalidNumber {
                    message: "expected a digit after `-`",
                    position,
                });
            }
            self.cursor.offset()
        } else {
            start
        };

        while self.cursor.first().is_ascii_digit() {
            self.cursor.bump();
        }

        let int_len = self.cursor.offset() - int_start;
        if int_len > 1 && self.input[int_start] == b'0' {
            return Err(LexError::InvalidNumber {
                message: "leading zeros are not allowed",
                position,
            });
        }

        if self.cursor.first() == b'.' && self.cursor.second().is_ascii_digit() {
            self.cursor.bump();
            while self.cursor.first().is_ascii_digit() {
                self.cursor.bump();
            }
            is_float = true;
        } else if self.cursor.first() == b'.' {
            return Err(LexError::InvalidNumber {
                message: "expected a digit after `.`",
                position,
            });
        }

        if matches!(self.cursor.first(), b'e' | b'E') {
            self.cursor.bump();
            if matches!(self.cursor.first(), b'+' | b'-') {
                self.cursor.bump();
            }
            if !self.cursor.first().is_ascii_digit() {
                return Err(LexError::InvalidNumber {
                    message: "expected a digit in the exponent",
                    position,
                });
            }
            while self.cursor.first().is_ascii_digit() {
                self.cursor.bump();
            }
            is_float = true;
        }

        if is_ident_start(self.cursor.first()) {
            return Err(LexError::InvalidNumber {
                message: "unexpected character after a number",
                position,
            });
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Ok(Token::new(
            kind,
            ByteSpan::new(start, self.cursor.offset()),
            position,
        ))
    }

    fn string_value(&mut self, start: usize, position: Position) -> Result<Token, LexError> {
        if self.cursor.first() == b'"' {
            self.cursor.bump();
            if self.cursor.first() == b'"' {
                self.cursor.bump();
                return self.block_string(position);
            }
            // empty string `""`
            return Ok(Token::new(
                TokenKind::StringValue,
                ByteSpan::new(start + 1, start + 1),
                position,
            ));
        }

        let content_start = self.cursor.offset();
        loop {
            let byte = match self.cursor.bump() {
                Some(byte) => byte,
                None => return Err(LexError::UnterminatedString { position }),
            };
            match byte {
                b'"' => {
                    return Ok(Token::new(
                        TokenKind::StringValue,
                        ByteSpan::new(content_start, self.cursor.offset() - 1),
                        position,
                    ));
                }
                b'\\' => {
                    let escaped = match self.cursor.bump() {
                        Some(escaped) => escaped,
                        None => return Err(LexError::UnterminatedString { position }),
                    };
                    match escaped {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => {}
                        b'u' => {
                            for _ in 0..4 {
                                if !self.cursor.first().is_ascii_hexdigit() {
                                    return Err(LexError::InvalidEscape {
                                        found: 'u',
                                        position: self.cursor.position(),
                                    });
                                }
                                self.cursor.bump();
                            }
                        }
                        other => {
                            return Err(LexError::InvalidEscape {
                                found: other as char,
                                position: self.cursor.position(),
                            });
                        }
                    }
                }
                b'\n' | b'\r' => return Err(LexError::UnterminatedString { position }),
                _ => {}
            }
        }
    }

    fn block_string(&mut self, position: Position) -> Result<Token, LexError> {
        let content_start = self.cursor.offset();
        loop {
            let byte = match self.cursor.bump() {
                Some(byte) => byte,
                None => return Err(LexError::UnterminatedString { position }),
            };
            match byte {
                // \""" keeps an escaped triple-quote verbatim
                b'\\' if (self.cursor.first(), self.cursor.second()) == (b'"', b'"') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    if self.cursor.first() == b'"' {
                        self.cursor.bump();
                    }
                }
                b'"' if (self.cursor.first(), self.cursor.second()) == (b'"', b'"') => {
                    let content_end = self.cursor.offset() - 1;
                    self.cursor.bump();
                    self.cursor.bump();
                    return Ok(Token::new(
                        TokenKind::BlockString,
                        ByteSpan::new(content_start, content_end),
                        position,
                    ));
                }
                _ => {}
            }
        }
    }

    fn char_at(&self, offset: usize) -> char {
        std::str::from_utf8(&self.input[offset..])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_line_terminator(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut kinds = vec![];
        loop {
            let token = lexer.read().expect("lex error");
            if token.kind() == TokenKind::Eof {
                break;
            }
            kinds.push(token.kind());
        }
        kinds
    }

    #[test]
    fn punctuators_and_names() {
        assert_eq!(
            kinds("{ animal ...snackSelection ... on Pet { playmates { count } } }"),
            vec![
                TokenKind::LCurly,
                TokenKind::Name,
                TokenKind::Spread,
                TokenKind::Name,
                TokenKind::Spread,
                TokenKind::On,
                TokenKind::Name,
                TokenKind::LCurly,
                TokenKind::Name,
                TokenKind::LCurly,
                TokenKind::Name,
                TokenKind::RCurly,
                TokenKind::RCurly,
                TokenKind::RCurly,
            ]
        );
    }

    #[test]
    fn reserved_words_are_tagged() {
        assert_eq!(
            kinds("extend type Query implements Node"),
            vec![
                TokenKind::Extend,
                TokenKind::Type,
                TokenKind::Query,
                TokenKind::Implements,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn spans_resolve_to_source_bytes() {
        let input = "query GetDog { dog }";
        let mut lexer = Lexer::new(input);
        lexer.read().unwrap();
        let name = lexer.read().unwrap();
        assert_eq!(name.kind(), TokenKind::Name);
        assert_eq!(
            &input.as_bytes()[name.span().start as usize..name.span().end as usize],
            b"GetDog"
        );
    }

    #[test]
    fn variables_span_the_bare_name() {
        let input = "($size: Int)";
        let mut lexer = Lexer::new(input);
        lexer.read().unwrap();
        let var = lexer.read().unwrap();
        assert_eq!(var.kind(), TokenKind::Variable);
        assert_eq!(
            &input.as_bytes()[var.span().start as usize..var.span().end as usize],
            b"size"
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(
            kinds("4 -4 4.123 -4.123 0.123 123e4 123E4 123e-4 123e+4 -1.123e4"),
            vec![
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
                TokenKind::Float,
            ]
        );
    }

    #[test]
    fn invalid_number_is_positioned() {
        let mut lexer = Lexer::new("\n  01");
        let err = lexer.read().unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidNumber {
                message: "leading zeros are not allowed",
                position: Position::new(2, 3),
            }
        );
    }

    #[test]
    fn strings_and_block_strings() {
        let input = r#""pet name" """block
content""" "esc\"aped""#;
        let mut lexer = Lexer::new(input);
        let a = lexer.read().unwrap();
        assert_eq!(a.kind(), TokenKind::StringValue);
        let b = lexer.read().unwrap();
        assert_eq!(b.kind(), TokenKind::BlockString);
        let c = lexer.read().unwrap();
        assert_eq!(c.kind(), TokenKind::StringValue);
        assert_eq!(
            &input[c.span().start as usize..c.span().end as usize],
            r#"esc\"aped"#
        );
    }

    #[test]
    fn unterminated_string() {
        let mut lexer = Lexer::new("\"dangling");
        assert_eq!(
            lexer.read().unwrap_err(),
            LexError::UnterminatedString {
                position: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn unterminated_spread_operator() {
        let mut lexer = Lexer::new("{ ..a }");
        lexer.read().unwrap();
        assert_eq!(
            lexer.read().unwrap_err(),
            LexError::UnterminatedSpread {
                position: Position::new(1, 3)
            }
        );
    }

    #[test]
    fn token_limit() {
        let mut lexer = Lexer::new("type Query { a a a a a a a a a }").with_limit(10);
        let mut read = 0;
        let err = loop {
            match lexer.read() {
                Ok(_) => read += 1,
                Err(err) => break err,
            }
        };
        assert_eq!(read, 10);
        assert!(matches!(err, LexError::TokenLimit { limit: 10, .. }));
    }

    #[test]
    fn comments_span_their_text() {
        let input = "# a comment\nname";
        let mut lexer = Lexer::new(input);
        let comment = lexer.read().unwrap();
        assert_eq!(comment.kind(), TokenKind::Comment);
        assert_eq!(
            &input[comment.span().start as usize..comment.span().end as usize],
            " a comment"
        );
        assert_eq!(lexer.read().unwrap().kind(), TokenKind::Name);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut lexer = Lexer::new("dog cat");
        assert_eq!(lexer.peek().unwrap(), lexer.peek().unwrap());
        let first = lexer.read().unwrap();
        let second = lexer.read().unwrap();
        assert_ne!(first.span(), second.span());
    }
}
