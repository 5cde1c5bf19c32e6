use std::fmt;

/// The closed set of token kinds produced by the [`Lexer`].
///
/// Reserved words are recognized at lex time and tagged with their own kind
/// so the parser can dispatch on the kind alone. Any reserved word is still a
/// valid GraphQL `Name`; see [`TokenKind::is_name`].
///
/// [`Lexer`]: crate::Lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    Name,

    // reserved words
    On,
    Extend,
    Schema,
    Scalar,
    Type,
    Interface,
    Union,
    Enum,
    Input,
    Directive,
    True,
    False,
    Null,
    Query,
    Mutation,
    Subscription,
    Fragment,
    Implements,

    // literal classes
    StringValue,
    BlockString,
    Int,
    Float,
    /// A `$`-prefixed identifier. The token's span covers the identifier
    /// without the `$`.
    Variable,

    // punctuators
    Bang,     // !
    Amp,      // &
    LParen,   // (
    RParen,   // )
    Spread,   // ...
    Colon,    // :
    Eq,       // =
    At,       // @
    LBracket, // [
    RBracket, // ]
    LCurly,   // {
    RCurly,   // }
    Pipe,     // |

    Comment,
    Eof,
}

impl TokenKind {
    /// Whether a token of this kind may be consumed where the grammar calls
    /// for a `Name`. Reserved words are ordinary names outside of their
    /// keyword position.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            TokenKind::Name
                | TokenKind::On
                | TokenKind::Extend
                | TokenKind::Schema
                | TokenKind::Scalar
                | TokenKind::Type
                | TokenKind::Interface
                | TokenKind::Union
                | TokenKind::Enum
                | TokenKind::Input
                | TokenKind::Directive
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Query
                | TokenKind::Mutation
                | TokenKind::Subscription
                | TokenKind::Fragment
                | TokenKind::Implements
        )
    }

    /// Tag an identifier with its reserved-word kind, or `Name`.
    pub(crate) fn from_ident(ident: &[u8]) -> TokenKind {
        match ident {
            b"on" => TokenKind::On,
            b"extend" => TokenKind::Extend,
            b"schema" => TokenKind::Schema,
            b"scalar" => TokenKind::Scalar,
            b"type" => TokenKind::Type,
            b"interface" => TokenKind::Interface,
            b"union" => TokenKind::Union,
            b"enum" => TokenKind::Enum,
            b"input" => TokenKind::Input,
            b"directive" => TokenKind::Directive,
            b"true" => TokenKind::True,
            b"false" => TokenKind::False,
            b"null" => TokenKind::Null,
            b"query" => TokenKind::Query,
            b"mutation" => TokenKind::Mutation,
            b"subscription" => TokenKind::Subscription,
            b"fragment" => TokenKind::Fragment,
            b"implements" => TokenKind::Implements,
            _ => TokenKind::Name,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Name => "a Name",
            TokenKind::On => "`on`",
            TokenKind::Extend => "`extend`",
            TokenKind::Schema => "`schema`",
            TokenKind::Scalar => "`scalar`",
            TokenKind::Type => "`type`",
            TokenKind::Interface => "`interface`",
            TokenKind::Union => "`union`",
            TokenKind::Enum => "`enum`",
            TokenKind::Input => "`input`",
            TokenKind::Directive => "`directive`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Query => "`query`",
            TokenKind::Mutation => "`mutation`",
            TokenKind::Subscription => "`subscription`",
            TokenKind::Fragment => "`fragment`",
            TokenKind::Implements => "`implements`",
            TokenKind::StringValue => "a String",
            TokenKind::BlockString => "a Block String",
            TokenKind::Int => "an Int",
            TokenKind::Float => "a Float",
            TokenKind::Variable => "a Variable",
            TokenKind::Bang => "`!`",
            TokenKind::Amp => "`&`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Spread => "`...`",
            TokenKind::Colon => "`:`",
            TokenKind::Eq => "`=`",
            TokenKind::At => "`@`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LCurly => "`{`",
            TokenKind::RCurly => "`}`",
            TokenKind::Pipe => "`|`",
            TokenKind::Comment => "a Comment",
            TokenKind::Eof => "EOF",
        };
        f.write_str(text)
    }
}
