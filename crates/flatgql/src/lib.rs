//! A GraphQL toolchain core: a zero-copy lexer, a recursive-descent parser
//! for the October 2021 grammar, a flat arena AST, and a depth-first walker
//! with derived lookups, plus the append-only mutation surface that
//! normalization and planning passes build on.
//!
//! Parsed entities live in typed pools inside a [`Document`] and reference
//! each other by small integer ids; names and literals are `(start, end)`
//! spans into the immutable input buffer. Ids never move and never dangle:
//! pools only grow, and "removal" rewrites the referencing list instead of
//! the pool.
//!
//! ```rust
//! use flatgql::{parse_type_system, Lookup, Walker};
//!
//! let mut doc = parse_type_system("type Query { dog: Dog } type Dog { name: String }")?;
//! doc.parse_executable("{ dog { name } }")?;
//!
//! let mut walker = Walker::new(Lookup::new(&doc));
//! walker.walk_executable().unwrap();
//!
//! let (_, name_node) = walker
//!     .fields_iterable()
//!     .find(|&(field, _)| doc.span_is(doc.field(field).name, "name"))
//!     .unwrap();
//! let path = walker.field_path(name_node);
//! assert_eq!(doc.resolve(path[0]), b"dog");
//! # Ok::<(), flatgql::ParseError>(())
//! ```

pub mod ast;
mod error;
pub mod inspect;
mod lexer;
mod limit;
pub mod lookup;
pub mod normalize;
mod parser;
pub mod printer;
mod span;

pub use crate::ast::Document;
pub use crate::error::{LexError, LookupError, ParseError};
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::limit::LimitTracker;
pub use crate::lookup::{Lookup, Visitor, WalkNodeId, WalkedNode, Walker, WalkerStatus};
pub use crate::parser::{parse_executable_document, parse_type_system};
pub use crate::span::{ByteSpan, Position};
