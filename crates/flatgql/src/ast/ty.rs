use crate::ast::pool::Id;
use crate::span::{ByteSpan, Position};

pub type TypeId = Id<Type>;

/// A type reference such as `[Pet!]!`, stored as a chain of wrapping
/// records. `NonNull` only ever wraps `Named` or `List`, never another
/// `NonNull`; the parser maintains this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Type {
    pub kind: TypeKind,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Named(ByteSpan),
    List(TypeId),
    NonNull(TypeId),
}
