use crate::ast::pool::Id;
use crate::span::{ByteSpan, Position};

pub type ValueId = Id<Value>;
pub type ObjectFieldId = Id<ObjectField>;
pub type ArgumentId = Id<Argument>;
pub type ArgumentSetId = Id<ArgumentSet>;
pub type DirectiveId = Id<Directive>;
pub type DirectiveSetId = Id<DirectiveSet>;
pub type IntValueId = Id<i64>;
pub type FloatValueId = Id<f64>;

/// An input value.
///
/// Every variant keeps enough of the raw source to reconstruct it: numbers
/// carry both the raw lexeme and an id into the decoded primitive pool,
/// strings carry their content span and whether they were written in block
/// form.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// A `$name` reference; the span covers the bare name.
    Variable(ByteSpan),
    Int { raw: ByteSpan, value: IntValueId },
    Float { raw: ByteSpan, value: FloatValueId },
    String { content: ByteSpan, block: bool },
    Boolean(bool),
    Null,
    Enum(ByteSpan),
    List(Vec<ValueId>),
    Object(Vec<ObjectFieldId>),
}

/// A `name: value` entry inside an object value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectField {
    pub name: ByteSpan,
    pub value: ValueId,
    pub position: Position,
}

/// A `name: value` argument on a field or directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Argument {
    pub name: ByteSpan,
    pub value: ValueId,
    pub position: Position,
}

/// The ordered arguments of one field or directive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentSet {
    pub arguments: Vec<ArgumentId>,
}

/// A `@name(args)` directive annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Directive {
    pub name: ByteSpan,
    pub arguments: Option<ArgumentSetId>,
    pub position: Position,
}

/// The ordered directives annotating one node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectiveSet {
    pub directives: Vec<DirectiveId>,
}
