use crate::ast::pool::Id;
use crate::ast::value::{ArgumentSetId, DirectiveSetId};
use crate::ast::ty::TypeId;
use crate::ast::value::ValueId;
use crate::span::{ByteSpan, Position};

use std::fmt;

pub type FieldId = Id<Field>;
pub type SelectionSetId = Id<SelectionSet>;
pub type FragmentSpreadId = Id<FragmentSpread>;
pub type InlineFragmentId = Id<InlineFragment>;
pub type OperationDefinitionId = Id<OperationDefinition>;
pub type VariableDefinitionId = Id<VariableDefinition>;
pub type FragmentDefinitionId = Id<FragmentDefinition>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Query => f.write_str("query"),
            OperationType::Mutation => f.write_str("mutation"),
            OperationType::Subscription => f.write_str("subscription"),
        }
    }
}

/// A `query`/`mutation`/`subscription` operation, or the anonymous `{ … }`
/// shorthand (which is a query with an empty name).
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: ByteSpan,
    pub variable_definitions: Vec<VariableDefinitionId>,
    pub directives: Option<DirectiveSetId>,
    pub selection_set: SelectionSetId,
    pub position: Position,
}

/// A `$name: Type = default @dirs` entry in an operation's variable list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableDefinition {
    pub name: ByteSpan,
    pub ty: TypeId,
    pub default_value: Option<ValueId>,
    pub directives: Option<DirectiveSetId>,
    pub position: Position,
}

/// A `fragment Name on Type { … }` definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentDefinition {
    pub name: ByteSpan,
    pub type_condition: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub selection_set: SelectionSetId,
    pub position: Position,
}

/// A field selection `alias: name(args) @dirs { … }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Empty when the field is not aliased.
    pub alias: ByteSpan,
    pub name: ByteSpan,
    pub arguments: Option<ArgumentSetId>,
    pub directives: Option<DirectiveSetId>,
    pub selection_set: Option<SelectionSetId>,
    pub position: Position,
}

impl Field {
    /// The key this field responds under: its alias if present, its name
    /// otherwise.
    pub fn response_name(&self) -> ByteSpan {
        if self.alias.is_empty() {
            self.name
        } else {
            self.alias
        }
    }
}

/// A `...Name @dirs` fragment spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentSpread {
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub position: Position,
}

/// A `... on Type @dirs { … }` inline fragment. The type condition span is
/// empty when omitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineFragment {
    pub type_condition: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub selection_set: SelectionSetId,
    pub position: Position,
}

/// The `{ … }` body of an operation, field, fragment definition or inline
/// fragment. Selections keep their source order across all three kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Field(FieldId),
    FragmentSpread(FragmentSpreadId),
    InlineFragment(InlineFragmentId),
}

/// The root of all executable definitions parsed into a document. Repeated
/// `parse_executable` calls keep appending here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutableDefinition {
    pub operations: Vec<OperationDefinitionId>,
    pub fragments: Vec<FragmentDefinitionId>,
}
