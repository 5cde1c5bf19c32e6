use crate::ast::pool::Id;
use crate::ast::ty::TypeId;
use crate::ast::value::{DirectiveSetId, ValueId};
use crate::span::{ByteSpan, Position};

use std::fmt;

pub type SchemaDefinitionId = Id<SchemaDefinition>;
pub type ScalarTypeDefinitionId = Id<ScalarTypeDefinition>;
pub type ObjectTypeDefinitionId = Id<ObjectTypeDefinition>;
pub type InterfaceTypeDefinitionId = Id<InterfaceTypeDefinition>;
pub type UnionTypeDefinitionId = Id<UnionTypeDefinition>;
pub type EnumTypeDefinitionId = Id<EnumTypeDefinition>;
pub type EnumValueDefinitionId = Id<EnumValueDefinition>;
pub type InputObjectTypeDefinitionId = Id<InputObjectTypeDefinition>;
pub type DirectiveDefinitionId = Id<DirectiveDefinition>;
pub type FieldDefinitionId = Id<FieldDefinition>;
pub type InputValueDefinitionId = Id<InputValueDefinition>;

/// `schema { query: … mutation: … subscription: … }`. The root operation
/// type names are empty spans when not declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemaDefinition {
    pub description: ByteSpan,
    pub query: ByteSpan,
    pub mutation: ByteSpan,
    pub subscription: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub is_extend: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub is_extend: bool,
    pub position: Position,
}

/// `type Name implements A & B @dirs { fields }`. Fields form an intrusive
/// list headed here and chained through [`FieldDefinition::next`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub implements: Vec<ByteSpan>,
    pub directives: Option<DirectiveSetId>,
    pub fields: Option<FieldDefinitionId>,
    pub is_extend: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub fields: Option<FieldDefinitionId>,
    pub is_extend: bool,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub members: Vec<ByteSpan>,
    pub is_extend: bool,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub values: Vec<EnumValueDefinitionId>,
    pub is_extend: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnumValueDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub position: Position,
}

/// `input Name @dirs { input fields }`. Input fields form an intrusive list
/// headed here and chained through [`InputValueDefinition::next`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub directives: Option<DirectiveSetId>,
    pub input_fields: Option<InputValueDefinitionId>,
    pub is_extend: bool,
    pub position: Position,
}

/// `directive @name(args) on LOCATION | LOCATION`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub arguments: Option<InputValueDefinitionId>,
    pub locations: Vec<DirectiveLocation>,
    pub is_extend: bool,
    pub position: Position,
}

/// One field of an object or interface type. `next` chains the fields of one
/// type into a singly-linked list terminated by `None`; iterate with
/// [`Document::field_definitions`].
///
/// [`Document::field_definitions`]: crate::Document::field_definitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub arguments: Option<InputValueDefinitionId>,
    pub ty: TypeId,
    pub directives: Option<DirectiveSetId>,
    pub position: Position,
    pub next: Option<FieldDefinitionId>,
}

/// An argument definition or input-object field. `next` chains siblings the
/// same way [`FieldDefinition::next`] does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputValueDefinition {
    pub description: ByteSpan,
    pub name: ByteSpan,
    pub ty: TypeId,
    pub default_value: Option<ValueId>,
    pub directives: Option<DirectiveSetId>,
    pub position: Position,
    pub next: Option<InputValueDefinitionId>,
}

/// The grammar positions a directive may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        let location = match name {
            b"QUERY" => DirectiveLocation::Query,
            b"MUTATION" => DirectiveLocation::Mutation,
            b"SUBSCRIPTION" => DirectiveLocation::Subscription,
            b"FIELD" => DirectiveLocation::Field,
            b"FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            b"FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            b"INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            b"VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            b"SCHEMA" => DirectiveLocation::Schema,
            b"SCALAR" => DirectiveLocation::Scalar,
            b"OBJECT" => DirectiveLocation::Object,
            b"FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            b"ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            b"INTERFACE" => DirectiveLocation::Interface,
            b"UNION" => DirectiveLocation::Union,
            b"ENUM" => DirectiveLocation::Enum,
            b"ENUM_VALUE" => DirectiveLocation::EnumValue,
            b"INPUT_OBJECT" => DirectiveLocation::InputObject,
            b"INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        };
        Some(location)
    }

    pub fn name(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The root of all type-system definitions in a document, in parse order per
/// kind. Extensions land in the same lists with `is_extend` set; merging them
/// into base definitions is left to consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSystemDefinition {
    pub schemas: Vec<SchemaDefinitionId>,
    pub scalars: Vec<ScalarTypeDefinitionId>,
    pub objects: Vec<ObjectTypeDefinitionId>,
    pub interfaces: Vec<InterfaceTypeDefinitionId>,
    pub unions: Vec<UnionTypeDefinitionId>,
    pub enums: Vec<EnumTypeDefinitionId>,
    pub input_objects: Vec<InputObjectTypeDefinitionId>,
    pub directives: Vec<DirectiveDefinitionId>,
}
