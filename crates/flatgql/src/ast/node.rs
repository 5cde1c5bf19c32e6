use crate::ast::executable::{
    FieldId, FragmentDefinitionId, FragmentSpreadId, InlineFragmentId, OperationDefinitionId,
    SelectionSetId, VariableDefinitionId,
};
use crate::ast::type_system::{
    DirectiveDefinitionId, EnumTypeDefinitionId, EnumValueDefinitionId, FieldDefinitionId,
    InputObjectTypeDefinitionId, InputValueDefinitionId, InterfaceTypeDefinitionId,
    ObjectTypeDefinitionId, ScalarTypeDefinitionId, SchemaDefinitionId, UnionTypeDefinitionId,
};
use crate::ast::ty::TypeId;
use crate::ast::value::{ArgumentId, ArgumentSetId, DirectiveId, DirectiveSetId};
use crate::ast::Document;
use crate::span::{ByteSpan, Position};

/// A reference to any node kind in the document, used wherever passes handle
/// nodes uniformly: the walker's path stack, its node-usage map, and the
/// property accessors below.
///
/// Accessors return `None` for kinds a property does not apply to — asking
/// for the alias of an enum definition is answerable (there is none), not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    SchemaDefinition(SchemaDefinitionId),
    ScalarTypeDefinition(ScalarTypeDefinitionId),
    ObjectTypeDefinition(ObjectTypeDefinitionId),
    InterfaceTypeDefinition(InterfaceTypeDefinitionId),
    UnionTypeDefinition(UnionTypeDefinitionId),
    EnumTypeDefinition(EnumTypeDefinitionId),
    EnumValueDefinition(EnumValueDefinitionId),
    InputObjectTypeDefinition(InputObjectTypeDefinitionId),
    DirectiveDefinition(DirectiveDefinitionId),
    FieldDefinition(FieldDefinitionId),
    InputValueDefinition(InputValueDefinitionId),
    OperationDefinition(OperationDefinitionId),
    VariableDefinition(VariableDefinitionId),
    FragmentDefinition(FragmentDefinitionId),
    Field(FieldId),
    FragmentSpread(FragmentSpreadId),
    InlineFragment(InlineFragmentId),
    SelectionSet(SelectionSetId),
    Argument(ArgumentId),
    ArgumentSet(ArgumentSetId),
    Directive(DirectiveId),
    DirectiveSet(DirectiveSetId),
}

impl Document {
    /// The node's name, if its kind carries one. For inline fragments this
    /// is the type condition; for operations the empty span means the
    /// anonymous operation.
    pub fn node_name(&self, node: NodeRef) -> Option<ByteSpan> {
        match node {
            NodeRef::SchemaDefinition(_) => None,
            NodeRef::ScalarTypeDefinition(id) => Some(self.scalar_type_definition(id).name),
            NodeRef::ObjectTypeDefinition(id) => Some(self.object_type_definition(id).name),
            NodeRef::InterfaceTypeDefinition(id) => Some(self.interface_type_definition(id).name),
            NodeRef::UnionTypeDefinition(id) => Some(self.union_type_definition(id).name),
            NodeRef::EnumTypeDefinition(id) => Some(self.enum_type_definition(id).name),
            NodeRef::EnumValueDefinition(id) => Some(self.enum_value_definition(id).name),
            NodeRef::InputObjectTypeDefinition(id) => {
                Some(self.input_object_type_definition(id).name)
            }
            NodeRef::DirectiveDefinition(id) => Some(self.directive_definition(id).name),
            NodeRef::FieldDefinition(id) => Some(self.field_definition(id).name),
            NodeRef::InputValueDefinition(id) => Some(self.input_value_definition(id).name),
            NodeRef::OperationDefinition(id) => Some(self.operation_definition(id).name),
            NodeRef::VariableDefinition(id) => Some(self.variable_definition(id).name),
            NodeRef::FragmentDefinition(id) => Some(self.fragment_definition(id).name),
            NodeRef::Field(id) => Some(self.field(id).name),
            NodeRef::FragmentSpread(id) => Some(self.fragment_spread(id).name),
            NodeRef::InlineFragment(id) => {
                let condition = self.inline_fragment(id).type_condition;
                if condition.is_empty() {
                    None
                } else {
                    Some(condition)
                }
            }
            NodeRef::SelectionSet(_) => None,
            NodeRef::Argument(id) => Some(self.argument(id).name),
            NodeRef::ArgumentSet(_) => None,
            NodeRef::Directive(id) => Some(self.directive(id).name),
            NodeRef::DirectiveSet(_) => None,
        }
    }

    /// The field alias, for field nodes that have one.
    pub fn node_alias(&self, node: NodeRef) -> Option<ByteSpan> {
        match node {
            NodeRef::Field(id) => {
                let alias = self.field(id).alias;
                if alias.is_empty() {
                    None
                } else {
                    Some(alias)
                }
            }
            _ => None,
        }
    }

    pub fn node_description(&self, node: NodeRef) -> Option<ByteSpan> {
        let description = match node {
            NodeRef::SchemaDefinition(id) => self.schema_definition(id).description,
            NodeRef::ScalarTypeDefinition(id) => self.scalar_type_definition(id).description,
            NodeRef::ObjectTypeDefinition(id) => self.object_type_definition(id).description,
            NodeRef::InterfaceTypeDefinition(id) => {
                self.interface_type_definition(id).description
            }
            NodeRef::UnionTypeDefinition(id) => self.union_type_definition(id).description,
            NodeRef::EnumTypeDefinition(id) => self.enum_type_definition(id).description,
            NodeRef::EnumValueDefinition(id) => self.enum_value_definition(id).description,
            NodeRef::InputObjectTypeDefinition(id) => {
                self.input_object_type_definition(id).description
            }
            NodeRef::DirectiveDefinition(id) => self.directive_definition(id).description,
            NodeRef::FieldDefinition(id) => self.field_definition(id).description,
            NodeRef::InputValueDefinition(id) => self.input_value_definition(id).description,
            _ => return None,
        };
        if description.is_empty() {
            None
        } else {
            Some(description)
        }
    }

    pub fn node_position(&self, node: NodeRef) -> Option<Position> {
        match node {
            NodeRef::SchemaDefinition(id) => Some(self.schema_definition(id).position),
            NodeRef::ScalarTypeDefinition(id) => Some(self.scalar_type_definition(id).position),
            NodeRef::ObjectTypeDefinition(id) => Some(self.object_type_definition(id).position),
            NodeRef::InterfaceTypeDefinition(id) => {
                Some(self.interface_type_definition(id).position)
            }
            NodeRef::UnionTypeDefinition(id) => Some(self.union_type_definition(id).position),
            NodeRef::EnumTypeDefinition(id) => Some(self.enum_type_definition(id).position),
            NodeRef::EnumValueDefinition(id) => Some(self.enum_value_definition(id).position),
            NodeRef::InputObjectTypeDefinition(id) => {
                Some(self.input_object_type_definition(id).position)
            }
            NodeRef::DirectiveDefinition(id) => Some(self.directive_definition(id).position),
            NodeRef::FieldDefinition(id) => Some(self.field_definition(id).position),
            NodeRef::InputValueDefinition(id) => Some(self.input_value_definition(id).position),
            NodeRef::OperationDefinition(id) => Some(self.operation_definition(id).position),
            NodeRef::VariableDefinition(id) => Some(self.variable_definition(id).position),
            NodeRef::FragmentDefinition(id) => Some(self.fragment_definition(id).position),
            NodeRef::Field(id) => Some(self.field(id).position),
            NodeRef::FragmentSpread(id) => Some(self.fragment_spread(id).position),
            NodeRef::InlineFragment(id) => Some(self.inline_fragment(id).position),
            NodeRef::SelectionSet(id) => Some(self.selection_set(id).position),
            NodeRef::Argument(id) => Some(self.argument(id).position),
            NodeRef::ArgumentSet(_) => None,
            NodeRef::Directive(id) => Some(self.directive(id).position),
            NodeRef::DirectiveSet(_) => None,
        }
    }

    pub fn node_directives(&self, node: NodeRef) -> Option<DirectiveSetId> {
        match node {
            NodeRef::SchemaDefinition(id) => self.schema_definition(id).directives,
            NodeRef::ScalarTypeDefinition(id) => self.scalar_type_definition(id).directives,
            NodeRef::ObjectTypeDefinition(id) => self.object_type_definition(id).directives,
            NodeRef::InterfaceTypeDefinition(id) => self.interface_type_definition(id).directives,
            NodeRef::UnionTypeDefinition(id) => self.union_type_definition(id).directives,
            NodeRef::EnumTypeDefinition(id) => self.enum_type_definition(id).directives,
            NodeRef::EnumValueDefinition(id) => self.enum_value_definition(id).directives,
            NodeRef::InputObjectTypeDefinition(id) => {
                self.input_object_type_definition(id).directives
            }
            NodeRef::FieldDefinition(id) => self.field_definition(id).directives,
            NodeRef::InputValueDefinition(id) => self.input_value_definition(id).directives,
            NodeRef::OperationDefinition(id) => self.operation_definition(id).directives,
            NodeRef::VariableDefinition(id) => self.variable_definition(id).directives,
            NodeRef::FragmentDefinition(id) => self.fragment_definition(id).directives,
            NodeRef::Field(id) => self.field(id).directives,
            NodeRef::FragmentSpread(id) => self.fragment_spread(id).directives,
            NodeRef::InlineFragment(id) => self.inline_fragment(id).directives,
            _ => None,
        }
    }

    pub fn node_arguments(&self, node: NodeRef) -> Option<ArgumentSetId> {
        match node {
            NodeRef::Field(id) => self.field(id).arguments,
            NodeRef::Directive(id) => self.directive(id).arguments,
            NodeRef::ArgumentSet(id) => Some(id),
            _ => None,
        }
    }

    pub fn node_selection_set(&self, node: NodeRef) -> Option<SelectionSetId> {
        match node {
            NodeRef::OperationDefinition(id) => Some(self.operation_definition(id).selection_set),
            NodeRef::FragmentDefinition(id) => Some(self.fragment_definition(id).selection_set),
            NodeRef::Field(id) => self.field(id).selection_set,
            NodeRef::InlineFragment(id) => Some(self.inline_fragment(id).selection_set),
            NodeRef::SelectionSet(id) => Some(id),
            _ => None,
        }
    }

    /// The declared type reference of typed nodes: field definitions, input
    /// value definitions and variable definitions.
    pub fn node_type(&self, node: NodeRef) -> Option<TypeId> {
        match node {
            NodeRef::FieldDefinition(id) => Some(self.field_definition(id).ty),
            NodeRef::InputValueDefinition(id) => Some(self.input_value_definition(id).ty),
            NodeRef::VariableDefinition(id) => Some(self.variable_definition(id).ty),
            _ => None,
        }
    }

    /// Whether the definition behind this node originated from an `extend`
    /// keyword. `None` for kinds that cannot be extended.
    pub fn node_is_extend(&self, node: NodeRef) -> Option<bool> {
        match node {
            NodeRef::SchemaDefinition(id) => Some(self.schema_definition(id).is_extend),
            NodeRef::ScalarTypeDefinition(id) => Some(self.scalar_type_definition(id).is_extend),
            NodeRef::ObjectTypeDefinition(id) => Some(self.object_type_definition(id).is_extend),
            NodeRef::InterfaceTypeDefinition(id) => {
                Some(self.interface_type_definition(id).is_extend)
            }
            NodeRef::UnionTypeDefinition(id) => Some(self.union_type_definition(id).is_extend),
            NodeRef::EnumTypeDefinition(id) => Some(self.enum_type_definition(id).is_extend),
            NodeRef::InputObjectTypeDefinition(id) => {
                Some(self.input_object_type_definition(id).is_extend)
            }
            NodeRef::DirectiveDefinition(id) => Some(self.directive_definition(id).is_extend),
            _ => None,
        }
    }
}
