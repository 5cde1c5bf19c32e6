//! Read-side queries over a parsed [`Document`]: by-name definition
//! lookups, schema root-type resolution, and the depth-first [`Walker`]
//! with its derived queries (field paths, selection-set typing, operation
//! membership).

mod walker;

pub use walker::{Visitor, WalkNodeId, WalkedNode, Walker, WalkerStatus};

use crate::ast::{
    Document, FieldDefinition, FragmentDefinitionId, InterfaceTypeDefinitionId,
    ObjectTypeDefinitionId, OperationType, UnionTypeDefinitionId,
};
use crate::span::ByteSpan;
use crate::LookupError;

/// Name-driven lookups over one document.
///
/// Because extension merging is deferred to consumers, every by-name query
/// here scans all definitions carrying the name, base and `extend` records
/// alike: a field added by `extend type Query` is found exactly like one on
/// the base type.
pub struct Lookup<'a> {
    doc: &'a Document,
}

impl<'a> Lookup<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn fragment_definition_by_name(&self, name: &[u8]) -> Option<FragmentDefinitionId> {
        self.doc
            .executable()
            .fragments
            .iter()
            .copied()
            .find(|&id| self.doc.resolve(self.doc.fragment_definition(id).name) == name)
    }

    pub fn object_type_by_name(&self, name: &[u8]) -> Option<ObjectTypeDefinitionId> {
        self.doc
            .type_system()
            .objects
            .iter()
            .copied()
            .find(|&id| self.doc.resolve(self.doc.object_type_definition(id).name) == name)
    }

    pub fn interface_type_by_name(&self, name: &[u8]) -> Option<InterfaceTypeDefinitionId> {
        self.doc
            .type_system()
            .interfaces
            .iter()
            .copied()
            .find(|&id| self.doc.resolve(self.doc.interface_type_definition(id).name) == name)
    }

    pub fn union_type_by_name(&self, name: &[u8]) -> Option<UnionTypeDefinitionId> {
        self.doc
            .type_system()
            .unions
            .iter()
            .copied()
            .find(|&id| self.doc.resolve(self.doc.union_type_definition(id).name) == name)
    }

    /// Find a field definition by type and field name, searching every
    /// object and interface definition (and extension) carrying the type
    /// name.
    pub fn field_definition_in_type(
        &self,
        type_name: &[u8],
        field_name: &[u8],
    ) -> Option<&'a FieldDefinition> {
        for &id in &self.doc.type_system().objects {
            let object = self.doc.object_type_definition(id);
            if self.doc.resolve(object.name) != type_name {
                continue;
            }
            if let Some((_, field)) = self
                .doc
                .field_definitions(object.fields)
                .find(|(_, field)| self.doc.resolve(field.name) == field_name)
            {
                return Some(field);
            }
        }
        for &id in &self.doc.type_system().interfaces {
            let interface = self.doc.interface_type_definition(id);
            if self.doc.resolve(interface.name) != type_name {
                continue;
            }
            if let Some((_, field)) = self
                .doc
                .field_definitions(interface.fields)
                .find(|(_, field)| self.doc.resolve(field.name) == field_name)
            {
                return Some(field);
            }
        }
        None
    }

    /// Whether any object definition named `type_name` declares
    /// `implements interface_name`.
    pub fn type_implements_interface(&self, type_name: &[u8], interface_name: &[u8]) -> bool {
        self.doc.type_system().objects.iter().any(|&id| {
            let object = self.doc.object_type_definition(id);
            self.doc.resolve(object.name) == type_name
                && object
                    .implements
                    .iter()
                    .any(|&implemented| self.doc.resolve(implemented) == interface_name)
        })
    }

    /// Whether any union definition named `union_name` lists `type_name` as
    /// a member.
    pub fn union_has_member(&self, union_name: &[u8], type_name: &[u8]) -> bool {
        self.doc.type_system().unions.iter().any(|&id| {
            let union = self.doc.union_type_definition(id);
            self.doc.resolve(union.name) == union_name
                && union
                    .members
                    .iter()
                    .any(|&member| self.doc.resolve(member) == type_name)
        })
    }

    /// The name of the root type serving `operation_type`: the schema
    /// definition's declaration when present, else the conventional
    /// `Query`/`Mutation`/`Subscription` type.
    pub fn root_operation_type_name(
        &self,
        operation_type: OperationType,
    ) -> Result<ByteSpan, LookupError> {
        for &id in &self.doc.type_system().schemas {
            let schema = self.doc.schema_definition(id);
            let declared = match operation_type {
                OperationType::Query => schema.query,
                OperationType::Mutation => schema.mutation,
                OperationType::Subscription => schema.subscription,
            };
            if !declared.is_empty() {
                return Ok(declared);
            }
        }

        let conventional = match operation_type {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        };
        self.object_type_by_name(conventional.as_bytes())
            .map(|id| self.doc.object_type_definition(id).name)
            .ok_or(LookupError::MissingRootType {
                operation: conventional,
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse_type_system;

    #[test]
    fn by_name_lookups_see_extensions() {
        let mut doc = parse_type_system("type Query { dog: Dog }").unwrap();
        doc.extend_type_system("extend type Query { cat: Cat }").unwrap();

        let lookup = Lookup::new(&doc);
        assert!(lookup
            .field_definition_in_type(b"Query", b"dog")
            .is_some());
        assert!(lookup
            .field_definition_in_type(b"Query", b"cat")
            .is_some());
        assert!(lookup
            .field_definition_in_type(b"Query", b"fish")
            .is_none());
    }

    #[test]
    fn root_type_prefers_the_schema_definition() {
        let doc =
            parse_type_system("schema { query: QueryRoot } type QueryRoot { a: Int }").unwrap();
        let lookup = Lookup::new(&doc);
        let root = lookup
            .root_operation_type_name(OperationType::Query)
            .unwrap();
        assert!(doc.span_is(root, "QueryRoot"));
    }

    #[test]
    fn root_type_falls_back_to_conventional_names() {
        let doc = parse_type_system("type Query { a: Int }").unwrap();
        let lookup = Lookup::new(&doc);
        let root = lookup
            .root_operation_type_name(OperationType::Query)
            .unwrap();
        assert!(doc.span_is(root, "Query"));

        assert_eq!(
            lookup.root_operation_type_name(OperationType::Mutation),
            Err(LookupError::MissingRootType {
                operation: "Mutation"
            })
        );
    }
}
