//! The flat AST store.
//!
//! Every parsed entity lives in a typed, append-only pool owned by a
//! [`Document`]; records reference each other through small integer
//! [`Id`]s instead of pointers. Names and literals are kept as
//! [`ByteSpan`]s into the document's input buffer and resolved on demand,
//! so parsing never copies input text.
//!
//! Pools only grow. "Removing" a field from a selection set rewrites that
//! set's selection list; the field record itself stays put and every
//! previously handed-out id keeps resolving to the record it was created
//! for.

mod executable;
mod iter;
mod mutation;
mod node;
mod pool;
mod ty;
mod type_system;
mod value;

pub use executable::{
    ExecutableDefinition, Field, FieldId, FragmentDefinition, FragmentDefinitionId,
    FragmentSpread, FragmentSpreadId, InlineFragment, InlineFragmentId, OperationDefinition,
    OperationDefinitionId, OperationType, Selection, SelectionSet, SelectionSetId,
    VariableDefinition, VariableDefinitionId,
};
pub use iter::{FieldDefinitions, InputValueDefinitions};
pub use node::NodeRef;
pub use pool::Id;
pub use ty::{Type, TypeId, TypeKind};
pub use type_system::{
    DirectiveDefinition, DirectiveDefinitionId, DirectiveLocation, EnumTypeDefinition,
    EnumTypeDefinitionId, EnumValueDefinition, EnumValueDefinitionId, FieldDefinition,
    FieldDefinitionId, InputObjectTypeDefinition, InputObjectTypeDefinitionId,
    InputValueDefinition, InputValueDefinitionId, InterfaceTypeDefinition,
    InterfaceTypeDefinitionId, ObjectTypeDefinition, ObjectTypeDefinitionId,
    ScalarTypeDefinition, ScalarTypeDefinitionId, SchemaDefinition, SchemaDefinitionId,
    TypeSystemDefinition, UnionTypeDefinition, UnionTypeDefinitionId,
};
pub use value::{
    Argument, ArgumentId, ArgumentSet, ArgumentSetId, Directive, DirectiveId, DirectiveSet,
    DirectiveSetId, FloatValueId, IntValueId, ObjectField, ObjectFieldId, Value, ValueId,
    ValueKind,
};

use crate::span::ByteSpan;
use pool::Pool;

use std::borrow::Cow;

/// Generates the read accessor and the pool-append method for one entity
/// pool.
macro_rules! pool_methods {
    ($pool:ident, $get:ident, $add:ident, $ty:ty, $id:ty) => {
        pub fn $get(&self, id: $id) -> &$ty {
            self.$pool.get(id)
        }

        pub(crate) fn $add(&mut self, record: $ty) -> $id {
            self.$pool.alloc(record)
        }
    };
}

/// A parsed GraphQL document: the input buffer plus one pool per entity
/// kind.
///
/// A document is created by [`parse_type_system`] and grown in place by
/// [`Document::parse_executable`] and [`Document::extend_type_system`].
/// It is single-threaded by contract: a document is never shared between
/// threads while being mutated, though independent documents may be used
/// concurrently.
///
/// Accessors index straight into the pools. Ids are only ever handed out by
/// the document that owns the record, so a dangling or foreign id is a
/// programmer error; resolving one panics rather than returning garbage.
///
/// [`parse_type_system`]: crate::parse_type_system
#[derive(Debug, Clone, Default)]
pub struct Document {
    input: String,

    types: Pool<Type>,
    values: Pool<Value>,
    ints: Pool<i64>,
    floats: Pool<f64>,
    object_fields: Pool<ObjectField>,
    arguments: Pool<Argument>,
    argument_sets: Pool<ArgumentSet>,
    directive_pool: Pool<Directive>,
    directive_sets: Pool<DirectiveSet>,
    fields: Pool<Field>,
    selection_sets: Pool<SelectionSet>,
    fragment_spreads: Pool<FragmentSpread>,
    inline_fragments: Pool<InlineFragment>,
    operation_definitions: Pool<OperationDefinition>,
    variable_definitions: Pool<VariableDefinition>,
    fragment_definitions: Pool<FragmentDefinition>,
    schema_definitions: Pool<SchemaDefinition>,
    scalar_type_definitions: Pool<ScalarTypeDefinition>,
    object_type_definitions: Pool<ObjectTypeDefinition>,
    interface_type_definitions: Pool<InterfaceTypeDefinition>,
    union_type_definitions: Pool<UnionTypeDefinition>,
    enum_type_definitions: Pool<EnumTypeDefinition>,
    enum_value_definitions: Pool<EnumValueDefinition>,
    input_object_type_definitions: Pool<InputObjectTypeDefinition>,
    directive_definitions: Pool<DirectiveDefinition>,
    field_definition_pool: Pool<FieldDefinition>,
    input_value_definition_pool: Pool<InputValueDefinition>,

    pub(crate) type_system: TypeSystemDefinition,
    pub(crate) executable: ExecutableDefinition,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw input buffer. Grows monotonically: each parse call and each
    /// [`put_literal`] appends, nothing ever truncates it, so spans stay
    /// valid for the life of the document.
    ///
    /// [`put_literal`]: Document::put_literal
    pub fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn append_input(&mut self, text: &str) -> usize {
        let base = self.input.len();
        self.input.push_str(text);
        base
    }

    /// Resolve a span back to the exact source bytes it was lexed from.
    pub fn resolve(&self, span: ByteSpan) -> &[u8] {
        &self.input.as_bytes()[span.start as usize..span.end as usize]
    }

    pub fn resolve_str(&self, span: ByteSpan) -> &str {
        &self.input[span.start as usize..span.end as usize]
    }

    /// Byte-wise name equality of two spans.
    pub fn span_eq(&self, a: ByteSpan, b: ByteSpan) -> bool {
        a == b || self.resolve(a) == self.resolve(b)
    }

    /// Whether a span resolves to exactly `text`.
    pub fn span_is(&self, span: ByteSpan, text: &str) -> bool {
        self.resolve(span) == text.as_bytes()
    }

    /// All type-system definitions parsed into this document.
    pub fn type_system(&self) -> &TypeSystemDefinition {
        &self.type_system
    }

    /// All executable definitions parsed into this document.
    pub fn executable(&self) -> &ExecutableDefinition {
        &self.executable
    }

    pool_methods!(types, ty, add_type, Type, TypeId);
    pool_methods!(values, value, add_value, Value, ValueId);
    pool_methods!(object_fields, object_field, add_object_field, ObjectField, ObjectFieldId);
    pool_methods!(arguments, argument, add_argument, Argument, ArgumentId);
    pool_methods!(argument_sets, argument_set, add_argument_set, ArgumentSet, ArgumentSetId);
    pool_methods!(directive_pool, directive, add_directive, Directive, DirectiveId);
    pool_methods!(directive_sets, directive_set, add_directive_set, DirectiveSet, DirectiveSetId);
    pool_methods!(fields, field, add_field, Field, FieldId);
    pool_methods!(selection_sets, selection_set, add_selection_set, SelectionSet, SelectionSetId);
    pool_methods!(
        fragment_spreads,
        fragment_spread,
        add_fragment_spread,
        FragmentSpread,
        FragmentSpreadId
    );
    pool_methods!(
        inline_fragments,
        inline_fragment,
        add_inline_fragment,
        InlineFragment,
        InlineFragmentId
    );
    pool_methods!(
        operation_definitions,
        operation_definition,
        add_operation_definition,
        OperationDefinition,
        OperationDefinitionId
    );
    pool_methods!(
        variable_definitions,
        variable_definition,
        add_variable_definition,
        VariableDefinition,
        VariableDefinitionId
    );
    pool_methods!(
        fragment_definitions,
        fragment_definition,
        add_fragment_definition,
        FragmentDefinition,
        FragmentDefinitionId
    );
    pool_methods!(
        schema_definitions,
        schema_definition,
        add_schema_definition,
        SchemaDefinition,
        SchemaDefinitionId
    );
    pool_methods!(
        scalar_type_definitions,
        scalar_type_definition,
        add_scalar_type_definition,
        ScalarTypeDefinition,
        ScalarTypeDefinitionId
    );
    pool_methods!(
        object_type_definitions,
        object_type_definition,
        add_object_type_definition,
        ObjectTypeDefinition,
        ObjectTypeDefinitionId
    );
    pool_methods!(
        interface_type_definitions,
        interface_type_definition,
        add_interface_type_definition,
        InterfaceTypeDefinition,
        InterfaceTypeDefinitionId
    );
    pool_methods!(
        union_type_definitions,
        union_type_definition,
        add_union_type_definition,
        UnionTypeDefinition,
        UnionTypeDefinitionId
    );
    pool_methods!(
        enum_type_definitions,
        enum_type_definition,
        add_enum_type_definition,
        EnumTypeDefinition,
        EnumTypeDefinitionId
    );
    pool_methods!(
        enum_value_definitions,
        enum_value_definition,
        add_enum_value_definition,
        EnumValueDefinition,
        EnumValueDefinitionId
    );
    pool_methods!(
        input_object_type_definitions,
        input_object_type_definition,
        add_input_object_type_definition,
        InputObjectTypeDefinition,
        InputObjectTypeDefinitionId
    );
    pool_methods!(
        directive_definitions,
        directive_definition,
        add_directive_definition,
        DirectiveDefinition,
        DirectiveDefinitionId
    );
    pool_methods!(
        field_definition_pool,
        field_definition,
        add_field_definition,
        FieldDefinition,
        FieldDefinitionId
    );
    pool_methods!(
        input_value_definition_pool,
        input_value_definition,
        add_input_value_definition,
        InputValueDefinition,
        InputValueDefinitionId
    );

    /// The decoded integer behind a [`ValueKind::Int`].
    pub fn int_value(&self, id: IntValueId) -> i64 {
        *self.ints.get(id)
    }

    /// The decoded float behind a [`ValueKind::Float`].
    pub fn float_value(&self, id: FloatValueId) -> f64 {
        *self.floats.get(id)
    }

    pub(crate) fn add_int(&mut self, value: i64) -> IntValueId {
        self.ints.alloc(value)
    }

    pub(crate) fn add_float(&mut self, value: f64) -> FloatValueId {
        self.floats.alloc(value)
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> &mut Field {
        self.fields.get_mut(id)
    }

    pub(crate) fn selection_set_mut(&mut self, id: SelectionSetId) -> &mut SelectionSet {
        self.selection_sets.get_mut(id)
    }

    pub(crate) fn argument_set_mut(&mut self, id: ArgumentSetId) -> &mut ArgumentSet {
        self.argument_sets.get_mut(id)
    }

    pub(crate) fn field_definition_mut(&mut self, id: FieldDefinitionId) -> &mut FieldDefinition {
        self.field_definition_pool.get_mut(id)
    }

    pub(crate) fn input_value_definition_mut(
        &mut self,
        id: InputValueDefinitionId,
    ) -> &mut InputValueDefinition {
        self.input_value_definition_pool.get_mut(id)
    }

    /// Flat iterator over every field selection in the document, for rule
    /// engines that don't need tree context.
    pub fn fields_iter(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.fields.iter()
    }

    pub fn arguments_iter(&self) -> impl Iterator<Item = (ArgumentId, &Argument)> {
        self.arguments.iter()
    }

    pub fn argument_sets_iter(&self) -> impl Iterator<Item = (ArgumentSetId, &ArgumentSet)> {
        self.argument_sets.iter()
    }

    pub fn directives_iter(&self) -> impl Iterator<Item = (DirectiveId, &Directive)> {
        self.directive_pool.iter()
    }

    pub fn directive_sets_iter(&self) -> impl Iterator<Item = (DirectiveSetId, &DirectiveSet)> {
        self.directive_sets.iter()
    }

    pub fn operation_definitions_iter(
        &self,
    ) -> impl Iterator<Item = (OperationDefinitionId, &OperationDefinition)> {
        self.operation_definitions.iter()
    }

    pub fn fragment_definitions_iter(
        &self,
    ) -> impl Iterator<Item = (FragmentDefinitionId, &FragmentDefinition)> {
        self.fragment_definitions.iter()
    }

    /// Follow `List`/`NonNull` wrappers down to the named type.
    pub fn unwrapped_named_type(&self, mut id: TypeId) -> ByteSpan {
        loop {
            match self.ty(id).kind {
                TypeKind::Named(name) => return name,
                TypeKind::List(inner) | TypeKind::NonNull(inner) => id = inner,
            }
        }
    }

    /// Decode a string literal's content span: escape sequences for ordinary
    /// strings, common-indent stripping for block strings. Borrows when no
    /// rewriting is needed.
    pub fn decode_string(&self, content: ByteSpan, block: bool) -> Cow<'_, str> {
        let raw = self.resolve_str(content);
        if block {
            decode_block_string(raw)
        } else {
            decode_escapes(raw)
        }
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            input: self.input.len(),
            types: self.types.len(),
            values: self.values.len(),
            ints: self.ints.len(),
            floats: self.floats.len(),
            object_fields: self.object_fields.len(),
            arguments: self.arguments.len(),
            argument_sets: self.argument_sets.len(),
            directive_pool: self.directive_pool.len(),
            directive_sets: self.directive_sets.len(),
            fields: self.fields.len(),
            selection_sets: self.selection_sets.len(),
            fragment_spreads: self.fragment_spreads.len(),
            inline_fragments: self.inline_fragments.len(),
            operation_definitions: self.operation_definitions.len(),
            variable_definitions: self.variable_definitions.len(),
            fragment_definitions: self.fragment_definitions.len(),
            schema_definitions: self.schema_definitions.len(),
            scalar_type_definitions: self.scalar_type_definitions.len(),
            object_type_definitions: self.object_type_definitions.len(),
            interface_type_definitions: self.interface_type_definitions.len(),
            union_type_definitions: self.union_type_definitions.len(),
            enum_type_definitions: self.enum_type_definitions.len(),
            enum_value_definitions: self.enum_value_definitions.len(),
            input_object_type_definitions: self.input_object_type_definitions.len(),
            directive_definitions: self.directive_definitions.len(),
            field_definition_pool: self.field_definition_pool.len(),
            input_value_definition_pool: self.input_value_definition_pool.len(),
            ts_schemas: self.type_system.schemas.len(),
            ts_scalars: self.type_system.scalars.len(),
            ts_objects: self.type_system.objects.len(),
            ts_interfaces: self.type_system.interfaces.len(),
            ts_unions: self.type_system.unions.len(),
            ts_enums: self.type_system.enums.len(),
            ts_input_objects: self.type_system.input_objects.len(),
            ts_directives: self.type_system.directives.len(),
            exec_operations: self.executable.operations.len(),
            exec_fragments: self.executable.fragments.len(),
        }
    }

    /// Roll the document back to a snapshot taken before a failed parse.
    /// Pools only grow between a snapshot and a restore, so truncating each
    /// one is a complete undo.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        self.input.truncate(snapshot.input);
        self.types.truncate(snapshot.types);
        self.values.truncate(snapshot.values);
        self.ints.truncate(snapshot.ints);
        self.floats.truncate(snapshot.floats);
        self.object_fields.truncate(snapshot.object_fields);
        self.arguments.truncate(snapshot.arguments);
        self.argument_sets.truncate(snapshot.argument_sets);
        self.directive_pool.truncate(snapshot.directive_pool);
        self.directive_sets.truncate(snapshot.directive_sets);
        self.fields.truncate(snapshot.fields);
        self.selection_sets.truncate(snapshot.selection_sets);
        self.fragment_spreads.truncate(snapshot.fragment_spreads);
        self.inline_fragments.truncate(snapshot.inline_fragments);
        self.operation_definitions
            .truncate(snapshot.operation_definitions);
        self.variable_definitions
            .truncate(snapshot.variable_definitions);
        self.fragment_definitions
            .truncate(snapshot.fragment_definitions);
        self.schema_definitions.truncate(snapshot.schema_definitions);
        self.scalar_type_definitions
            .truncate(snapshot.scalar_type_definitions);
        self.object_type_definitions
            .truncate(snapshot.object_type_definitions);
        self.interface_type_definitions
            .truncate(snapshot.interface_type_definitions);
        self.union_type_definitions
            .truncate(snapshot.union_type_definitions);
        self.enum_type_definitions
            .truncate(snapshot.enum_type_definitions);
        self.enum_value_definitions
            .truncate(snapshot.enum_value_definitions);
        self.input_object_type_definitions
            .truncate(snapshot.input_object_type_definitions);
        self.directive_definitions
            .truncate(snapshot.directive_definitions);
        self.field_definition_pool
            .truncate(snapshot.field_definition_pool);
        self.input_value_definition_pool
            .truncate(snapshot.input_value_definition_pool);
        self.type_system.schemas.truncate(snapshot.ts_schemas);
        self.type_system.scalars.truncate(snapshot.ts_scalars);
        self.type_system.objects.truncate(snapshot.ts_objects);
        self.type_system.interfaces.truncate(snapshot.ts_interfaces);
        self.type_system.unions.truncate(snapshot.ts_unions);
        self.type_system.enums.truncate(snapshot.ts_enums);
        self.type_system
            .input_objects
            .truncate(snapshot.ts_input_objects);
        self.type_system.directives.truncate(snapshot.ts_directives);
        self.executable.operations.truncate(snapshot.exec_operations);
        self.executable.fragments.truncate(snapshot.exec_fragments);
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Snapshot {
    input: usize,
    types: usize,
    values: usize,
    ints: usize,
    floats: usize,
    object_fields: usize,
    arguments: usize,
    argument_sets: usize,
    directive_pool: usize,
    directive_sets: usize,
    fields: usize,
    selection_sets: usize,
    fragment_spreads: usize,
    inline_fragments: usize,
    operation_definitions: usize,
    variable_definitions: usize,
    fragment_definitions: usize,
    schema_definitions: usize,
    scalar_type_definitions: usize,
    object_type_definitions: usize,
    interface_type_definitions: usize,
    union_type_definitions: usize,
    enum_type_definitions: usize,
    enum_value_definitions: usize,
    input_object_type_definitions: usize,
    directive_definitions: usize,
    field_definition_pool: usize,
    input_value_definition_pool: usize,
    ts_schemas: usize,
    ts_scalars: usize,
    ts_objects: usize,
    ts_interfaces: usize,
    ts_unions: usize,
    ts_enums: usize,
    ts_input_objects: usize,
    ts_directives: usize,
    exec_operations: usize,
    exec_fragments: usize,
}

fn decode_escapes(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    // the lexer validated four hex digits follow
                    let digit = chars.next().and_then(|d| d.to_digit(16)).unwrap_or(0);
                    code = code * 16 + digit;
                }
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// GraphQL block-string value semantics: strip the common indentation of all
/// lines after the first, then drop leading and trailing blank lines.
fn decode_block_string(raw: &str) -> Cow<'_, str> {
    let lines: Vec<&str> = raw.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect();

    let mut common_indent: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if trimmed.is_empty() {
            continue;
        }
        let indent = line.len() - trimmed.len();
        common_indent = Some(match common_indent {
            Some(current) => current.min(indent),
            None => indent,
        });
    }

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                *line
            } else {
                let indent = common_indent.unwrap_or(0).min(line.len());
                &line[indent..]
            }
        })
        .collect();

    while stripped.first().is_some_and(|l| l.trim().is_empty()) {
        stripped.remove(0);
    }
    while stripped.last().is_some_and(|l| l.trim().is_empty()) {
        stripped.pop();
    }

    let decoded = stripped.join("\n");
    if decoded == raw {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(decoded)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn block_string_common_indent_stripping() {
        let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
        assert_eq!(
            decode_block_string(raw),
            "Hello,\n  World!\n\nYours,\n  GraphQL."
        );
    }

    #[test]
    fn block_string_first_line_keeps_indent() {
        assert_eq!(decode_block_string("  abc\n    def"), "  abc\ndef");
    }

    #[test]
    fn escape_decoding() {
        assert_eq!(decode_escapes(r#"a\nb"#), "a\nb");
        assert_eq!(decode_escapes(r#"A\t\"x\""#), "A\t\"x\"");
        assert_eq!(decode_escapes("plain"), Cow::Borrowed("plain"));
    }
}
