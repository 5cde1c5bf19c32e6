//! Re-emits a parsed document as canonical GraphQL text.
//!
//! The printer reads raw spans back out of the input buffer, so values and
//! names round-trip byte-for-byte; only insignificant whitespace, commas and
//! comments are normalized away.

use crate::ast::{
    ArgumentSetId, DirectiveSetId, Document, Field, FieldDefinitionId, InputValueDefinitionId,
    OperationType, Selection, SelectionSetId, TypeId, TypeKind, ValueId, ValueKind,
};
use crate::span::ByteSpan;

/// Print every definition in the document: type system first, then
/// executable.
pub fn print(doc: &Document) -> String {
    let mut out = print_type_system(doc);
    let executable = print_executable(doc);
    if !out.is_empty() && !executable.is_empty() {
        out.push('\n');
    }
    out.push_str(&executable);
    out
}

/// Print the document's type-system definitions.
pub fn print_type_system(doc: &Document) -> String {
    let mut p = Printer::new(doc);
    p.type_system();
    p.finish()
}

/// Print the document's operations and fragment definitions.
pub fn print_executable(doc: &Document) -> String {
    let mut p = Printer::new(doc);
    p.executable();
    p.finish()
}

struct Printer<'a> {
    doc: &'a Document,
    out: String,
    indent: usize,
}

impl<'a> Printer<'a> {
    fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            out: String::new(),
            indent: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_span(&mut self, span: ByteSpan) {
        let text = self.doc.resolve_str(span);
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
    }

    fn definition_gap(&mut self) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn type_system(&mut self) {
        let doc = self.doc;
        let type_system = doc.type_system();

        for &id in &type_system.schemas {
            let schema = doc.schema_definition(id);
            self.definition_gap();
            self.description(schema.description);
            self.extend(schema.is_extend);
            self.write("schema");
            self.directive_set(schema.directives);
            self.write(" {");
            self.indent += 1;
            for (keyword, name) in [
                ("query", schema.query),
                ("mutation", schema.mutation),
                ("subscription", schema.subscription),
            ] {
                if !name.is_empty() {
                    self.newline();
                    self.write(keyword);
                    self.write(": ");
                    self.write_span(name);
                }
            }
            self.indent -= 1;
            self.newline();
            self.write("}\n");
        }

        for &id in &type_system.scalars {
            let scalar = doc.scalar_type_definition(id);
            self.definition_gap();
            self.description(scalar.description);
            self.extend(scalar.is_extend);
            self.write("scalar ");
            self.write_span(scalar.name);
            self.directive_set(scalar.directives);
            self.write("\n");
        }

        for &id in &type_system.objects {
            let object = doc.object_type_definition(id);
            self.definition_gap();
            self.description(object.description);
            self.extend(object.is_extend);
            self.write("type ");
            self.write_span(object.name);
            if !object.implements.is_empty() {
                self.write(" implements ");
                for (index, &interface) in object.implements.iter().enumerate() {
                    if index > 0 {
                        self.write(" & ");
                    }
                    self.write_span(interface);
                }
            }
            self.directive_set(object.directives);
            self.fields_definition(object.fields);
            self.write("\n");
        }

        for &id in &type_system.interfaces {
            let interface = doc.interface_type_definition(id);
            self.definition_gap();
            self.description(interface.description);
            self.extend(interface.is_extend);
            self.write("interface ");
            self.write_span(interface.name);
            self.directive_set(interface.directives);
            self.fields_definition(interface.fields);
            self.write("\n");
        }

        for &id in &type_system.unions {
            let union = doc.union_type_definition(id);
            self.definition_gap();
            self.description(union.description);
            self.extend(union.is_extend);
            self.write("union ");
            self.write_span(union.name);
            self.directive_set(union.directives);
            if !union.members.is_empty() {
                self.write(" = ");
                for (index, &member) in union.members.iter().enumerate() {
                    if index > 0 {
                        self.write(" | ");
                    }
                    self.write_span(member);
                }
            }
            self.write("\n");
        }

        for &id in &type_system.enums {
            let definition = doc.enum_type_definition(id);
            self.definition_gap();
            self.description(definition.description);
            self.extend(definition.is_extend);
            self.write("enum ");
            self.write_span(definition.name);
            self.directive_set(definition.directives);
            if !definition.values.is_empty() {
                self.write(" {");
                self.indent += 1;
                for &value in &definition.values {
                    let value = doc.enum_value_definition(value);
                    self.newline();
                    self.description_inline(value.description);
                    self.write_span(value.name);
                    self.directive_set(value.directives);
                }
                self.indent -= 1;
                self.newline();
                self.write("}");
            }
            self.write("\n");
        }

        for &id in &type_system.input_objects {
            let input = doc.input_object_type_definition(id);
            self.definition_gap();
            self.description(input.description);
            self.extend(input.is_extend);
            self.write("input ");
            self.write_span(input.name);
            self.directive_set(input.directives);
            if input.input_fields.is_some() {
                self.write(" {");
                self.indent += 1;
                for (id, _) in doc.input_value_definitions(input.input_fields) {
                    self.newline();
                    self.input_value_definition(id);
                }
                self.indent -= 1;
                self.newline();
                self.write("}");
            }
            self.write("\n");
        }

        for &id in &type_system.directives {
            let definition = doc.directive_definition(id);
            self.definition_gap();
            self.description(definition.description);
            self.extend(definition.is_extend);
            self.write("directive @");
            self.write_span(definition.name);
            self.arguments_definition(definition.arguments);
            self.write(" on ");
            for (index, location) in definition.locations.iter().enumerate() {
                if index > 0 {
                    self.write(" | ");
                }
                self.write(location.name());
            }
            self.write("\n");
        }
    }

    fn executable(&mut self) {
        let doc = self.doc;

        for &id in &doc.executable().operations {
            let operation = doc.operation_definition(id);
            self.definition_gap();

            let shorthand = operation.name.is_empty()
                && operation.operation_type == OperationType::Query
                && operation.variable_definitions.is_empty()
                && operation.directives.is_none();
            if !shorthand {
                match operation.operation_type {
                    OperationType::Query => self.write("query"),
                    OperationType::Mutation => self.write("mutation"),
                    OperationType::Subscription => self.write("subscription"),
                }
                if !operation.name.is_empty() {
                    self.write(" ");
                    self.write_span(operation.name);
                }
                if !operation.variable_definitions.is_empty() {
                    self.write("(");
                    for (index, &id) in operation.variable_definitions.iter().enumerate() {
                        if index > 0 {
                            self.write(", ");
                        }
                        let variable = doc.variable_definition(id);
                        self.write("$");
                        self.write_span(variable.name);
                        self.write(": ");
                        self.ty(variable.ty);
                        if let Some(default) = variable.default_value {
                            self.write(" = ");
                            self.value(default);
                        }
                        self.directive_set(variable.directives);
                    }
                    self.write(")");
                }
                self.directive_set(operation.directives);
                self.write(" ");
            }
            self.selection_set(operation.selection_set);
            self.write("\n");
        }

        for &id in &doc.executable().fragments {
            let fragment = doc.fragment_definition(id);
            self.definition_gap();
            self.write("fragment ");
            self.write_span(fragment.name);
            self.write(" on ");
            self.write_span(fragment.type_condition);
            self.directive_set(fragment.directives);
            self.write(" ");
            self.selection_set(fragment.selection_set);
            self.write("\n");
        }
    }

    fn selection_set(&mut self, set: SelectionSetId) {
        let doc = self.doc;
        self.write("{");
        self.indent += 1;
        for &selection in &doc.selection_set(set).selections {
            self.newline();
            match selection {
                Selection::Field(id) => self.field(doc.field(id)),
                Selection::FragmentSpread(id) => {
                    let spread = doc.fragment_spread(id);
                    self.write("...");
                    self.write_span(spread.name);
                    self.directive_set(spread.directives);
                }
                Selection::InlineFragment(id) => {
                    let inline = doc.inline_fragment(id);
                    self.write("...");
                    if !inline.type_condition.is_empty() {
                        self.write(" on ");
                        self.write_span(inline.type_condition);
                    }
                    self.directive_set(inline.directives);
                    self.write(" ");
                    self.selection_set(inline.selection_set);
                }
            }
        }
        self.indent -= 1;
        self.newline();
        self.write("}");
    }

    fn field(&mut self, field: &Field) {
        if !field.alias.is_empty() {
            self.write_span(field.alias);
            self.write(": ");
        }
        self.write_span(field.name);
        self.argument_set(field.arguments);
        self.directive_set(field.directives);
        if let Some(set) = field.selection_set {
            self.write(" ");
            self.selection_set(set);
        }
    }

    fn fields_definition(&mut self, head: Option<FieldDefinitionId>) {
        let doc = self.doc;
        if head.is_none() {
            return;
        }
        self.write(" {");
        self.indent += 1;
        for (_, field) in doc.field_definitions(head) {
            self.newline();
            self.description_inline(field.description);
            self.write_span(field.name);
            self.arguments_definition(field.arguments);
            self.write(": ");
            self.ty(field.ty);
            self.directive_set(field.directives);
        }
        self.indent -= 1;
        self.newline();
        self.write("}");
    }

    fn arguments_definition(&mut self, head: Option<InputValueDefinitionId>) {
        let doc = self.doc;
        if head.is_none() {
            return;
        }
        self.write("(");
        for (index, (id, _)) in doc.input_value_definitions(head).enumerate() {
            if index > 0 {
                self.write(", ");
            }
            self.input_value_definition(id);
        }
        self.write(")");
    }

    fn input_value_definition(&mut self, id: InputValueDefinitionId) {
        let definition = self.doc.input_value_definition(id);
        self.description_inline(definition.description);
        self.write_span(definition.name);
        self.write(": ");
        self.ty(definition.ty);
        if let Some(default) = definition.default_value {
            self.write(" = ");
            self.value(default);
        }
        self.directive_set(definition.directives);
    }

    fn description(&mut self, description: ByteSpan) {
        if description.is_empty() {
            return;
        }
        self.write("\"\"\"");
        self.write_span(description);
        self.write("\"\"\"");
        self.newline();
    }

    fn description_inline(&mut self, description: ByteSpan) {
        if description.is_empty() {
            return;
        }
        self.write("\"\"\"");
        self.write_span(description);
        self.write("\"\"\" ");
    }

    fn extend(&mut self, is_extend: bool) {
        if is_extend {
            self.write("extend ");
        }
    }

    fn directive_set(&mut self, set: Option<DirectiveSetId>) {
        let doc = self.doc;
        let Some(set) = set else { return };
        for &id in &doc.directive_set(set).directives {
            let directive = doc.directive(id);
            self.write(" @");
            self.write_span(directive.name);
            self.argument_set(directive.arguments);
        }
    }

    fn argument_set(&mut self, set: Option<ArgumentSetId>) {
        let doc = self.doc;
        let Some(set) = set else { return };
        self.write("(");
        for (index, &id) in doc.argument_set(set).arguments.iter().enumerate() {
            if index > 0 {
                self.write(", ");
            }
            let argument = doc.argument(id);
            self.write_span(argument.name);
            self.write(": ");
            self.value(argument.value);
        }
        self.write(")");
    }

    fn ty(&mut self, id: TypeId) {
        match self.doc.ty(id).kind {
            TypeKind::Named(name) => self.write_span(name),
            TypeKind::List(inner) => {
                self.write("[");
                self.ty(inner);
                self.write("]");
            }
            TypeKind::NonNull(inner) => {
                self.ty(inner);
                self.write("!");
            }
        }
    }

    fn value(&mut self, id: ValueId) {
        let doc = self.doc;
        match &doc.value(id).kind {
            ValueKind::Variable(name) => {
                self.write("$");
                self.write_span(*name);
            }
            ValueKind::Int { raw, .. } => self.write_span(*raw),
            ValueKind::Float { raw, .. } => self.write_span(*raw),
            ValueKind::String { content, block } => {
                if *block {
                    self.write("\"\"\"");
                    self.write_span(*content);
                    self.write("\"\"\"");
                } else {
                    self.write("\"");
                    self.write_span(*content);
                    self.write("\"");
                }
            }
            ValueKind::Boolean(true) => self.write("true"),
            ValueKind::Boolean(false) => self.write("false"),
            ValueKind::Null => self.write("null"),
            ValueKind::Enum(name) => self.write_span(*name),
            ValueKind::List(values) => {
                self.write("[");
                for (index, &value) in values.iter().enumerate() {
                    if index > 0 {
                        self.write(", ");
                    }
                    self.value(value);
                }
                self.write("]");
            }
            ValueKind::Object(fields) => {
                self.write("{");
                for (index, &field) in fields.iter().enumerate() {
                    if index > 0 {
                        self.write(", ");
                    }
                    let field = doc.object_field(field);
                    self.write_span(field.name);
                    self.write(": ");
                    self.value(field.value);
                }
                self.write("}");
            }
        }
    }
}
