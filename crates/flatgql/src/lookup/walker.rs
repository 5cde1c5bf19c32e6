use crate::ast::{
    ArgumentId, ArgumentSetId, DirectiveSetId, Document, FieldId, NodeRef,
    OperationDefinitionId, Selection, SelectionSetId, VariableDefinitionId,
};
use crate::ast::{
    DirectiveDefinitionId, EnumTypeDefinitionId, EnumValueDefinitionId, FieldDefinitionId,
    FragmentDefinitionId, FragmentSpreadId, InlineFragmentId, InputObjectTypeDefinitionId,
    InputValueDefinitionId, InterfaceTypeDefinitionId, ObjectTypeDefinitionId,
    ScalarTypeDefinitionId, SchemaDefinitionId, UnionTypeDefinitionId,
};
use crate::lookup::Lookup;
use crate::span::ByteSpan;
use crate::LookupError;

use indexmap::{IndexMap, IndexSet};

/// Index of a node in the walker's visit-ordered node list.
pub type WalkNodeId = usize;

/// One visited node: what it is, and the walk node it was reached through.
/// Roots (operations, standalone fragment definitions, type-system
/// definitions) have no parent.
#[derive(Debug, Clone, Copy)]
pub struct WalkedNode {
    pub node: NodeRef,
    pub parent: Option<WalkNodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkerStatus {
    Idle,
    Walking,
    Done,
}

/// Depth-first observer callbacks. Every method defaults to a no-op;
/// implementations override the node kinds they care about. Each node is
/// visited twice, on enter and on leave, in source order.
#[allow(unused_variables)]
pub trait Visitor {
    fn enter_operation_definition(&mut self, doc: &Document, id: OperationDefinitionId) {}
    fn leave_operation_definition(&mut self, doc: &Document, id: OperationDefinitionId) {}
    fn enter_fragment_definition(&mut self, doc: &Document, id: FragmentDefinitionId) {}
    fn leave_fragment_definition(&mut self, doc: &Document, id: FragmentDefinitionId) {}
    fn enter_variable_definition(&mut self, doc: &Document, id: VariableDefinitionId) {}
    fn leave_variable_definition(&mut self, doc: &Document, id: VariableDefinitionId) {}
    fn enter_selection_set(&mut self, doc: &Document, id: SelectionSetId) {}
    fn leave_selection_set(&mut self, doc: &Document, id: SelectionSetId) {}
    fn enter_field(&mut self, doc: &Document, id: FieldId) {}
    fn leave_field(&mut self, doc: &Document, id: FieldId) {}
    fn enter_fragment_spread(&mut self, doc: &Document, id: FragmentSpreadId) {}
    fn leave_fragment_spread(&mut self, doc: &Document, id: FragmentSpreadId) {}
    fn enter_inline_fragment(&mut self, doc: &Document, id: InlineFragmentId) {}
    fn leave_inline_fragment(&mut self, doc: &Document, id: InlineFragmentId) {}
    fn enter_argument(&mut self, doc: &Document, id: ArgumentId) {}
    fn leave_argument(&mut self, doc: &Document, id: ArgumentId) {}
    fn enter_directive(&mut self, doc: &Document, id: crate::ast::DirectiveId) {}
    fn leave_directive(&mut self, doc: &Document, id: crate::ast::DirectiveId) {}

    fn enter_schema_definition(&mut self, doc: &Document, id: SchemaDefinitionId) {}
    fn leave_schema_definition(&mut self, doc: &Document, id: SchemaDefinitionId) {}
    fn enter_scalar_type_definition(&mut self, doc: &Document, id: ScalarTypeDefinitionId) {}
    fn leave_scalar_type_definition(&mut self, doc: &Document, id: ScalarTypeDefinitionId) {}
    fn enter_object_type_definition(&mut self, doc: &Document, id: ObjectTypeDefinitionId) {}
    fn leave_object_type_definition(&mut self, doc: &Document, id: ObjectTypeDefinitionId) {}
    fn enter_interface_type_definition(&mut self, doc: &Document, id: InterfaceTypeDefinitionId) {
    }
    fn leave_interface_type_definition(&mut self, doc: &Document, id: InterfaceTypeDefinitionId) {
    }
    fn enter_union_type_definition(&mut self, doc: &Document, id: UnionTypeDefinitionId) {}
    fn leave_union_type_definition(&mut self, doc: &Document, id: UnionTypeDefinitionId) {}
    fn enter_enum_type_definition(&mut self, doc: &Document, id: EnumTypeDefinitionId) {}
    fn leave_enum_type_definition(&mut self, doc: &Document, id: EnumTypeDefinitionId) {}
    fn enter_enum_value_definition(&mut self, doc: &Document, id: EnumValueDefinitionId) {}
    fn leave_enum_value_definition(&mut self, doc: &Document, id: EnumValueDefinitionId) {}
    fn enter_input_object_type_definition(
        &mut self,
        doc: &Document,
        id: InputObjectTypeDefinitionId,
    ) {
    }
    fn leave_input_object_type_definition(
        &mut self,
        doc: &Document,
        id: InputObjectTypeDefinitionId,
    ) {
    }
    fn enter_directive_definition(&mut self, doc: &Document, id: DirectiveDefinitionId) {}
    fn leave_directive_definition(&mut self, doc: &Document, id: DirectiveDefinitionId) {}
    fn enter_field_definition(&mut self, doc: &Document, id: FieldDefinitionId) {}
    fn leave_field_definition(&mut self, doc: &Document, id: FieldDefinitionId) {}
    fn enter_input_value_definition(&mut self, doc: &Document, id: InputValueDefinitionId) {}
    fn leave_input_value_definition(&mut self, doc: &Document, id: InputValueDefinitionId) {}
}

type Visitors<'v> = Vec<&'v mut dyn Visitor>;

/// Deterministic depth-first traversal over a document.
///
/// The walker visits nodes in source order, firing registered [`Visitor`]
/// callbacks in registration order, and records three things as it goes:
///
/// - a visit-ordered node list with parent links (the path stack behind
///   [`field_path`] and [`selection_set_type_name`]);
/// - a fragment expansion cache, so each named fragment is expanded at most
///   once per enclosing operation;
/// - a node-usage map linking every reachable node back to the root
///   operations that transitively contain it.
///
/// A walker that returns a [`LookupError`] stays in the `Walking` state and
/// must be discarded; the error indicates a corrupt or inconsistent
/// document, not an invalid-but-well-formed one.
///
/// [`field_path`]: Walker::field_path
/// [`selection_set_type_name`]: Walker::selection_set_type_name
pub struct Walker<'a, 'v> {
    lookup: Lookup<'a>,
    visitors: Visitors<'v>,
    status: WalkerStatus,
    nodes: Vec<WalkedNode>,
    collected_fields: Vec<(FieldId, WalkNodeId)>,
    collected_argument_sets: Vec<(ArgumentSetId, WalkNodeId)>,
    usage: IndexMap<NodeRef, IndexSet<OperationDefinitionId>>,
    expanded: IndexSet<(OperationDefinitionId, FragmentDefinitionId)>,
}

impl<'a, 'v> Walker<'a, 'v> {
    pub fn new(lookup: Lookup<'a>) -> Self {
        Self {
            lookup,
            visitors: vec![],
            status: WalkerStatus::Idle,
            nodes: vec![],
            collected_fields: vec![],
            collected_argument_sets: vec![],
            usage: IndexMap::new(),
            expanded: IndexSet::new(),
        }
    }

    /// Register an observer. Callbacks fire in registration order.
    pub fn register(&mut self, visitor: &'v mut dyn Visitor) {
        self.visitors.push(visitor);
    }

    pub fn status(&self) -> WalkerStatus {
        self.status
    }

    pub fn lookup(&self) -> &Lookup<'a> {
        &self.lookup
    }

    fn doc(&self) -> &'a Document {
        self.lookup.document()
    }

    /// Walk every executable definition: operations first, then fragment
    /// definitions not reached from any operation.
    pub fn walk_executable(&mut self) -> Result<(), LookupError> {
        let mut visitors = self.begin()?;
        let result = self.walk_executable_inner(&mut visitors);
        self.visitors = visitors;
        if result.is_ok() {
            self.status = WalkerStatus::Done;
        }
        result
    }

    /// Walk every type-system definition in parse order per kind.
    pub fn walk_type_system(&mut self) -> Result<(), LookupError> {
        let mut visitors = self.begin()?;
        let result = self.walk_type_system_inner(&mut visitors);
        self.visitors = visitors;
        if result.is_ok() {
            self.status = WalkerStatus::Done;
        }
        result
    }

    fn begin(&mut self) -> Result<Visitors<'v>, LookupError> {
        if self.status == WalkerStatus::Walking {
            return Err(LookupError::ReentrantWalk);
        }
        self.status = WalkerStatus::Walking;
        self.nodes.clear();
        self.collected_fields.clear();
        self.collected_argument_sets.clear();
        self.usage.clear();
        self.expanded.clear();
        Ok(std::mem::take(&mut self.visitors))
    }

    fn push_node(
        &mut self,
        node: NodeRef,
        parent: Option<WalkNodeId>,
        operation: Option<OperationDefinitionId>,
    ) -> WalkNodeId {
        let id = self.nodes.len();
        self.nodes.push(WalkedNode { node, parent });
        if let Some(operation) = operation {
            self.usage.entry(node).or_default().insert(operation);
        }
        id
    }

    fn walk_executable_inner(&mut self, visitors: &mut Visitors<'v>) -> Result<(), LookupError> {
        let doc = self.doc();

        for &operation in &doc.executable().operations {
            let node = self.push_node(
                NodeRef::OperationDefinition(operation),
                None,
                Some(operation),
            );
            for visitor in visitors.iter_mut() {
                visitor.enter_operation_definition(doc, operation);
            }

            let definition = doc.operation_definition(operation);
            for &variable in &definition.variable_definitions {
                let variable_node =
                    self.push_node(NodeRef::VariableDefinition(variable), Some(node), Some(operation));
                for visitor in visitors.iter_mut() {
                    visitor.enter_variable_definition(doc, variable);
                }
                self.walk_directive_set(
                    doc.variable_definition(variable).directives,
                    variable_node,
                    Some(operation),
                    visitors,
                );
                for visitor in visitors.iter_mut() {
                    visitor.leave_variable_definition(doc, variable);
                }
            }

            self.walk_directive_set(definition.directives, node, Some(operation), visitors);
            self.walk_selection_set(definition.selection_set, node, Some(operation), visitors)?;

            for visitor in visitors.iter_mut() {
                visitor.leave_operation_definition(doc, operation);
            }
        }

        for &fragment in &doc.executable().fragments {
            if self.expanded.iter().any(|&(_, expanded)| expanded == fragment) {
                continue;
            }
            let node = self.push_node(NodeRef::FragmentDefinition(fragment), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_fragment_definition(doc, fragment);
            }
            let definition = doc.fragment_definition(fragment);
            self.walk_directive_set(definition.directives, node, None, visitors);
            self.walk_selection_set(definition.selection_set, node, None, visitors)?;
            for visitor in visitors.iter_mut() {
                visitor.leave_fragment_definition(doc, fragment);
            }
        }

        Ok(())
    }

    fn walk_selection_set(
        &mut self,
        set: SelectionSetId,
        parent: WalkNodeId,
        operation: Option<OperationDefinitionId>,
        visitors: &mut Visitors<'v>,
    ) -> Result<(), LookupError> {
        let doc = self.doc();
        let node = self.push_node(NodeRef::SelectionSet(set), Some(parent), operation);
        for visitor in visitors.iter_mut() {
            visitor.enter_selection_set(doc, set);
        }

        for &selection in &doc.selection_set(set).selections {
            match selection {
                Selection::Field(field) => {
                    let field_node = self.push_node(NodeRef::Field(field), Some(node), operation);
                    self.collected_fields.push((field, field_node));
                    for visitor in visitors.iter_mut() {
                        visitor.enter_field(doc, field);
                    }

                    let record = doc.field(field);
                    if let Some(arguments) = record.arguments {
                        self.walk_argument_set(arguments, field_node, operation, visitors);
                    }
                    self.walk_directive_set(record.directives, field_node, operation, visitors);
                    if let Some(subselection) = record.selection_set {
                        self.walk_selection_set(subselection, field_node, operation, visitors)?;
                    }

                    for visitor in visitors.iter_mut() {
                        visitor.leave_field(doc, field);
                    }
                }
                Selection::FragmentSpread(spread) => {
                    let spread_node =
                        self.push_node(NodeRef::FragmentSpread(spread), Some(node), operation);
                    for visitor in visitors.iter_mut() {
                        visitor.enter_fragment_spread(doc, spread);
                    }

                    let record = doc.fragment_spread(spread);
                    self.walk_directive_set(record.directives, spread_node, operation, visitors);

                    let fragment = self
                        .lookup
                        .fragment_definition_by_name(doc.resolve(record.name))
                        .ok_or_else(|| LookupError::MissingFragment {
                            name: doc.resolve_str(record.name).to_string(),
                            position: record.position,
                        })?;

                    if let Some(operation) = operation {
                        if self.expanded.insert((operation, fragment)) {
                            let fragment_set = doc.fragment_definition(fragment).selection_set;
                            self.walk_selection_set(
                                fragment_set,
                                spread_node,
                                Some(operation),
                                visitors,
                            )?;
                        }
                    }

                    for visitor in visitors.iter_mut() {
                        visitor.leave_fragment_spread(doc, spread);
                    }
                }
                Selection::InlineFragment(inline) => {
                    let inline_node =
                        self.push_node(NodeRef::InlineFragment(inline), Some(node), operation);
                    for visitor in visitors.iter_mut() {
                        visitor.enter_inline_fragment(doc, inline);
                    }

                    let record = doc.inline_fragment(inline);
                    self.walk_directive_set(record.directives, inline_node, operation, visitors);
                    self.walk_selection_set(record.selection_set, inline_node, operation, visitors)?;

                    for visitor in visitors.iter_mut() {
                        visitor.leave_inline_fragment(doc, inline);
                    }
                }
            }
        }

        for visitor in visitors.iter_mut() {
            visitor.leave_selection_set(doc, set);
        }
        Ok(())
    }

    fn walk_argument_set(
        &mut self,
        set: ArgumentSetId,
        parent: WalkNodeId,
        operation: Option<OperationDefinitionId>,
        visitors: &mut Visitors<'v>,
    ) {
        let doc = self.doc();
        let node = self.push_node(NodeRef::ArgumentSet(set), Some(parent), operation);
        self.collected_argument_sets.push((set, node));

        for &argument in &doc.argument_set(set).arguments {
            self.push_node(NodeRef::Argument(argument), Some(node), operation);
            for visitor in visitors.iter_mut() {
                visitor.enter_argument(doc, argument);
            }
            for visitor in visitors.iter_mut() {
                visitor.leave_argument(doc, argument);
            }
        }
    }

    fn walk_directive_set(
        &mut self,
        set: Option<DirectiveSetId>,
        parent: WalkNodeId,
        operation: Option<OperationDefinitionId>,
        visitors: &mut Visitors<'v>,
    ) {
        let Some(set) = set else { return };
        let doc = self.doc();
        let node = self.push_node(NodeRef::DirectiveSet(set), Some(parent), operation);

        for &directive in &doc.directive_set(set).directives {
            let directive_node =
                self.push_node(NodeRef::Directive(directive), Some(node), operation);
            for visitor in visitors.iter_mut() {
                visitor.enter_directive(doc, directive);
            }
            if let Some(arguments) = doc.directive(directive).arguments {
                self.walk_argument_set(arguments, directive_node, operation, visitors);
            }
            for visitor in visitors.iter_mut() {
                visitor.leave_directive(doc, directive);
            }
        }
    }

    fn walk_type_system_inner(&mut self, visitors: &mut Visitors<'v>) -> Result<(), LookupError> {
        let doc = self.doc();

        for &schema in &doc.type_system().schemas {
            let node = self.push_node(NodeRef::SchemaDefinition(schema), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_schema_definition(doc, schema);
            }
            self.walk_directive_set(doc.schema_definition(schema).directives, node, None, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_schema_definition(doc, schema);
            }
        }

        for &scalar in &doc.type_system().scalars {
            let node = self.push_node(NodeRef::ScalarTypeDefinition(scalar), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_scalar_type_definition(doc, scalar);
            }
            self.walk_directive_set(
                doc.scalar_type_definition(scalar).directives,
                node,
                None,
                visitors,
            );
            for visitor in visitors.iter_mut() {
                visitor.leave_scalar_type_definition(doc, scalar);
            }
        }

        for &object in &doc.type_system().objects {
            let node = self.push_node(NodeRef::ObjectTypeDefinition(object), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_object_type_definition(doc, object);
            }
            let definition = doc.object_type_definition(object);
            self.walk_directive_set(definition.directives, node, None, visitors);
            self.walk_field_definitions(definition.fields, node, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_object_type_definition(doc, object);
            }
        }

        for &interface in &doc.type_system().interfaces {
            let node = self.push_node(NodeRef::InterfaceTypeDefinition(interface), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_interface_type_definition(doc, interface);
            }
            let definition = doc.interface_type_definition(interface);
            self.walk_directive_set(definition.directives, node, None, visitors);
            self.walk_field_definitions(definition.fields, node, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_interface_type_definition(doc, interface);
            }
        }

        for &union in &doc.type_system().unions {
            let node = self.push_node(NodeRef::UnionTypeDefinition(union), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_union_type_definition(doc, union);
            }
            self.walk_directive_set(
                doc.union_type_definition(union).directives,
                node,
                None,
                visitors,
            );
            for visitor in visitors.iter_mut() {
                visitor.leave_union_type_definition(doc, union);
            }
        }

        for &definition in &doc.type_system().enums {
            let node = self.push_node(NodeRef::EnumTypeDefinition(definition), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_enum_type_definition(doc, definition);
            }
            let record = doc.enum_type_definition(definition);
            self.walk_directive_set(record.directives, node, None, visitors);
            for &value in &record.values {
                let value_node = self.push_node(NodeRef::EnumValueDefinition(value), Some(node), None);
                for visitor in visitors.iter_mut() {
                    visitor.enter_enum_value_definition(doc, value);
                }
                self.walk_directive_set(
                    doc.enum_value_definition(value).directives,
                    value_node,
                    None,
                    visitors,
                );
                for visitor in visitors.iter_mut() {
                    visitor.leave_enum_value_definition(doc, value);
                }
            }
            for visitor in visitors.iter_mut() {
                visitor.leave_enum_type_definition(doc, definition);
            }
        }

        for &input in &doc.type_system().input_objects {
            let node = self.push_node(NodeRef::InputObjectTypeDefinition(input), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_input_object_type_definition(doc, input);
            }
            let definition = doc.input_object_type_definition(input);
            self.walk_directive_set(definition.directives, node, None, visitors);
            self.walk_input_value_definitions(definition.input_fields, node, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_input_object_type_definition(doc, input);
            }
        }

        for &directive in &doc.type_system().directives {
            let node = self.push_node(NodeRef::DirectiveDefinition(directive), None, None);
            for visitor in visitors.iter_mut() {
                visitor.enter_directive_definition(doc, directive);
            }
            self.walk_input_value_definitions(
                doc.directive_definition(directive).arguments,
                node,
                visitors,
            );
            for visitor in visitors.iter_mut() {
                visitor.leave_directive_definition(doc, directive);
            }
        }

        Ok(())
    }

    fn walk_field_definitions(
        &mut self,
        head: Option<FieldDefinitionId>,
        parent: WalkNodeId,
        visitors: &mut Visitors<'v>,
    ) {
        let doc = self.doc();
        for (id, definition) in doc.field_definitions(head) {
            let node = self.push_node(NodeRef::FieldDefinition(id), Some(parent), None);
            for visitor in visitors.iter_mut() {
                visitor.enter_field_definition(doc, id);
            }
            self.walk_input_value_definitions(definition.arguments, node, visitors);
            self.walk_directive_set(definition.directives, node, None, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_field_definition(doc, id);
            }
        }
    }

    fn walk_input_value_definitions(
        &mut self,
        head: Option<InputValueDefinitionId>,
        parent: WalkNodeId,
        visitors: &mut Visitors<'v>,
    ) {
        let doc = self.doc();
        for (id, definition) in doc.input_value_definitions(head) {
            let node = self.push_node(NodeRef::InputValueDefinition(id), Some(parent), None);
            for visitor in visitors.iter_mut() {
                visitor.enter_input_value_definition(doc, id);
            }
            self.walk_directive_set(definition.directives, node, None, visitors);
            for visitor in visitors.iter_mut() {
                visitor.leave_input_value_definition(doc, id);
            }
        }
    }

    /// All nodes in visit order, with parent links.
    pub fn nodes(&self) -> &[WalkedNode] {
        &self.nodes
    }

    pub fn walked_node(&self, id: WalkNodeId) -> &WalkedNode {
        &self.nodes[id]
    }

    /// Every field visited by the walk, with its walk node. Fields expanded
    /// into several operations through a shared fragment appear once per
    /// expansion.
    pub fn fields_iterable(&self) -> impl Iterator<Item = (FieldId, WalkNodeId)> + '_ {
        self.collected_fields.iter().copied()
    }

    /// Every argument set visited by the walk, with its walk node.
    pub fn argument_set_iterable(
        &self,
    ) -> impl Iterator<Item = (ArgumentSetId, WalkNodeId)> + '_ {
        self.collected_argument_sets.iter().copied()
    }

    /// The chain of enclosing field names (alias preferred) above a walk
    /// node, nearest ancestor first. Inline fragments and fragment spreads
    /// contribute nothing; the path crosses them transparently.
    pub fn field_path(&self, from: WalkNodeId) -> Vec<ByteSpan> {
        let doc = self.doc();
        let mut path = vec![];
        let mut current = self.nodes[from].parent;
        while let Some(id) = current {
            let walked = self.nodes[id];
            if let NodeRef::Field(_) = walked.node {
                let name = doc
                    .node_alias(walked.node)
                    .or_else(|| doc.node_name(walked.node));
                if let Some(name) = name {
                    path.push(name);
                }
            }
            current = walked.parent;
        }
        path
    }

    /// The name of the type backing a selection set, given the walk node
    /// that owns the set: a field's set is typed by the field's unwrapped
    /// declared return type, an inline fragment's by its type condition
    /// (or inherited when absent), an operation's by the schema root type.
    pub fn selection_set_type_name(
        &self,
        _set: SelectionSetId,
        owner: WalkNodeId,
    ) -> Result<ByteSpan, LookupError> {
        self.scope_type_name(owner)
    }

    fn scope_type_name(&self, node_id: WalkNodeId) -> Result<ByteSpan, LookupError> {
        let doc = self.doc();
        let walked = self.nodes[node_id];
        match walked.node {
            NodeRef::OperationDefinition(operation) => self
                .lookup
                .root_operation_type_name(doc.operation_definition(operation).operation_type),
            NodeRef::FragmentDefinition(fragment) => {
                Ok(doc.fragment_definition(fragment).type_condition)
            }
            NodeRef::FragmentSpread(spread) => {
                let record = doc.fragment_spread(spread);
                let fragment = self
                    .lookup
                    .fragment_definition_by_name(doc.resolve(record.name))
                    .ok_or_else(|| LookupError::MissingFragment {
                        name: doc.resolve_str(record.name).to_string(),
                        position: record.position,
                    })?;
                Ok(doc.fragment_definition(fragment).type_condition)
            }
            NodeRef::InlineFragment(inline) => {
                let condition = doc.inline_fragment(inline).type_condition;
                if !condition.is_empty() {
                    return Ok(condition);
                }
                self.parent_scope_type_name(walked.parent)
            }
            NodeRef::Field(field) => {
                let enclosing = self.parent_scope_type_name(walked.parent)?;
                let name = doc.field(field).name;
                let definition = self
                    .lookup
                    .field_definition_in_type(doc.resolve(enclosing), doc.resolve(name))
                    .ok_or_else(|| LookupError::UnknownField {
                        type_name: doc.resolve_str(enclosing).to_string(),
                        field_name: doc.resolve_str(name).to_string(),
                    })?;
                Ok(doc.unwrapped_named_type(definition.ty))
            }
            _ => self.parent_scope_type_name(walked.parent),
        }
    }

    fn parent_scope_type_name(
        &self,
        parent: Option<WalkNodeId>,
    ) -> Result<ByteSpan, LookupError> {
        match parent {
            Some(parent) => self.scope_type_name(parent),
            None => Err(LookupError::UnknownType {
                name: String::new(),
            }),
        }
    }

    /// The root operations that transitively contain `node`, each yielded at
    /// most once no matter how many spreads lead to it.
    pub fn node_usage_in_operations(
        &self,
        node: NodeRef,
    ) -> impl Iterator<Item = OperationDefinitionId> + '_ {
        self.usage
            .get(&node)
            .into_iter()
            .flat_map(|operations| operations.iter().copied())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse_type_system;

    const TEST_SCHEMA: &str = "
schema { query: Query }
type Query { dog: Dog }
interface Pet { name: String! }
type Dog implements Pet {
  name: String!
  nickName: String
  doubleNested: Boolean
  nestedDogName: String
  barkVolume: Int
  isHousetrained(atOtherHomes: Boolean): Boolean!
  doesKnowCommand(dogCommand: DogCommand!): Boolean!
  owner: Human
  extra: DogExtra
}
type DogExtra { string: String noString: String }
type Human { name: String! another: Human }
enum DogCommand { SIT DOWN HEEL }
directive @include(if: Boolean!) on FIELD
";

    fn parse(executable: &str) -> Document {
        let mut doc = parse_type_system(TEST_SCHEMA).unwrap();
        doc.parse_executable(executable).unwrap();
        doc
    }

    fn field_path_of(doc: &Document, walker: &Walker, field_name: &str) -> Vec<String> {
        let (_, node) = walker
            .fields_iterable()
            .find(|&(field, _)| doc.span_is(doc.field(field).name, field_name))
            .expect("field not walked");
        walker
            .field_path(node)
            .iter()
            .map(|&span| doc.resolve_str(span).to_string())
            .collect()
    }

    fn operations_containing_argument(
        doc: &Document,
        walker: &Walker,
        argument_name: &str,
    ) -> Vec<String> {
        for (set, _) in walker.argument_set_iterable() {
            for &argument in &doc.argument_set(set).arguments {
                if doc.span_is(doc.argument(argument).name, argument_name) {
                    return walker
                        .node_usage_in_operations(NodeRef::Argument(argument))
                        .map(|operation| {
                            doc.resolve_str(doc.operation_definition(operation).name)
                                .to_string()
                        })
                        .collect();
                }
            }
        }
        vec![]
    }

    fn selection_set_type_of(doc: &Document, walker: &Walker, field_name: &str) -> String {
        let (field, node) = walker
            .fields_iterable()
            .find(|&(field, _)| doc.span_is(doc.field(field).name, field_name))
            .expect("field not walked");
        let set = doc.field(field).selection_set.expect("field has no selection set");
        let type_name = walker.selection_set_type_name(set, node).unwrap();
        doc.resolve_str(type_name).to_string()
    }

    #[test]
    fn field_path_nested_two_levels() {
        let doc = parse("{dog{owner{name}}}");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(field_path_of(&doc, &walker, "name"), vec!["owner", "dog"]);
    }

    #[test]
    fn field_path_nested_three_levels() {
        let doc = parse("{dog{owner{another{name}}}}");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(
            field_path_of(&doc, &walker, "name"),
            vec!["another", "owner", "dog"]
        );
    }

    #[test]
    fn field_path_skips_inline_fragments() {
        let doc = parse("{ dog { ... on Dog { owner { name } } } }");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(field_path_of(&doc, &walker, "name"), vec!["owner", "dog"]);
    }

    #[test]
    fn field_path_skips_nested_inline_fragments() {
        let doc = parse("{ dog { ... on Dog { ... { owner { name } } } } }");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(field_path_of(&doc, &walker, "name"), vec!["owner", "dog"]);
    }

    #[test]
    fn field_path_prefers_aliases() {
        let doc = parse("{dog{renamed:owner{name}}}");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(field_path_of(&doc, &walker, "name"), vec!["renamed", "dog"]);
    }

    #[test]
    fn argument_usage_from_inside_an_operation() {
        let doc = parse(
            "query argOnRequiredArg($booleanArg: Boolean) {
                dog {
                    isHousetrained(atOtherHomes: $booleanArg) @include(if: $booleanArg)
                }
            }",
        );
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(
            operations_containing_argument(&doc, &walker, "atOtherHomes"),
            vec!["argOnRequiredArg"]
        );
    }

    #[test]
    fn argument_usage_through_a_fragment() {
        let doc = parse(
            "query argOnRequiredArg($booleanArg: Boolean) {
                dog { ...argOnOptional }
            }
            fragment argOnOptional on Dog {
                isHousetrained(atOtherHomes: $booleanArg) @include(if: $booleanArg)
            }",
        );
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(
            operations_containing_argument(&doc, &walker, "atOtherHomes"),
            vec!["argOnRequiredArg"]
        );
    }

    #[test]
    fn argument_usage_deduplicates_repeated_spreads() {
        let doc = parse(
            "query argOnRequiredArg($booleanArg: Boolean) {
                dog {
                    ...argOnOptional
                    ...argOnOptional
                    ...argOnOptional
                }
            }
            fragment argOnOptional on Dog {
                isHousetrained(atOtherHomes: $booleanArg) @include(if: $booleanArg)
            }",
        );
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        // the operation appears exactly once, not once per spread
        assert_eq!(
            operations_containing_argument(&doc, &walker, "atOtherHomes"),
            vec!["argOnRequiredArg"]
        );
    }

    #[test]
    fn argument_usage_through_nested_fragments() {
        let doc = parse(
            "query argOnRequiredArg($booleanArg: Boolean) {
                dog { ...argOnOptional1 }
            }
            fragment argOnOptional1 on Dog {
                ... {
                    ...on Dog {
                        ...argOnOptional2
                    }
                }
            }
            fragment argOnOptional2 on Dog {
                isHousetrained(atOtherHomes: $booleanArg) @include(if: $booleanArg)
            }",
        );
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(
            operations_containing_argument(&doc, &walker, "atOtherHomes"),
            vec!["argOnRequiredArg"]
        );
    }

    #[test]
    fn argument_usage_across_multiple_operations() {
        let doc = parse(
            "query argOnRequiredArg1($booleanArg: Boolean) {
                dog { ...argOnOptional }
            }
            query argOnRequiredArg2($booleanArg: Boolean) {
                dog { ...argOnOptional }
            }
            fragment argOnOptional on Dog {
                isHousetrained(atOtherHomes: $booleanArg) @include(if: $booleanArg)
            }",
        );
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(
            operations_containing_argument(&doc, &walker, "atOtherHomes"),
            vec!["argOnRequiredArg1", "argOnRequiredArg2"]
        );
    }

    #[test]
    fn selection_set_type_names_resolve_through_the_schema() {
        let doc = parse("{dog{owner{name}}}");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(selection_set_type_of(&doc, &walker, "dog"), "Dog");
        assert_eq!(selection_set_type_of(&doc, &walker, "owner"), "Human");
    }

    #[test]
    fn selection_set_type_name_for_wrapped_types_is_unwrapped() {
        let mut doc = parse_type_system(
            "type Query { assets: [Asset!]! } type Asset { id: ID! }",
        )
        .unwrap();
        doc.parse_executable("{assets{id}}").unwrap();
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.walk_executable().unwrap();
        assert_eq!(selection_set_type_of(&doc, &walker, "assets"), "Asset");
    }

    #[test]
    fn missing_fragments_are_fatal_and_poison_the_walker() {
        let doc = parse("{ dog { ...nope } }");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);

        let err = walker.walk_executable().unwrap_err();
        assert!(matches!(err, LookupError::MissingFragment { ref name, .. } if name == "nope"));
        assert_eq!(walker.status(), WalkerStatus::Walking);

        assert_eq!(walker.walk_executable(), Err(LookupError::ReentrantWalk));
    }

    #[test]
    fn status_reaches_done_and_rewalking_resets() {
        let doc = parse("{ dog { name } }");
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        assert_eq!(walker.status(), WalkerStatus::Idle);

        walker.walk_executable().unwrap();
        assert_eq!(walker.status(), WalkerStatus::Done);
        let nodes = walker.nodes().len();

        walker.walk_executable().unwrap();
        assert_eq!(walker.nodes().len(), nodes);
    }

    #[test]
    fn visitors_fire_in_depth_first_source_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct Recorder {
            tag: &'static str,
            log: Rc<RefCell<Vec<String>>>,
        }

        impl Visitor for Recorder {
            fn enter_field(&mut self, doc: &Document, id: FieldId) {
                self.log.borrow_mut().push(format!(
                    "{}:enter {}",
                    self.tag,
                    doc.resolve_str(doc.field(id).name)
                ));
            }
            fn leave_field(&mut self, doc: &Document, id: FieldId) {
                self.log.borrow_mut().push(format!(
                    "{}:leave {}",
                    self.tag,
                    doc.resolve_str(doc.field(id).name)
                ));
            }
        }

        let doc = parse("{ dog { owner { name } barkVolume } }");
        let log = Rc::new(RefCell::new(vec![]));
        let mut first = Recorder { tag: "a", log: Rc::clone(&log) };
        let mut second = Recorder { tag: "b", log: Rc::clone(&log) };

        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.register(&mut first);
        walker.register(&mut second);
        walker.walk_executable().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "a:enter dog",
                "b:enter dog",
                "a:enter owner",
                "b:enter owner",
                "a:enter name",
                "b:enter name",
                "a:leave name",
                "b:leave name",
                "a:leave owner",
                "b:leave owner",
                "a:enter barkVolume",
                "b:enter barkVolume",
                "a:leave barkVolume",
                "b:leave barkVolume",
                "a:leave dog",
                "b:leave dog",
            ]
        );
    }

    #[test]
    fn type_system_walks_reach_field_and_input_value_definitions() {
        struct Counter {
            fields: usize,
            inputs: usize,
            objects: usize,
        }

        impl Visitor for Counter {
            fn enter_object_type_definition(&mut self, _: &Document, _: ObjectTypeDefinitionId) {
                self.objects += 1;
            }
            fn enter_field_definition(&mut self, _: &Document, _: FieldDefinitionId) {
                self.fields += 1;
            }
            fn enter_input_value_definition(&mut self, _: &Document, _: InputValueDefinitionId) {
                self.inputs += 1;
            }
        }

        let doc = parse_type_system(TEST_SCHEMA).unwrap();
        let mut counter = Counter { fields: 0, inputs: 0, objects: 0 };
        let lookup = Lookup::new(&doc);
        let mut walker = Walker::new(lookup);
        walker.register(&mut counter);
        walker.walk_type_system().unwrap();

        assert_eq!(counter.objects, 4);
        // Query.dog + Dog's nine + DogExtra's two + Human's two + Pet.name
        assert_eq!(counter.fields, 15);
        // atOtherHomes, dogCommand, and @include's `if`
        assert_eq!(counter.inputs, 3);
    }
}
