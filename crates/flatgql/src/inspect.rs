//! Structural inspections over executable documents, built on byte
//! comparison through the input buffer. These are helpers for validation
//! rules; an "invalid" answer is a successful result, not an error.

use crate::ast::{ArgumentSetId, Document, FieldId, Selection, SelectionSetId, ValueId, ValueKind};

/// Whether the selections at `a` and `b` in a selection set can merge into
/// one response.
///
/// Two fields with different response keys never conflict. Fields sharing a
/// response key must select the same underlying field with the same
/// arguments, and their subselections must merge in turn — so `{a b}` and
/// `{a a}` merge, while `{a: b a}` does not.
pub fn fields_can_merge(doc: &Document, set: SelectionSetId, a: usize, b: usize) -> bool {
    let selections = &doc.selection_set(set).selections;
    match (selections.get(a), selections.get(b)) {
        (Some(&Selection::Field(a)), Some(&Selection::Field(b))) => {
            field_pair_can_merge(doc, a, b)
        }
        _ => true,
    }
}

fn field_pair_can_merge(doc: &Document, a: FieldId, b: FieldId) -> bool {
    let field_a = doc.field(a);
    let field_b = doc.field(b);

    if !doc.span_eq(field_a.response_name(), field_b.response_name()) {
        return true;
    }
    if !doc.span_eq(field_a.name, field_b.name) {
        return false;
    }
    if !argument_sets_match(doc, field_a.arguments, field_b.arguments) {
        return false;
    }
    match (field_a.selection_set, field_b.selection_set) {
        (None, None) => true,
        (Some(a), Some(b)) => subselections_can_merge(doc, a, b),
        _ => false,
    }
}

fn subselections_can_merge(doc: &Document, a: SelectionSetId, b: SelectionSetId) -> bool {
    for &left in &doc.selection_set(a).selections {
        let Selection::Field(left) = left else { continue };
        for &right in &doc.selection_set(b).selections {
            let Selection::Field(right) = right else { continue };
            if !field_pair_can_merge(doc, left, right) {
                return false;
            }
        }
    }
    true
}

fn argument_sets_match(
    doc: &Document,
    a: Option<ArgumentSetId>,
    b: Option<ArgumentSetId>,
) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    let arguments_a = &doc.argument_set(a).arguments;
    let arguments_b = &doc.argument_set(b).arguments;
    if arguments_a.len() != arguments_b.len() {
        return false;
    }
    arguments_a.iter().all(|&left| {
        let left = doc.argument(left);
        arguments_b.iter().any(|&right| {
            let right = doc.argument(right);
            doc.span_eq(left.name, right.name) && values_equal(doc, left.value, right.value)
        })
    })
}

/// Structural value equality: decoded primitives for numbers, byte
/// comparison for names and string content, recursion for lists and
/// objects.
pub fn values_equal(doc: &Document, a: ValueId, b: ValueId) -> bool {
    match (&doc.value(a).kind, &doc.value(b).kind) {
        (ValueKind::Variable(a), ValueKind::Variable(b)) => doc.span_eq(*a, *b),
        (ValueKind::Int { value: a, .. }, ValueKind::Int { value: b, .. }) => {
            doc.int_value(*a) == doc.int_value(*b)
        }
        (ValueKind::Float { value: a, .. }, ValueKind::Float { value: b, .. }) => {
            doc.float_value(*a) == doc.float_value(*b)
        }
        (
            ValueKind::String { content: a, .. },
            ValueKind::String { content: b, .. },
        ) => doc.span_eq(*a, *b),
        (ValueKind::Boolean(a), ValueKind::Boolean(b)) => a == b,
        (ValueKind::Null, ValueKind::Null) => true,
        (ValueKind::Enum(a), ValueKind::Enum(b)) => doc.span_eq(*a, *b),
        (ValueKind::List(a), ValueKind::List(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(&a, &b)| values_equal(doc, a, b))
        }
        (ValueKind::Object(a), ValueKind::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|&left| {
                    let left = doc.object_field(left);
                    b.iter().any(|&right| {
                        let right = doc.object_field(right);
                        doc.span_eq(left.name, right.name)
                            && values_equal(doc, left.value, right.value)
                    })
                })
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parse_executable_document;

    fn can_merge(input: &str, a: usize, b: usize) -> bool {
        let doc = parse_executable_document(input).unwrap();
        let operation = doc.operation_definition(doc.executable().operations[0]);
        fields_can_merge(&doc, operation.selection_set, a, b)
    }

    #[test]
    fn different_fields_merge() {
        assert!(can_merge("{a b}", 0, 1));
    }

    #[test]
    fn identical_fields_merge() {
        assert!(can_merge("{a a}", 0, 1));
    }

    #[test]
    fn alias_over_a_different_field_conflicts() {
        assert!(!can_merge("{a: b a}", 0, 1));
    }

    #[test]
    fn identical_arguments_merge() {
        assert!(can_merge("{a(x: 1) a(x: 1)}", 0, 1));
    }

    #[test]
    fn differing_arguments_conflict() {
        assert!(!can_merge("{a(x: 1) a(x: 2)}", 0, 1));
        assert!(!can_merge("{a(x: 1) a(y: 1)}", 0, 1));
        assert!(!can_merge("{a(x: 1) a}", 0, 1));
    }

    #[test]
    fn subselections_are_checked_recursively() {
        assert!(can_merge("{a {b} a {c: b}}", 0, 1));
        assert!(!can_merge("{a {b: c} a {b}}", 0, 1));
    }
}
