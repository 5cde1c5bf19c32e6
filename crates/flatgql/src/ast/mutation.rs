//! The manual mutation surface used by normalization and planning passes.
//!
//! All mutations are append-only at the pool level: new records are
//! allocated, selection lists are rewritten in place, and no existing id is
//! ever invalidated. Mutations are not thread-safe; callers hold the
//! document exclusively.

use crate::ast::executable::{Field, FieldId, Selection, SelectionSet, SelectionSetId};
use crate::ast::value::{Argument, ArgumentId, ArgumentSet, Value, ValueId};
use crate::ast::Document;
use crate::span::{ByteSpan, Position};

impl Document {
    /// Intern a new literal by appending it to the input buffer. The buffer
    /// never shrinks or reorders, so every previously returned span stays
    /// valid.
    pub fn put_literal(&mut self, literal: &str) -> ByteSpan {
        let start = self.append_input(literal);
        ByteSpan::new(start, start + literal.len())
    }

    /// Allocate a field record for later insertion into a selection set.
    pub fn put_field(&mut self, field: Field) -> FieldId {
        self.add_field(field)
    }

    /// Allocate a value record.
    pub fn put_value(&mut self, value: Value) -> ValueId {
        self.add_value(value)
    }

    /// Intern a decoded integer, for building `ValueKind::Int` values.
    pub fn put_int(&mut self, value: i64) -> crate::ast::IntValueId {
        self.add_int(value)
    }

    /// Intern a decoded float, for building `ValueKind::Float` values.
    pub fn put_float(&mut self, value: f64) -> crate::ast::FloatValueId {
        self.add_float(value)
    }

    /// Allocate an argument record.
    pub fn put_argument(&mut self, argument: Argument) -> ArgumentId {
        self.add_argument(argument)
    }

    /// Allocate an empty selection set, for building new subselections.
    pub fn put_selection_set(&mut self, position: Position) -> SelectionSetId {
        self.add_selection_set(SelectionSet {
            selections: vec![],
            position,
        })
    }

    /// Append `field` to the end of a selection set.
    pub fn append_field_to_selection_set(&mut self, field: FieldId, set: SelectionSetId) {
        self.selection_set_mut(set)
            .selections
            .push(Selection::Field(field));
    }

    /// Remove `field` from a selection set's list. This is a logical
    /// removal: the field record stays in its pool and its id remains
    /// valid.
    pub fn delete_field_from_selection_set(&mut self, field: FieldId, set: SelectionSetId) {
        self.selection_set_mut(set)
            .selections
            .retain(|selection| *selection != Selection::Field(field));
    }

    /// Replace a selection set's entire selection list, preserving the
    /// caller-supplied order. Used by passes that splice subselections, such
    /// as inline fragment merging.
    pub fn replace_selections(&mut self, set: SelectionSetId, selections: Vec<Selection>) {
        self.selection_set_mut(set).selections = selections;
    }

    /// Merge an argument into a field.
    ///
    /// A field without arguments gets a fresh argument set. If the field
    /// already has an argument of the same name (byte comparison through the
    /// input buffer), the new argument replaces it in place; otherwise it is
    /// appended.
    pub fn merge_argument_into_field(&mut self, argument: ArgumentId, field: FieldId) {
        let set = match self.field(field).arguments {
            Some(set) => set,
            None => {
                let set = self.add_argument_set(ArgumentSet {
                    arguments: vec![argument],
                });
                self.field_mut(field).arguments = Some(set);
                return;
            }
        };

        let name = self.argument(argument).name;
        let existing = self
            .argument_set(set)
            .arguments
            .iter()
            .position(|&id| self.span_eq(self.argument(id).name, name));

        let arguments = &mut self.argument_set_mut(set).arguments;
        match existing {
            Some(index) => arguments[index] = argument,
            None => arguments.push(argument),
        }
    }
}
