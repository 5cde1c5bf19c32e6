use crate::ast::type_system::{
    FieldDefinition, FieldDefinitionId, InputValueDefinition, InputValueDefinitionId,
};
use crate::ast::Document;

/// Iterator over an intrusive list of [`FieldDefinition`]s.
///
/// The iterator owns only the head id, so it is cheap to create, restart and
/// pass around; each step follows the record's `next` link until the chain
/// terminates.
pub struct FieldDefinitions<'a> {
    doc: &'a Document,
    next: Option<FieldDefinitionId>,
}

impl<'a> Iterator for FieldDefinitions<'a> {
    type Item = (FieldDefinitionId, &'a FieldDefinition);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let record = self.doc.field_definition(id);
        self.next = record.next;
        Some((id, record))
    }
}

/// Iterator over an intrusive list of [`InputValueDefinition`]s.
pub struct InputValueDefinitions<'a> {
    doc: &'a Document,
    next: Option<InputValueDefinitionId>,
}

impl<'a> Iterator for InputValueDefinitions<'a> {
    type Item = (InputValueDefinitionId, &'a InputValueDefinition);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let record = self.doc.input_value_definition(id);
        self.next = record.next;
        Some((id, record))
    }
}

impl Document {
    /// Iterate the field definitions chained from `head`, typically an
    /// object or interface type's `fields`.
    pub fn field_definitions(&self, head: Option<FieldDefinitionId>) -> FieldDefinitions<'_> {
        FieldDefinitions {
            doc: self,
            next: head,
        }
    }

    /// Iterate the input value definitions chained from `head`: a field
    /// definition's arguments or an input object's fields.
    pub fn input_value_definitions(
        &self,
        head: Option<InputValueDefinitionId>,
    ) -> InputValueDefinitions<'_> {
        InputValueDefinitions {
            doc: self,
            next: head,
        }
    }
}
