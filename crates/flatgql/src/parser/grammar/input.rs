use crate::ast::{InputObjectTypeDefinition, InputObjectTypeDefinitionId};
use crate::parser::grammar::{argument, directive};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#InputObjectTypeDefinition
///
/// *InputObjectTypeDefinition*:
///     Description? **input** Name Directives[Const]? InputFieldsDefinition?
pub(crate) fn input_object_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<InputObjectTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("an input object type name")?.span();
    let directives = directive::directives_opt(p, true)?;

    let mut input_fields = None;
    if p.peek() == TokenKind::LCurly {
        p.pop();
        let mut previous = None;
        while p.peek() != TokenKind::RCurly {
            let id = argument::input_value_definition(p)?;
            match previous {
                None => input_fields = Some(id),
                Some(previous) => p.doc.input_value_definition_mut(previous).next = Some(id),
            }
            previous = Some(id);
        }
        if input_fields.is_none() {
            return Err(p.err_expected("at least one Input Value Definition"));
        }
        p.pop();
    }

    Ok(p.doc
        .add_input_object_type_definition(InputObjectTypeDefinition {
            description,
            name,
            directives,
            input_fields,
            is_extend,
            position,
        }))
}
