use crate::ast::{Field, FieldDefinition, FieldDefinitionId, FieldId};
use crate::parser::grammar::{argument, description, directive, selection, ty};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#Field
///
/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
///
/// *Alias*:
///     Name **:**
pub(crate) fn field(p: &mut Parser) -> Result<FieldId, ParseError> {
    let first = p.expect_name("a field name")?;

    let (alias, name) = if p.peek() == TokenKind::Colon {
        p.pop();
        let actual = p.expect_name("a field name after the alias")?;
        (first.span(), actual.span())
    } else {
        (ByteSpan::EMPTY, first.span())
    };

    let arguments = argument::arguments_opt(p, false)?;
    let directives = directive::directives_opt(p, false)?;
    let selection_set = selection::selection_set_opt(p)?;

    Ok(p.doc.add_field(Field {
        alias,
        name,
        arguments,
        directives,
        selection_set,
        position: first.position(),
    }))
}

/// See: https://spec.graphql.org/October2021/#FieldsDefinition
///
/// *FieldsDefinition*:
///     **{** FieldDefinition+ **}**
///
/// Returns the head of the field definition chain.
pub(crate) fn fields_definition(
    p: &mut Parser,
) -> Result<Option<FieldDefinitionId>, ParseError> {
    p.expect(TokenKind::LCurly, "`{` to begin the fields definition")?;

    let mut head = None;
    let mut previous = None;
    while p.peek() != TokenKind::RCurly {
        let id = field_definition(p)?;
        match previous {
            None => head = Some(id),
            Some(previous) => p.doc.field_definition_mut(previous).next = Some(id),
        }
        previous = Some(id);
    }
    if head.is_none() {
        return Err(p.err_expected("at least one Field Definition"));
    }
    p.pop();

    Ok(head)
}

/// See: https://spec.graphql.org/October2021/#FieldDefinition
///
/// *FieldDefinition*:
///     Description? Name ArgumentsDefinition? **:** Type Directives[Const]?
fn field_definition(p: &mut Parser) -> Result<FieldDefinitionId, ParseError> {
    let description = description::description(p);
    let name_token = p.expect_name("a field name")?;
    let arguments = argument::arguments_definition(p)?;
    p.expect(TokenKind::Colon, "`:` after the field name")?;
    let ty = ty::ty(p)?;
    let directives = directive::directives_opt(p, true)?;

    Ok(p.doc.add_field_definition(FieldDefinition {
        description,
        name: name_token.span(),
        arguments,
        ty,
        directives,
        position: name_token.position(),
        next: None,
    }))
}
