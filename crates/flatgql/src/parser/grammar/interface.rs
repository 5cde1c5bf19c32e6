use crate::ast::{InterfaceTypeDefinition, InterfaceTypeDefinitionId};
use crate::parser::grammar::{directive, field};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#InterfaceTypeDefinition
///
/// *InterfaceTypeDefinition*:
///     Description? **interface** Name Directives[Const]? FieldsDefinition?
pub(crate) fn interface_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<InterfaceTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("an interface type name")?.span();
    let directives = directive::directives_opt(p, true)?;

    let fields = if p.peek() == TokenKind::LCurly {
        field::fields_definition(p)?
    } else {
        None
    };

    Ok(p.doc.add_interface_type_definition(InterfaceTypeDefinition {
        description,
        name,
        directives,
        fields,
        is_extend,
        position,
    }))
}
