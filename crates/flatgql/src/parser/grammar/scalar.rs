use crate::ast::{ScalarTypeDefinition, ScalarTypeDefinitionId};
use crate::parser::grammar::directive;
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::ParseError;

/// See: https://spec.graphql.org/October2021/#ScalarTypeDefinition
///
/// *ScalarTypeDefinition*:
///     Description? **scalar** Name Directives[Const]?
pub(crate) fn scalar_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<ScalarTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("a scalar type name")?.span();
    let directives = directive::directives_opt(p, true)?;

    Ok(p.doc.add_scalar_type_definition(ScalarTypeDefinition {
        description,
        name,
        directives,
        is_extend,
        position,
    }))
}
