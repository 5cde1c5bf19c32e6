use crate::ast::{SchemaDefinition, SchemaDefinitionId};
use crate::parser::grammar::directive;
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#SchemaDefinition
///
/// *SchemaDefinition*:
///     Description? **schema** Directives[Const]? **{** RootOperationTypeDefinition* **}**
pub(crate) fn schema_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<SchemaDefinitionId, ParseError> {
    let position = p.pop().position();

    let directives = directive::directives_opt(p, true)?;

    p.expect(TokenKind::LCurly, "`{` to begin the schema definition")?;

    let mut query = ByteSpan::EMPTY;
    let mut mutation = ByteSpan::EMPTY;
    let mut subscription = ByteSpan::EMPTY;

    while p.peek() != TokenKind::RCurly {
        let operation_type = p.peek();
        match operation_type {
            TokenKind::Query | TokenKind::Mutation | TokenKind::Subscription => {
                p.pop();
                p.expect(TokenKind::Colon, "`:` after the operation type")?;
                let name = p.expect_name("a root operation type name")?;
                match operation_type {
                    TokenKind::Query => query = name.span(),
                    TokenKind::Mutation => mutation = name.span(),
                    _ => subscription = name.span(),
                }
            }
            _ => return Err(p.err_expected("`query`, `mutation` or `subscription`")),
        }
    }
    p.pop();

    Ok(p.doc.add_schema_definition(SchemaDefinition {
        description,
        query,
        mutation,
        subscription,
        directives,
        is_extend,
        position,
    }))
}
