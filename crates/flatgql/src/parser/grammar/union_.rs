use crate::ast::{UnionTypeDefinition, UnionTypeDefinitionId};
use crate::parser::grammar::{directive, ty};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#UnionTypeDefinition
///
/// *UnionTypeDefinition*:
///     Description? **union** Name Directives[Const]? UnionMemberTypes?
///
/// *UnionMemberTypes*:
///     **=** **|**? NamedType
///     UnionMemberTypes **|** NamedType
pub(crate) fn union_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<UnionTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("a union type name")?.span();
    let directives = directive::directives_opt(p, true)?;

    let mut members = vec![];
    if p.peek() == TokenKind::Eq {
        p.pop();
        if p.peek() == TokenKind::Pipe {
            p.pop();
        }
        members.push(ty::named_type(p, "a union member type")?);
        while p.peek() == TokenKind::Pipe {
            p.pop();
            members.push(ty::named_type(p, "a union member type")?);
        }
    }

    Ok(p.doc.add_union_type_definition(UnionTypeDefinition {
        description,
        name,
        directives,
        members,
        is_extend,
        position,
    }))
}
