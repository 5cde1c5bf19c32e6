use crate::ast::{EnumTypeDefinition, EnumTypeDefinitionId, EnumValueDefinition};
use crate::parser::grammar::{description, directive};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#EnumTypeDefinition
///
/// *EnumTypeDefinition*:
///     Description? **enum** Name Directives[Const]? EnumValuesDefinition?
pub(crate) fn enum_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<EnumTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("an enum type name")?.span();
    let directives = directive::directives_opt(p, true)?;

    let mut values = vec![];
    if p.peek() == TokenKind::LCurly {
        p.pop();
        while p.peek() != TokenKind::RCurly {
            values.push(enum_value_definition(p)?);
        }
        if values.is_empty() {
            return Err(p.err_expected("at least one Enum Value Definition"));
        }
        p.pop();
    }

    Ok(p.doc.add_enum_type_definition(EnumTypeDefinition {
        description,
        name,
        directives,
        values,
        is_extend,
        position,
    }))
}

/// See: https://spec.graphql.org/October2021/#EnumValueDefinition
///
/// *EnumValueDefinition*:
///     Description? EnumValue Directives[Const]?
///
/// An enum value is a Name, but not `true`, `false` or `null`.
fn enum_value_definition(
    p: &mut Parser,
) -> Result<crate::ast::EnumValueDefinitionId, ParseError> {
    let description = description::description(p);

    if matches!(
        p.peek(),
        TokenKind::True | TokenKind::False | TokenKind::Null
    ) {
        return Err(p.err_expected("an Enum Value that is not `true`, `false` or `null`"));
    }
    let name_token = p.expect_name("an Enum Value")?;
    let directives = directive::directives_opt(p, true)?;

    Ok(p.doc.add_enum_value_definition(EnumValueDefinition {
        description,
        name: name_token.span(),
        directives,
        position: name_token.position(),
    }))
}

#[cfg(test)]
mod test {
    use crate::parse_type_system;

    #[test]
    fn it_parses_enum_values_in_order() {
        let doc = parse_type_system("enum Command { SIT DOWN HEEL }").unwrap();
        let definition = doc.enum_type_definition(doc.type_system().enums[0]);
        let values: Vec<&str> = definition
            .values
            .iter()
            .map(|&id| doc.resolve_str(doc.enum_value_definition(id).name))
            .collect();
        assert_eq!(values, vec!["SIT", "DOWN", "HEEL"]);
    }

    #[test]
    fn reserved_literals_are_not_enum_values() {
        assert!(parse_type_system("enum Bad { true }").is_err());
        assert!(parse_type_system("enum Bad { null }").is_err());
    }
}
