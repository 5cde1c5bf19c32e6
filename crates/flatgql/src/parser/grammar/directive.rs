use crate::ast::{
    Directive, DirectiveDefinition, DirectiveDefinitionId, DirectiveId, DirectiveLocation,
    DirectiveSet, DirectiveSetId,
};
use crate::parser::grammar::argument;
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#Directives
///
/// *Directives[Const]*:
///     Directive[?Const]*
///
/// Returns `None` when the current token does not start a directive list.
pub(crate) fn directives_opt(
    p: &mut Parser,
    constant: bool,
) -> Result<Option<DirectiveSetId>, ParseError> {
    if p.peek() != TokenKind::At {
        return Ok(None);
    }

    let mut directives = vec![];
    while p.peek() == TokenKind::At {
        directives.push(directive(p, constant)?);
    }
    Ok(Some(p.doc.add_directive_set(DirectiveSet { directives })))
}

/// See: https://spec.graphql.org/October2021/#Directive
///
/// *Directive[Const]*:
///     **@** Name Arguments[?Const]?
fn directive(p: &mut Parser, constant: bool) -> Result<DirectiveId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("a directive name")?.span();
    let arguments = argument::arguments_opt(p, constant)?;

    Ok(p.doc.add_directive(Directive {
        name,
        arguments,
        position,
    }))
}

/// See: https://spec.graphql.org/October2021/#DirectiveDefinition
///
/// *DirectiveDefinition*:
///     Description? **directive** **@** Name ArgumentsDefinition? **on** DirectiveLocations
///
/// *DirectiveLocations*:
///     **|**? DirectiveLocation
///     DirectiveLocations **|** DirectiveLocation
pub(crate) fn directive_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<DirectiveDefinitionId, ParseError> {
    let position = p.pop().position();
    p.expect(TokenKind::At, "`@` before the directive name")?;
    let name = p.expect_name("a directive name")?.span();
    let arguments = argument::arguments_definition(p)?;
    p.expect(TokenKind::On, "`on` before the directive locations")?;

    if p.peek() == TokenKind::Pipe {
        p.pop();
    }
    let mut locations = vec![directive_location(p)?];
    while p.peek() == TokenKind::Pipe {
        p.pop();
        locations.push(directive_location(p)?);
    }

    Ok(p.doc.add_directive_definition(DirectiveDefinition {
        description,
        name,
        arguments,
        locations,
        is_extend,
        position,
    }))
}

fn directive_location(p: &mut Parser) -> Result<DirectiveLocation, ParseError> {
    if p.peek() != TokenKind::Name {
        return Err(p.err_expected("a directive location"));
    }
    let span = p.peek_token().span();
    match DirectiveLocation::from_bytes(p.doc.resolve(span)) {
        Some(location) => {
            p.pop();
            Ok(location)
        }
        None => Err(p.err_expected("a directive location")),
    }
}

#[cfg(test)]
mod test {
    use crate::ast::DirectiveLocation;
    use crate::parse_type_system;

    #[test]
    fn it_parses_directive_definitions_with_locations() {
        let doc = parse_type_system(
            "
directive @addArgumentFromContext(
  name: String!
  contextKey: String!
) on FIELD_DEFINITION | OBJECT
",
        )
        .unwrap();

        let definition = doc.directive_definition(doc.type_system().directives[0]);
        assert_eq!(doc.resolve_str(definition.name), "addArgumentFromContext");
        assert_eq!(
            definition.locations,
            vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::Object
            ]
        );
        let argument_names: Vec<&str> = doc
            .input_value_definitions(definition.arguments)
            .map(|(_, argument)| doc.resolve_str(argument.name))
            .collect();
        assert_eq!(argument_names, vec!["name", "contextKey"]);
    }

    #[test]
    fn unknown_locations_error() {
        assert!(parse_type_system("directive @bad on EVERYWHERE").is_err());
    }

    #[test]
    fn repeated_directives_parse_into_one_set() {
        let doc = parse_type_system("type Query @foo @foo { documents: [Document] }").unwrap();
        let object = doc.object_type_definition(doc.type_system().objects[0]);
        let set = doc.directive_set(object.directives.unwrap());
        assert_eq!(set.directives.len(), 2);
        let first = doc.directive(set.directives[0]);
        let second = doc.directive(set.directives[1]);
        assert!(doc.span_eq(first.name, second.name));
    }
}
