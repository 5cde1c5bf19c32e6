use crate::ast::{
    Argument, ArgumentSet, ArgumentSetId, InputValueDefinition, InputValueDefinitionId,
};
use crate::parser::grammar::{description, directive, ty, value};
use crate::parser::Parser;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#Arguments
///
/// *Arguments[Const]*:
///     **(** Argument[?Const]+ **)**
///
/// Returns `None` when the current token does not start an argument list.
pub(crate) fn arguments_opt(
    p: &mut Parser,
    constant: bool,
) -> Result<Option<ArgumentSetId>, ParseError> {
    if p.peek() != TokenKind::LParen {
        return Ok(None);
    }
    p.pop();

    let mut arguments = vec![];
    while p.peek() != TokenKind::RParen {
        let name_token = p.expect_name("an argument name")?;
        p.expect(TokenKind::Colon, "`:` after the argument name")?;
        let value = value::value(p, constant)?;
        arguments.push(p.doc.add_argument(Argument {
            name: name_token.span(),
            value,
            position: name_token.position(),
        }));
    }
    if arguments.is_empty() {
        return Err(p.err_expected("at least one Argument"));
    }
    p.pop();

    Ok(Some(p.doc.add_argument_set(ArgumentSet { arguments })))
}

/// See: https://spec.graphql.org/October2021/#ArgumentsDefinition
///
/// *ArgumentsDefinition*:
///     **(** InputValueDefinition+ **)**
///
/// Returns the head of the input value definition chain, or `None` when the
/// current token does not start an arguments definition.
pub(crate) fn arguments_definition(
    p: &mut Parser,
) -> Result<Option<InputValueDefinitionId>, ParseError> {
    if p.peek() != TokenKind::LParen {
        return Ok(None);
    }
    p.pop();

    let mut head = None;
    let mut previous = None;
    while p.peek() != TokenKind::RParen {
        let id = input_value_definition(p)?;
        match previous {
            None => head = Some(id),
            Some(previous) => p.doc.input_value_definition_mut(previous).next = Some(id),
        }
        previous = Some(id);
    }
    if head.is_none() {
        return Err(p.err_expected("at least one Input Value Definition"));
    }
    p.pop();

    Ok(head)
}

/// See: https://spec.graphql.org/October2021/#InputValueDefinition
///
/// *InputValueDefinition*:
///     Description? Name **:** Type DefaultValue? Directives[Const]?
///
/// Default values are constant: variables are rejected inside them.
pub(crate) fn input_value_definition(
    p: &mut Parser,
) -> Result<InputValueDefinitionId, ParseError> {
    let description = description::description(p);
    let name_token = p.expect_name("an input value name")?;
    p.expect(TokenKind::Colon, "`:` after the input value name")?;
    let ty = ty::ty(p)?;

    let default_value = if p.peek() == TokenKind::Eq {
        p.pop();
        Some(value::value(p, true)?)
    } else {
        None
    };

    let directives = directive::directives_opt(p, true)?;

    Ok(p.doc.add_input_value_definition(InputValueDefinition {
        description,
        name: name_token.span(),
        ty,
        default_value,
        directives,
        position: name_token.position(),
        next: None,
    }))
}

#[cfg(test)]
mod test {
    use crate::ast::ValueKind;
    use crate::{parse_executable_document, parse_type_system};

    #[test]
    fn it_parses_field_arguments() {
        let doc = parse_executable_document(r#"{ user(id: 4, name: "Sparky") }"#).unwrap();
        let (_, user) = doc.fields_iter().next().unwrap();
        let set = doc.argument_set(user.arguments.unwrap());
        assert_eq!(set.arguments.len(), 2);

        let id = doc.argument(set.arguments[0]);
        assert_eq!(doc.resolve_str(id.name), "id");
        match &doc.value(id.value).kind {
            ValueKind::Int { value, .. } => assert_eq!(doc.int_value(*value), 4),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn empty_argument_lists_error() {
        assert!(parse_executable_document("{ user() }").is_err());
    }

    #[test]
    fn argument_definitions_carry_defaults_and_directives() {
        let doc = parse_type_system(
            r#"
type Query {
  dogs(first: Int = 10 @deprecated): [Dog]
}"#,
        )
        .unwrap();

        let object = doc.object_type_definition(doc.type_system().objects[0]);
        let (_, dogs) = doc.field_definitions(object.fields).next().unwrap();
        let (_, first) = doc.input_value_definitions(dogs.arguments).next().unwrap();
        assert_eq!(doc.resolve_str(first.name), "first");
        assert!(first.default_value.is_some());
        assert!(first.directives.is_some());
    }
}
