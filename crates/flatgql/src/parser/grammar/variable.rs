use crate::ast::{VariableDefinition, VariableDefinitionId};
use crate::parser::grammar::{directive, ty, value};
use crate::parser::Parser;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#VariableDefinitions
///
/// *VariableDefinitions*:
///     **(** VariableDefinition+ **)**
///
/// *VariableDefinition*:
///     Variable **:** Type DefaultValue? Directives[Const]?
///
/// Default values are constant: a variable may not default to another
/// variable.
pub(crate) fn variable_definitions(
    p: &mut Parser,
) -> Result<Vec<VariableDefinitionId>, ParseError> {
    if p.peek() != TokenKind::LParen {
        return Ok(vec![]);
    }
    p.pop();

    let mut definitions = vec![];
    while p.peek() != TokenKind::RParen {
        let variable = p.expect(TokenKind::Variable, "a `$`-prefixed variable")?;
        p.expect(TokenKind::Colon, "`:` after the variable name")?;
        let ty = ty::ty(p)?;

        let default_value = if p.peek() == TokenKind::Eq {
            p.pop();
            Some(value::value(p, true)?)
        } else {
            None
        };

        let directives = directive::directives_opt(p, true)?;

        definitions.push(p.doc.add_variable_definition(VariableDefinition {
            name: variable.span(),
            ty,
            default_value,
            directives,
            position: variable.position(),
        }));
    }
    if definitions.is_empty() {
        return Err(p.err_expected("at least one Variable Definition"));
    }
    p.pop();

    Ok(definitions)
}

#[cfg(test)]
mod test {
    use crate::parse_executable_document;

    #[test]
    fn it_parses_defaults_and_directives() {
        let doc = parse_executable_document(
            "query Q($atOtherHomes: Boolean = true @onVariable) { dog }",
        )
        .unwrap();
        let operation = doc.operation_definition(doc.executable().operations[0]);
        let variable = doc.variable_definition(operation.variable_definitions[0]);
        assert!(doc.span_is(variable.name, "atOtherHomes"));
        assert!(variable.default_value.is_some());
        assert!(variable.directives.is_some());
    }

    #[test]
    fn variable_defaults_may_not_reference_variables() {
        assert!(parse_executable_document("query Q($a: Boolean = $b) { dog }").is_err());
    }

    #[test]
    fn empty_variable_definitions_error() {
        assert!(parse_executable_document("query Q() { dog }").is_err());
    }
}
