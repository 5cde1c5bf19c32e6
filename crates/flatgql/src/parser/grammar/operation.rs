use crate::ast::{OperationDefinition, OperationDefinitionId, OperationType};
use crate::parser::grammar::{directive, selection, variable};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#OperationDefinition
///
/// *OperationDefinition*:
///     OperationType Name? VariableDefinitions? Directives? SelectionSet
///     SelectionSet
///
/// The bare `{ … }` shorthand is an anonymous query.
pub(crate) fn operation_definition(p: &mut Parser) -> Result<OperationDefinitionId, ParseError> {
    if p.peek() == TokenKind::LCurly {
        let position = p.peek_token().position();
        let selection_set = selection::selection_set(p)?;
        return Ok(p.doc.add_operation_definition(OperationDefinition {
            operation_type: OperationType::Query,
            name: ByteSpan::EMPTY,
            variable_definitions: vec![],
            directives: None,
            selection_set,
            position,
        }));
    }

    let keyword = p.pop();
    let operation_type = match keyword.kind() {
        TokenKind::Query => OperationType::Query,
        TokenKind::Mutation => OperationType::Mutation,
        TokenKind::Subscription => OperationType::Subscription,
        _ => return Err(p.err_expected("`query`, `mutation` or `subscription`")),
    };

    let name = if p.peek().is_name() {
        p.pop().span()
    } else {
        ByteSpan::EMPTY
    };

    let variable_definitions = variable::variable_definitions(p)?;
    let directives = directive::directives_opt(p, false)?;
    let selection_set = selection::selection_set(p)?;

    Ok(p.doc.add_operation_definition(OperationDefinition {
        operation_type,
        name,
        variable_definitions,
        directives,
        selection_set,
        position: keyword.position(),
    }))
}

#[cfg(test)]
mod test {
    use crate::ast::OperationType;
    use crate::parse_executable_document;

    #[test]
    fn it_parses_named_operations() {
        let doc = parse_executable_document(
            "query GraphQuery($graph_id: ID!, $variant: String) { service { schema } }",
        )
        .unwrap();
        let operation = doc.operation_definition(doc.executable().operations[0]);
        assert_eq!(operation.operation_type, OperationType::Query);
        assert!(doc.span_is(operation.name, "GraphQuery"));
        assert_eq!(operation.variable_definitions.len(), 2);
    }

    #[test]
    fn anonymous_shorthand_is_a_query() {
        let doc = parse_executable_document("{ dog }").unwrap();
        let operation = doc.operation_definition(doc.executable().operations[0]);
        assert_eq!(operation.operation_type, OperationType::Query);
        assert!(operation.name.is_empty());
    }

    #[test]
    fn mutations_and_subscriptions_parse() {
        let doc = parse_executable_document(
            "mutation Like { likeStory { likeCount } }\nsubscription Watch { storyUpdated }",
        )
        .unwrap();
        let operations = &doc.executable().operations;
        assert_eq!(
            doc.operation_definition(operations[0]).operation_type,
            OperationType::Mutation
        );
        assert_eq!(
            doc.operation_definition(operations[1]).operation_type,
            OperationType::Subscription
        );
    }
}
