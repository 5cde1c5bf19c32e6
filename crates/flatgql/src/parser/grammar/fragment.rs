use crate::ast::{
    FragmentDefinition, FragmentDefinitionId, FragmentSpread, InlineFragment, Selection,
};
use crate::parser::grammar::{directive, selection, ty};
use crate::parser::Parser;
use crate::span::{ByteSpan, Position};
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#FragmentDefinition
///
/// *FragmentDefinition*:
///     **fragment** FragmentName TypeCondition Directives? SelectionSet
///
/// A fragment name is any name except `on`.
pub(crate) fn fragment_definition(p: &mut Parser) -> Result<FragmentDefinitionId, ParseError> {
    let position = p.pop().position();

    if p.peek() == TokenKind::On {
        return Err(p.err_expected("a fragment name other than `on`"));
    }
    let name = p.expect_name("a fragment name")?.span();

    p.expect(TokenKind::On, "`on` before the type condition")?;
    let type_condition = ty::named_type(p, "a type condition")?;
    let directives = directive::directives_opt(p, false)?;
    let selection_set = selection::selection_set(p)?;

    Ok(p.doc.add_fragment_definition(FragmentDefinition {
        name,
        type_condition,
        directives,
        selection_set,
        position,
    }))
}

/// Dispatch after a `...` token: `on`, `{` and `@` open an inline fragment,
/// a name is a fragment spread.
///
/// See: https://spec.graphql.org/October2021/#FragmentSpread
/// See: https://spec.graphql.org/October2021/#InlineFragment
pub(crate) fn spread_or_inline(p: &mut Parser) -> Result<Selection, ParseError> {
    let spread = p.pop();
    match p.peek() {
        TokenKind::On | TokenKind::LCurly | TokenKind::At => {
            inline_fragment(p, spread.position())
        }
        kind if kind.is_name() => fragment_spread(p, spread.position()),
        _ => Err(p.err_expected("an Inline Fragment or a Fragment Spread")),
    }
}

/// *InlineFragment*:
///     **...** TypeCondition? Directives? SelectionSet
fn inline_fragment(p: &mut Parser, position: Position) -> Result<Selection, ParseError> {
    let type_condition = if p.peek() == TokenKind::On {
        p.pop();
        ty::named_type(p, "a type condition")?
    } else {
        ByteSpan::EMPTY
    };
    let directives = directive::directives_opt(p, false)?;
    let selection_set = selection::selection_set(p)?;

    Ok(Selection::InlineFragment(p.doc.add_inline_fragment(
        InlineFragment {
            type_condition,
            directives,
            selection_set,
            position,
        },
    )))
}

/// *FragmentSpread*:
///     **...** FragmentName Directives?
fn fragment_spread(p: &mut Parser, position: Position) -> Result<Selection, ParseError> {
    let name = p.expect_name("a fragment name")?.span();
    let directives = directive::directives_opt(p, false)?;

    Ok(Selection::FragmentSpread(p.doc.add_fragment_spread(
        FragmentSpread {
            name,
            directives,
            position,
        },
    )))
}

#[cfg(test)]
mod test {
    use crate::ast::Selection;
    use crate::parse_executable_document;

    #[test]
    fn it_parses_fragment_definitions() {
        let doc = parse_executable_document(
            "fragment DogFields on Dog @skip(if: false) { name }",
        )
        .unwrap();
        let fragment = doc.fragment_definition(doc.executable().fragments[0]);
        assert!(doc.span_is(fragment.name, "DogFields"));
        assert!(doc.span_is(fragment.type_condition, "Dog"));
        assert!(fragment.directives.is_some());
    }

    #[test]
    fn bare_spread_without_condition_is_an_inline_fragment() {
        let doc = parse_executable_document("{ dog { ... { name } } }").unwrap();
        let (_, dog) = doc
            .fields_iter()
            .find(|(_, f)| doc.span_is(f.name, "dog"))
            .unwrap();
        let selections = &doc.selection_set(dog.selection_set.unwrap()).selections;
        match selections[0] {
            Selection::InlineFragment(id) => {
                assert!(doc.inline_fragment(id).type_condition.is_empty());
            }
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn directives_alone_open_an_inline_fragment() {
        let doc = parse_executable_document("{ ... @include(if: $c) { name } }").unwrap();
        let operation = doc.operation_definition(doc.executable().operations[0]);
        let selections = &doc.selection_set(operation.selection_set).selections;
        assert!(matches!(selections[0], Selection::InlineFragment(_)));
    }

    #[test]
    fn fragment_may_not_be_named_on() {
        assert!(parse_executable_document("fragment on on Dog { name }").is_err());
    }
}
