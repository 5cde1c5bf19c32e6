use crate::ast::{Selection, SelectionSet, SelectionSetId};
use crate::parser::grammar::{field, fragment};
use crate::parser::Parser;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#SelectionSet
///
/// *SelectionSet*:
///     **{** Selection+ **}**
///
/// *Selection*:
///     Field
///     FragmentSpread
///     InlineFragment
///
/// Source order is preserved across all three selection kinds.
pub(crate) fn selection_set(p: &mut Parser) -> Result<SelectionSetId, ParseError> {
    let open = p.expect(TokenKind::LCurly, "`{` to begin a selection set")?;
    p.descend()?;

    let mut selections = vec![];
    loop {
        match p.peek() {
            TokenKind::RCurly => {
                if selections.is_empty() {
                    return Err(p.err_expected("at least one Selection"));
                }
                p.pop();
                break;
            }
            TokenKind::Spread => selections.push(fragment::spread_or_inline(p)?),
            kind if kind.is_name() => selections.push(Selection::Field(field::field(p)?)),
            _ => return Err(p.err_expected("a Selection")),
        }
    }
    p.ascend();

    Ok(p.doc.add_selection_set(SelectionSet {
        selections,
        position: open.position(),
    }))
}

/// An optional selection set, present when the current token is `{`.
pub(crate) fn selection_set_opt(p: &mut Parser) -> Result<Option<SelectionSetId>, ParseError> {
    if p.peek() == TokenKind::LCurly {
        Ok(Some(selection_set(p)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod test {
    use crate::ast::Selection;
    use crate::parse_executable_document;

    #[test]
    fn selection_order_is_preserved_across_kinds() {
        let doc = parse_executable_document(
            "
{
    animal
    ...snackSelection
    ... on Pet { playmates { count } }
    treat
}",
        )
        .unwrap();

        let operation = doc.operation_definition(doc.executable().operations[0]);
        let selections = &doc.selection_set(operation.selection_set).selections;
        assert_eq!(selections.len(), 4);
        assert!(matches!(selections[0], Selection::Field(_)));
        assert!(matches!(selections[1], Selection::FragmentSpread(_)));
        assert!(matches!(selections[2], Selection::InlineFragment(_)));
        assert!(matches!(selections[3], Selection::Field(_)));

        match selections[1] {
            Selection::FragmentSpread(id) => {
                assert!(doc.span_is(doc.fragment_spread(id).name, "snackSelection"));
            }
            _ => unreachable!(),
        }
        match selections[2] {
            Selection::InlineFragment(id) => {
                assert!(doc.span_is(doc.inline_fragment(id).type_condition, "Pet"));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn it_errors_when_selection_set_is_empty() {
        assert!(parse_executable_document("query($foo: Int) {}").is_err());
    }
}
