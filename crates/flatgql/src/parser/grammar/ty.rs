use crate::ast::{Type, TypeId, TypeKind};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#Type
///
/// *Type*:
///     NamedType
///     ListType
///         **[** Type **]**
///     NonNullType
///         NamedType **!**
///         ListType **!**
///
/// A trailing `!` wraps the `Named` or `List` record just parsed in a
/// `NonNull` record; `NonNull` never wraps `NonNull` because each `!` is
/// consumed exactly once.
pub(crate) fn ty(p: &mut Parser) -> Result<TypeId, ParseError> {
    let token = p.peek_token();
    let inner = match token.kind() {
        TokenKind::LBracket => {
            p.pop();
            p.descend()?;
            let item = ty(p)?;
            p.ascend();
            p.expect(TokenKind::RBracket, "`]` to close the list type")?;
            p.doc.add_type(Type {
                kind: TypeKind::List(item),
                position: token.position(),
            })
        }
        kind if kind.is_name() => {
            p.pop();
            p.doc.add_type(Type {
                kind: TypeKind::Named(token.span()),
                position: token.position(),
            })
        }
        _ => return Err(p.err_expected("a type")),
    };

    if p.peek() == TokenKind::Bang {
        p.pop();
        return Ok(p.doc.add_type(Type {
            kind: TypeKind::NonNull(inner),
            position: token.position(),
        }));
    }
    Ok(inner)
}

/// See: https://spec.graphql.org/October2021/#NamedType
///
/// *NamedType*:
///     Name
pub(crate) fn named_type(p: &mut Parser, expected: &'static str) -> Result<ByteSpan, ParseError> {
    Ok(p.expect_name(expected)?.span())
}

#[cfg(test)]
mod test {
    use crate::ast::TypeKind;
    use crate::{parse_type_system, ParseError};

    #[test]
    fn it_parses_nested_wrapped_types() {
        let doc = parse_type_system("type Query { custIds: [Int!]! }").unwrap();
        let object = doc.object_type_definition(doc.type_system().objects[0]);
        let (_, field) = doc.field_definitions(object.fields).next().unwrap();

        // [Int!]! is NonNull(List(NonNull(Named)))
        let outer = doc.ty(field.ty);
        let list = match outer.kind {
            TypeKind::NonNull(inner) => doc.ty(inner),
            other => panic!("expected NonNull, got {other:?}"),
        };
        let item = match list.kind {
            TypeKind::List(inner) => doc.ty(inner),
            other => panic!("expected List, got {other:?}"),
        };
        let named = match item.kind {
            TypeKind::NonNull(inner) => doc.ty(inner),
            other => panic!("expected NonNull, got {other:?}"),
        };
        assert!(matches!(named.kind, TypeKind::Named(name) if doc.span_is(name, "Int")));

        assert!(doc.span_is(doc.unwrapped_named_type(field.ty), "Int"));
    }

    #[test]
    fn deeply_nested_list_types_hit_the_recursion_limit() {
        let nested = format!(
            "type Query {{ f: {}Int{} }}",
            "[".repeat(5_000),
            "]".repeat(5_000)
        );
        let err = parse_type_system(&nested).unwrap_err();
        assert!(matches!(err, ParseError::RecursionLimit { .. }));
    }
}
