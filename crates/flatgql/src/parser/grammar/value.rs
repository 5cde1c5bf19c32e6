use crate::ast::{ObjectField, Value, ValueId, ValueKind};
use crate::parser::Parser;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#Value
///
/// *Value[Const]*:
///     [~Const] Variable
///     IntValue
///     FloatValue
///     StringValue
///     BooleanValue
///     NullValue
///     EnumValue
///     ListValue[?Const]
///     ObjectValue[?Const]
///
/// With `constant` set, variables are rejected; the parser records both the
/// decoded primitive and the raw span so printers can reconstruct source.
pub(crate) fn value(p: &mut Parser, constant: bool) -> Result<ValueId, ParseError> {
    let token = p.peek_token();
    let position = token.position();

    let kind = match token.kind() {
        TokenKind::Variable => {
            if constant {
                return Err(p.err_expected("a constant Value"));
            }
            p.pop();
            ValueKind::Variable(token.span())
        }
        TokenKind::Int => {
            p.pop();
            let parsed: i64 = p
                .doc
                .resolve_str(token.span())
                .parse()
                .map_err(|_| ParseError::IntegerOverflow { position })?;
            ValueKind::Int {
                raw: token.span(),
                value: p.doc.add_int(parsed),
            }
        }
        TokenKind::Float => {
            p.pop();
            let parsed: f64 = p
                .doc
                .resolve_str(token.span())
                .parse()
                .unwrap_or(f64::INFINITY);
            if !parsed.is_finite() {
                return Err(ParseError::FloatOverflow { position });
            }
            ValueKind::Float {
                raw: token.span(),
                value: p.doc.add_float(parsed),
            }
        }
        TokenKind::StringValue => {
            p.pop();
            ValueKind::String {
                content: token.span(),
                block: false,
            }
        }
        TokenKind::BlockString => {
            p.pop();
            ValueKind::String {
                content: token.span(),
                block: true,
            }
        }
        TokenKind::True => {
            p.pop();
            ValueKind::Boolean(true)
        }
        TokenKind::False => {
            p.pop();
            ValueKind::Boolean(false)
        }
        TokenKind::Null => {
            p.pop();
            ValueKind::Null
        }
        TokenKind::LBracket => return list_value(p, constant),
        TokenKind::LCurly => return object_value(p, constant),
        kind if kind.is_name() => {
            p.pop();
            ValueKind::Enum(token.span())
        }
        _ => return Err(p.err_expected("a Value")),
    };

    Ok(p.doc.add_value(Value { kind, position }))
}

/// See: https://spec.graphql.org/October2021/#ListValue
///
/// *ListValue[Const]*:
///     **[** **]**
///     **[** Value[?Const]+ **]**
fn list_value(p: &mut Parser, constant: bool) -> Result<ValueId, ParseError> {
    let position = p.pop().position();
    p.descend()?;

    let mut values = vec![];
    while p.peek() != TokenKind::RBracket {
        values.push(value(p, constant)?);
    }
    p.pop();
    p.ascend();

    Ok(p.doc.add_value(Value {
        kind: ValueKind::List(values),
        position,
    }))
}

/// See: https://spec.graphql.org/October2021/#ObjectValue
///
/// *ObjectValue[Const]*:
///     **{** **}**
///     **{** ObjectField[?Const]+ **}**
fn object_value(p: &mut Parser, constant: bool) -> Result<ValueId, ParseError> {
    let position = p.pop().position();
    p.descend()?;

    let mut fields = vec![];
    while p.peek() != TokenKind::RCurly {
        let name_token = p.expect_name("an object field name")?;
        p.expect(TokenKind::Colon, "`:` after the object field name")?;
        let value = value(p, constant)?;
        fields.push(p.doc.add_object_field(ObjectField {
            name: name_token.span(),
            value,
            position: name_token.position(),
        }));
    }
    p.pop();
    p.ascend();

    Ok(p.doc.add_value(Value {
        kind: ValueKind::Object(fields),
        position,
    }))
}

#[cfg(test)]
mod test {
    use crate::ast::ValueKind;
    use crate::parse_executable_document;

    fn first_argument_value(input: &str) -> (crate::Document, crate::ast::ValueId) {
        let doc = parse_executable_document(input).unwrap();
        let (_, field) = doc.fields_iter().next().unwrap();
        let set = doc.argument_set(field.arguments.unwrap());
        let argument = doc.argument(set.arguments[0]);
        let value = argument.value;
        (doc, value)
    }

    #[test]
    fn it_decodes_primitives_into_side_pools() {
        let (doc, value) = first_argument_value("{ user(id: -42) }");
        match &doc.value(value).kind {
            ValueKind::Int { raw, value } => {
                assert_eq!(doc.int_value(*value), -42);
                assert_eq!(doc.resolve_str(*raw), "-42");
            }
            other => panic!("unexpected value: {other:?}"),
        }

        let (doc, value) = first_argument_value("{ user(score: 1.34e2) }");
        match &doc.value(value).kind {
            ValueKind::Float { raw, value } => {
                assert_eq!(doc.float_value(*value), 134.0);
                assert_eq!(doc.resolve_str(*raw), "1.34e2");
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn it_parses_nested_lists_and_objects() {
        let (doc, value) = first_argument_value(
            r#"{ user(input: { names: ["one", "two"], active: true, note: null, mode: FAST }) }"#,
        );
        let fields = match &doc.value(value).kind {
            ValueKind::Object(fields) => fields,
            other => panic!("unexpected value: {other:?}"),
        };
        assert_eq!(fields.len(), 4);

        let names = doc.object_field(fields[0]);
        assert_eq!(doc.resolve_str(names.name), "names");
        match &doc.value(names.value).kind {
            ValueKind::List(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected value: {other:?}"),
        }

        let mode = doc.object_field(fields[3]);
        match &doc.value(mode.value).kind {
            ValueKind::Enum(name) => assert!(doc.span_is(*name, "FAST")),
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn integer_overflow_is_reported() {
        let err = parse_executable_document("{ user(id: 99999999999999999999) }").unwrap_err();
        assert!(matches!(err, crate::ParseError::IntegerOverflow { .. }));
    }

    #[test]
    fn variables_parse_in_non_const_positions() {
        let (doc, value) = first_argument_value("{ user(id: $userId) }");
        match &doc.value(value).kind {
            ValueKind::Variable(name) => assert!(doc.span_is(*name, "userId")),
            other => panic!("unexpected value: {other:?}"),
        }
    }
}
