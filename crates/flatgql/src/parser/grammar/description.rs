use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::TokenKind;

/// See: https://spec.graphql.org/October2021/#Description
///
/// *Description*:
///     StringValue
///
/// A string (ordinary or block) immediately preceding a definition keyword
/// is absorbed as that definition's description. A `#` comment on the line
/// before the definition serves as a fallback description when no string is
/// present.
pub(crate) fn description(p: &mut Parser) -> ByteSpan {
    match p.peek() {
        TokenKind::StringValue | TokenKind::BlockString => p.pop().span(),
        _ => p.comment_description(),
    }
}

#[cfg(test)]
mod test {
    use crate::parse_type_system;

    #[test]
    fn block_string_descriptions_are_absorbed() {
        let doc = parse_type_system(
            r#"
"""
A simple scalar.
"""
scalar DateTime
"#,
        )
        .unwrap();
        let scalar = doc.scalar_type_definition(doc.type_system().scalars[0]);
        assert_eq!(
            doc.decode_string(scalar.description, true),
            "A simple scalar."
        );
    }

    #[test]
    fn comment_descriptions_are_absorbed() {
        let doc = parse_type_system("# the root query type\ntype Query { dog: Dog }").unwrap();
        let object = doc.object_type_definition(doc.type_system().objects[0]);
        assert_eq!(doc.resolve_str(object.description), " the root query type");
    }

    #[test]
    fn string_descriptions_win_over_comments() {
        let doc =
            parse_type_system("# ignored\n\"kept\"\ntype Query { dog: Dog }").unwrap();
        let object = doc.object_type_definition(doc.type_system().objects[0]);
        assert_eq!(doc.resolve_str(object.description), "kept");
    }
}
