use crate::ast::{ObjectTypeDefinition, ObjectTypeDefinitionId};
use crate::parser::grammar::{directive, field, ty};
use crate::parser::Parser;
use crate::span::ByteSpan;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#ObjectTypeDefinition
///
/// *ObjectTypeDefinition*:
///     Description? **type** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
pub(crate) fn object_type_definition(
    p: &mut Parser,
    description: ByteSpan,
    is_extend: bool,
) -> Result<ObjectTypeDefinitionId, ParseError> {
    let position = p.pop().position();
    let name = p.expect_name("an object type name")?.span();

    let implements = if p.peek() == TokenKind::Implements {
        implements_interfaces(p)?
    } else {
        vec![]
    };

    let directives = directive::directives_opt(p, true)?;

    let fields = if p.peek() == TokenKind::LCurly {
        field::fields_definition(p)?
    } else {
        None
    };

    Ok(p.doc.add_object_type_definition(ObjectTypeDefinition {
        description,
        name,
        implements,
        directives,
        fields,
        is_extend,
        position,
    }))
}

/// See: https://spec.graphql.org/October2021/#ImplementsInterfaces
///
/// *ImplementsInterfaces*:
///     **implements** **&**? NamedType
///     ImplementsInterfaces **&** NamedType
pub(crate) fn implements_interfaces(p: &mut Parser) -> Result<Vec<ByteSpan>, ParseError> {
    p.pop();

    if p.peek() == TokenKind::Amp {
        p.pop();
    }

    let mut interfaces = vec![interface_name(p)?];
    while p.peek() == TokenKind::Amp {
        p.pop();
        interfaces.push(interface_name(p)?);
    }
    Ok(interfaces)
}

fn interface_name(p: &mut Parser) -> Result<ByteSpan, ParseError> {
    ty::named_type(p, "an interface name")
}

#[cfg(test)]
mod test {
    use crate::parse_type_system;

    #[test]
    fn it_parses_implements_interfaces() {
        let doc = parse_type_system(
            "
type Business implements NamedEntity & ValuedEntity {
  name: String
}",
        )
        .unwrap();

        let object = doc.object_type_definition(doc.type_system().objects[0]);
        assert_eq!(doc.resolve_str(object.name), "Business");
        let implements: Vec<&str> = object
            .implements
            .iter()
            .map(|&span| doc.resolve_str(span))
            .collect();
        assert_eq!(implements, vec!["NamedEntity", "ValuedEntity"]);
    }

    #[test]
    fn extend_type_sets_the_flag_and_may_omit_fields() {
        let doc = parse_type_system("extend type Query implements Node").unwrap();
        let object = doc.object_type_definition(doc.type_system().objects[0]);
        assert!(object.is_extend);
        assert!(object.fields.is_none());
    }

    #[test]
    fn field_definitions_chain_in_declaration_order() {
        let doc = parse_type_system(
            "
type Dog {
  name: String!
  nickName: String
  barkVolume: Int
}",
        )
        .unwrap();

        let object = doc.object_type_definition(doc.type_system().objects[0]);
        let names: Vec<&str> = doc
            .field_definitions(object.fields)
            .map(|(_, field)| doc.resolve_str(field.name))
            .collect();
        assert_eq!(names, vec!["name", "nickName", "barkVolume"]);
    }
}
