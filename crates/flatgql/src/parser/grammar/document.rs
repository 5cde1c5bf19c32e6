use crate::parser::grammar::{
    description, directive, enum_, fragment, input, interface, object, operation, scalar, schema,
    union_,
};
use crate::parser::Parser;
use crate::{ParseError, TokenKind};

/// See: https://spec.graphql.org/October2021/#TypeSystemDocument
///
/// *TypeSystemDocument*:
///     TypeSystemDefinitionOrExtension*
pub(crate) fn type_system_document(p: &mut Parser) -> Result<(), ParseError> {
    while p.peek() != TokenKind::Eof {
        definition(p)?;
    }
    Ok(())
}

/// A single type-system definition: an optional description, an optional
/// `extend`, then the definition keyword.
fn definition(p: &mut Parser) -> Result<(), ParseError> {
    let description = description::description(p);

    let is_extend = if p.peek() == TokenKind::Extend {
        p.pop();
        true
    } else {
        false
    };

    match p.peek() {
        TokenKind::Schema => {
            let id = schema::schema_definition(p, description, is_extend)?;
            p.doc.type_system.schemas.push(id);
        }
        TokenKind::Scalar => {
            let id = scalar::scalar_type_definition(p, description, is_extend)?;
            p.doc.type_system.scalars.push(id);
        }
        TokenKind::Type => {
            let id = object::object_type_definition(p, description, is_extend)?;
            p.doc.type_system.objects.push(id);
        }
        TokenKind::Interface => {
            let id = interface::interface_type_definition(p, description, is_extend)?;
            p.doc.type_system.interfaces.push(id);
        }
        TokenKind::Union => {
            let id = union_::union_type_definition(p, description, is_extend)?;
            p.doc.type_system.unions.push(id);
        }
        TokenKind::Enum => {
            let id = enum_::enum_type_definition(p, description, is_extend)?;
            p.doc.type_system.enums.push(id);
        }
        TokenKind::Input => {
            let id = input::input_object_type_definition(p, description, is_extend)?;
            p.doc.type_system.input_objects.push(id);
        }
        TokenKind::Directive => {
            let id = directive::directive_definition(p, description, is_extend)?;
            p.doc.type_system.directives.push(id);
        }
        _ => return Err(p.err_expected("a type system definition")),
    }
    Ok(())
}

/// See: https://spec.graphql.org/October2021/#ExecutableDocument
///
/// *ExecutableDocument*:
///     ExecutableDefinition*
pub(crate) fn executable_document(p: &mut Parser) -> Result<(), ParseError> {
    loop {
        match p.peek() {
            TokenKind::Eof => return Ok(()),
            TokenKind::Query
            | TokenKind::Mutation
            | TokenKind::Subscription
            | TokenKind::LCurly => {
                let id = operation::operation_definition(p)?;
                p.doc.executable.operations.push(id);
            }
            TokenKind::Fragment => {
                let id = fragment::fragment_definition(p)?;
                p.doc.executable.fragments.push(id);
            }
            _ => return Err(p.err_expected("an operation or fragment definition")),
        }
    }
}
