//! A miniature validation rule in the shape downstream rule engines use:
//! after a walk, the rule reads every node uniformly through the document's
//! property accessors and returns a structured result. An invalid document
//! is a successful rule run, never an error.

use flatgql::{parse_type_system, Document, Lookup, Position, Walker};

#[derive(Debug, Default)]
struct RuleResult {
    valid: bool,
    subject: Option<String>,
    offending_name: Option<String>,
    position: Option<Position>,
}

/// Two directives with the same name annotating one node make that location
/// invalid.
fn directives_are_unique_per_location(doc: &Document, walker: &Walker) -> RuleResult {
    for walked in walker.nodes() {
        let Some(set) = doc.node_directives(walked.node) else {
            continue;
        };
        let directives = &doc.directive_set(set).directives;
        for (index, &left) in directives.iter().enumerate() {
            let name = doc.directive(left).name;
            for &right in &directives[index + 1..] {
                if doc.span_eq(name, doc.directive(right).name) {
                    return RuleResult {
                        valid: false,
                        subject: doc
                            .node_name(walked.node)
                            .map(|subject| doc.resolve_str(subject).to_string()),
                        offending_name: Some(doc.resolve_str(name).to_string()),
                        position: doc.node_position(walked.node),
                    };
                }
            }
        }
    }
    RuleResult {
        valid: true,
        ..RuleResult::default()
    }
}

fn run(input: &str) -> RuleResult {
    let doc = parse_type_system(input).unwrap();
    let mut walker = Walker::new(Lookup::new(&doc));
    walker.walk_type_system().unwrap();
    directives_are_unique_per_location(&doc, &walker)
}

#[test]
fn unique_directives_are_valid() {
    assert!(run("type Query { documents: [Document] @foo }").valid);
}

#[test]
fn repeated_directives_on_a_field_are_invalid() {
    let result = run("type Query { documents: [Document] @foo @foo }");
    assert!(!result.valid);
    assert_eq!(result.subject.as_deref(), Some("documents"));
    assert_eq!(result.offending_name.as_deref(), Some("foo"));
    assert_eq!(result.position.map(|position| position.line), Some(1));
}

#[test]
fn repeated_directives_on_a_type_are_invalid() {
    let result = run("type Query @foo @foo { documents: [Document] }");
    assert!(!result.valid);
    assert_eq!(result.subject.as_deref(), Some("Query"));
}

#[test]
fn distinct_directives_are_valid() {
    assert!(run("type Query { documents: [Document] @foo @bar }").valid);
}

#[test]
fn the_same_directive_at_different_locations_is_valid() {
    assert!(run("type Query @foo { documents: [Document] @foo }").valid);
}
