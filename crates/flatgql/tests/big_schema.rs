use flatgql::{parse_type_system, Lookup, Walker};

const BIG_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

interface Node {
  id: ID!
}

enum Status {
  DRAFT
  PUBLISHED
  ARCHIVED
}

enum AssetOrderByInput {
  id_ASC
  id_DESC
  handle_ASC
  handle_DESC
  fileName_ASC
  fileName_DESC
}

scalar DateTime
scalar Long

type Asset implements Node {
  status: Status!
  updatedAt: DateTime!
  createdAt: DateTime!
  id: ID!
  handle: String!
  fileName: String!
  height: Float
  width: Float
  size: Float
  mimeType: String
  url: String!
  colors(first: Int, skip: Int): [Color!]
}

type Color implements Node {
  status: Status!
  id: ID!
  name: String!
  hex: String!
  assets(first: Int, skip: Int): [Asset!]
}

type Location implements Node {
  status: Status!
  id: ID!
  latitude: Float!
  longitude: Float!
}

type AggregateAsset {
  count: Int!
}

type AssetConnection {
  aggregate: AggregateAsset!
  edges: [AssetEdge]!
}

type AssetEdge {
  node: Asset!
  cursor: String!
}

input AssetWhereInput {
  id: ID
  id_in: [ID!]
  handle: String
  handle_contains: String
  status: Status
}

type Query {
  assets(where: AssetWhereInput, orderBy: AssetOrderByInput, first: Int, skip: Int): [Asset!]!
  asset(where: AssetWhereInput!): Asset
  assetsConnection(where: AssetWhereInput, first: Int): AssetConnection!
  colors(first: Int, skip: Int): [Color!]!
  locations(first: Int, skip: Int): [Location!]!
  node(id: ID!): Node
}

type Mutation {
  createAsset(status: Status!, handle: String!, fileName: String!): Asset
  deleteAsset(id: ID!): Asset
}
"#;

fn selection_set_type_of(doc: &flatgql::Document, walker: &Walker, field_name: &str) -> String {
    let (field, node) = walker
        .fields_iterable()
        .find(|&(field, _)| doc.span_is(doc.field(field).name, field_name))
        .expect("field not walked");
    let set = doc
        .field(field)
        .selection_set
        .expect("field has no selection set");
    let type_name = walker.selection_set_type_name(set, node).unwrap();
    doc.resolve_str(type_name).to_string()
}

#[test]
fn assets_selection_set_is_typed_asset() {
    let mut doc = parse_type_system(BIG_SCHEMA).unwrap();
    doc.parse_executable("{assets{id}}").unwrap();

    let mut walker = Walker::new(Lookup::new(&doc));
    walker.walk_executable().unwrap();

    assert_eq!(selection_set_type_of(&doc, &walker, "assets"), "Asset");
}

#[test]
fn connection_fields_resolve_through_nested_objects() {
    let mut doc = parse_type_system(BIG_SCHEMA).unwrap();
    doc.parse_executable("{ assetsConnection { edges { node { colors { hex } } } } }")
        .unwrap();

    let mut walker = Walker::new(Lookup::new(&doc));
    walker.walk_executable().unwrap();

    assert_eq!(
        selection_set_type_of(&doc, &walker, "assetsConnection"),
        "AssetConnection"
    );
    assert_eq!(selection_set_type_of(&doc, &walker, "edges"), "AssetEdge");
    assert_eq!(selection_set_type_of(&doc, &walker, "node"), "Asset");
    assert_eq!(selection_set_type_of(&doc, &walker, "colors"), "Color");

    let (_, hex_node) = walker
        .fields_iterable()
        .find(|&(field, _)| doc.span_is(doc.field(field).name, "hex"))
        .unwrap();
    let path: Vec<&str> = walker
        .field_path(hex_node)
        .iter()
        .map(|&span| doc.resolve_str(span))
        .collect();
    assert_eq!(path, vec!["colors", "node", "edges", "assetsConnection"]);
}

#[test]
fn mutation_roots_resolve_through_the_schema_definition() {
    let mut doc = parse_type_system(BIG_SCHEMA).unwrap();
    doc.parse_executable("mutation M { createAsset(status: DRAFT, handle: \"h\", fileName: \"f\") { id } }")
        .unwrap();

    let mut walker = Walker::new(Lookup::new(&doc));
    walker.walk_executable().unwrap();

    assert_eq!(selection_set_type_of(&doc, &walker, "createAsset"), "Asset");
}

#[test]
fn big_schema_printing_reaches_a_fixpoint() {
    let doc = parse_type_system(BIG_SCHEMA).unwrap();
    let printed = flatgql::printer::print(&doc);
    let reparsed = parse_type_system(&printed).unwrap();
    assert_eq!(flatgql::printer::print(&reparsed), printed);
}

#[test]
fn ids_stay_stable_across_parses_and_mutations() {
    let mut doc = parse_type_system(BIG_SCHEMA).unwrap();
    doc.parse_executable("{ assets { id } }").unwrap();

    let (asset_field, _) = doc
        .fields_iter()
        .find(|(_, field)| doc.span_is(field.name, "assets"))
        .unwrap();
    let name_before = doc.field(asset_field).name;

    // grow the document in every way available
    doc.parse_executable("query More { colors { hex } }").unwrap();
    doc.extend_type_system("extend type Query { extraField: Int }")
        .unwrap();
    let literal = doc.put_literal("handle");
    assert_eq!(doc.resolve_str(literal), "handle");

    assert_eq!(doc.field(asset_field).name, name_before);
    assert!(doc.span_is(doc.field(asset_field).name, "assets"));

    let lookup = Lookup::new(&doc);
    assert!(lookup
        .field_definition_in_type(b"Query", b"extraField")
        .is_some());
}
