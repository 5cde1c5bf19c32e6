//! Normalization passes that rewrite executable documents in place through
//! the mutation surface.

use crate::ast::{Document, NodeRef, Selection, SelectionSetId};
use crate::lookup::{Lookup, Walker};
use crate::span::ByteSpan;
use crate::LookupError;

use indexmap::IndexMap;

/// Flatten inline fragments whose type condition cannot narrow their
/// enclosing selection set.
///
/// A fragment merges into its parent set when its condition is absent, names
/// the enclosing type itself, names an interface the enclosing object type
/// implements, or names a union the enclosing type belongs to. Child
/// selections are spliced in place, preserving order; fragments carrying
/// directives are left untouched. Splicing can surface a nested fragment in
/// a wider scope, so the rewrite repeats until no fragment merges.
pub fn merge_inline_fragments(doc: &mut Document) -> Result<(), LookupError> {
    // Resolve every selection set's backing type up front, while the walker
    // holds the document immutably.
    let mut scopes: IndexMap<SelectionSetId, ByteSpan> = IndexMap::new();
    {
        let mut walker = Walker::new(Lookup::new(doc));
        walker.walk_executable()?;
        for walked in walker.nodes() {
            if let NodeRef::SelectionSet(set) = walked.node {
                let Some(owner) = walked.parent else { continue };
                if let Ok(type_name) = walker.selection_set_type_name(set, owner) {
                    scopes.entry(set).or_insert(type_name);
                }
            }
        }
    }

    // Children appear after their parents in walk order; rewriting in
    // reverse flattens inner fragments first. Selections only ever move
    // into enclosing sets, so the scope map stays valid across rounds.
    let scopes: Vec<(SelectionSetId, ByteSpan)> = scopes.into_iter().collect();
    loop {
        let mut changed_any = false;

        for &(set, scope) in scopes.iter().rev() {

            let selections = doc.selection_set(set).selections.clone();
            let mut rewritten = Vec::with_capacity(selections.len());
            let mut changed = false;

            for selection in selections {
                match selection {
                    Selection::InlineFragment(id) => {
                        let fragment = *doc.inline_fragment(id);
                        if fragment.directives.is_none()
                            && condition_matches_scope(doc, fragment.type_condition, scope)
                        {
                            rewritten.extend_from_slice(
                                &doc.selection_set(fragment.selection_set).selections,
                            );
                            changed = true;
                        } else {
                            rewritten.push(selection);
                        }
                    }
                    other => rewritten.push(other),
                }
            }

            if changed {
                doc.replace_selections(set, rewritten);
                changed_any = true;
            }
        }

        if !changed_any {
            return Ok(());
        }
    }
}

fn condition_matches_scope(doc: &Document, condition: ByteSpan, scope: ByteSpan) -> bool {
    if condition.is_empty() || doc.span_eq(condition, scope) {
        return true;
    }
    let lookup = Lookup::new(doc);
    let condition = doc.resolve(condition);
    let scope = doc.resolve(scope);
    lookup.type_implements_interface(scope, condition) || lookup.union_has_member(condition, scope)
}
