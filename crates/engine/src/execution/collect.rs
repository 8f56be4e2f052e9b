use std::collections::HashSet;

use async_graphql_parser::{
    types::{Directive, Field, Selection, SelectionSet},
    Positioned,
};
use async_graphql_value::{ConstValue, Value, Variables};
use engine_schema::ObjectDefinition;
use indexmap::IndexMap;

use super::ExecutionContext;

/// Field occurrences grouped by response key, in the order the keys were first encountered.
pub(crate) type GroupedFields<'a> = IndexMap<&'a str, Vec<&'a Positioned<Field>>>;

/// Collects the fields selected on `object` from one or more selection sets, typically every
/// occurrence of a field merged under the same response key.
pub(crate) fn collect_fields<'a>(
    ctx: &ExecutionContext<'a>,
    object: ObjectDefinition<'_>,
    selection_sets: impl IntoIterator<Item = &'a SelectionSet>,
) -> GroupedFields<'a> {
    let mut collector = FieldCollector {
        ctx,
        object,
        grouped: IndexMap::new(),
        visited_fragments: HashSet::new(),
    };
    for selection_set in selection_sets {
        collector.collect(selection_set);
    }
    collector.grouped
}

struct FieldCollector<'c, 'a, 'o> {
    ctx: &'c ExecutionContext<'a>,
    object: ObjectDefinition<'o>,
    grouped: GroupedFields<'a>,
    visited_fragments: HashSet<&'a str>,
}

impl<'a> FieldCollector<'_, 'a, '_> {
    fn collect(&mut self, selection_set: &'a SelectionSet) {
        for selection in &selection_set.items {
            if !should_include(selection.node.directives(), self.ctx.variables) {
                continue;
            }

            match &selection.node {
                Selection::Field(field) => {
                    self.grouped
                        .entry(field.node.response_key().node.as_str())
                        .or_default()
                        .push(field);
                }
                Selection::FragmentSpread(spread) => {
                    let name = spread.node.fragment_name.node.as_str();
                    if !self.visited_fragments.insert(name) {
                        continue;
                    }
                    let Some(fragment) = self.ctx.document.fragments.get(name) else {
                        tracing::trace!("Unknown fragment {name}");
                        continue;
                    };
                    if self.does_type_condition_match(fragment.node.type_condition.node.on.node.as_str()) {
                        self.collect(&fragment.node.selection_set.node);
                    }
                }
                Selection::InlineFragment(fragment) => {
                    let matches = match &fragment.node.type_condition {
                        Some(condition) => self.does_type_condition_match(condition.node.on.node.as_str()),
                        None => true,
                    };
                    if matches {
                        self.collect(&fragment.node.selection_set.node);
                    }
                }
            }
        }
    }

    fn does_type_condition_match(&self, type_condition: &str) -> bool {
        if type_condition == self.object.name() {
            return true;
        }
        self.ctx
            .schema
            .definition_by_name(type_condition)
            .is_some_and(|definition| self.ctx.schema.is_possible_type(definition, self.object))
    }
}

/// `@skip(if: true)` and `@include(if: false)` exclude a selection.
fn should_include(directives: &[Positioned<Directive>], variables: &Variables) -> bool {
    for directive in directives {
        let expected = match directive.node.name.node.as_str() {
            "skip" => false,
            "include" => true,
            _ => continue,
        };
        let condition = directive.node.get_argument("if").and_then(|value| match &value.node {
            Value::Boolean(condition) => Some(*condition),
            Value::Variable(name) => match variables.get(name) {
                Some(ConstValue::Boolean(condition)) => Some(*condition),
                _ => None,
            },
            _ => None,
        });
        if condition.is_some_and(|condition| condition != expected) {
            return false;
        }
    }
    true
}
