use async_graphql_parser::{types::Field, Positioned};
use async_graphql_value::{ConstValue, Name, Value, Variables};
use engine_schema::{Arguments, FieldDefinition};
use indexmap::IndexMap;

use super::input::InputValueCoercer;

/// Coerces the arguments of a field occurrence against the field definition, in definition
/// order. Arguments neither provided nor defaulted are absent.
pub(crate) fn coerce_argument_values(
    definition: FieldDefinition<'_>,
    field: &Positioned<Field>,
    variables: &Variables,
) -> Result<Arguments, String> {
    let mut coerced = IndexMap::new();

    for argument in definition.arguments() {
        let name = argument.name();
        let ty = argument.ty();
        let literal = field
            .node
            .arguments
            .iter()
            .find(|(argument_name, _)| argument_name.node.as_str() == name)
            .map(|(_, value)| &value.node);

        let value = match literal {
            None => None,
            Some(Value::Variable(variable)) if !variables.contains_key(variable) => {
                if argument.default_value().is_none() && ty.is_required() {
                    return Err(format!(
                        "Argument \"{name}\" of required type \"{ty}\" was provided the variable \"${variable}\" which was not provided a runtime value."
                    ));
                }
                None
            }
            Some(literal) => {
                if ty.is_required() && is_null(literal, variables) {
                    return Err(format!("Argument \"{name}\" of non-null type \"{ty}\" must not be null."));
                }
                match InputValueCoercer::new(Some(variables)).coerce(ty, literal) {
                    Ok(value) => value,
                    Err(err) => return Err(format!("Argument \"{name}\" has invalid value {literal}; {err}")),
                }
            }
        };

        match value.or_else(|| argument.default_value().cloned()) {
            Some(value) => {
                coerced.insert(Name::new(name), value);
            }
            None if ty.is_required() => {
                return Err(format!("Argument \"{name}\" of required type \"{ty}\" was not provided."));
            }
            None => {}
        }
    }

    Ok(Arguments::new(coerced))
}

fn is_null(literal: &Value, variables: &Variables) -> bool {
    match literal {
        Value::Null => true,
        Value::Variable(name) => matches!(variables.get(name), Some(ConstValue::Null)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use async_graphql_parser::{parse_query, types::Selection};
    use engine_schema::{InputObject, InputValue, Object, Schema};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn schema() -> Schema {
        Schema::builder("Query")
            .register(
                Object::new("Query").field(
                    engine_schema::Field::new("search", "[Int]")
                        .argument(InputValue::new("term", "String!"))
                        .argument(InputValue::new("first", "Int").default_value(10))
                        .argument(InputValue::new("ids", "[ID!]"))
                        .argument(InputValue::new("filter", "Filter")),
                ),
            )
            .register(InputObject::new("Filter").field(InputValue::new("min", "Int!")))
            .build()
            .unwrap()
    }

    fn coerce(query: &str, variables: serde_json::Value) -> Result<serde_json::Value, String> {
        let schema = schema();
        let document = parse_query(query).unwrap();
        let (_, operation) = document.operations.iter().next().unwrap();
        let Selection::Field(field) = &operation.node.selection_set.node.items[0].node else {
            unreachable!()
        };
        let definition = schema.query_root().find_field_by_name("search").unwrap();
        coerce_argument_values(definition, field, &Variables::from_json(variables)).map(|arguments| {
            serde_json::Value::Object(
                arguments
                    .into_inner()
                    .into_iter()
                    .map(|(name, value)| (name.to_string(), value.into_json().unwrap()))
                    .collect(),
            )
        })
    }

    #[test]
    fn literals_and_defaults() {
        assert_eq!(
            coerce(r#"{ search(term: "a", ids: 4) }"#, json!({})),
            Ok(json!({"term": "a", "first": 10, "ids": ["4"]}))
        );
        assert_eq!(
            coerce(r#"{ search(term: "a", first: null) }"#, json!({})),
            Ok(json!({"term": "a", "first": null}))
        );
    }

    #[test]
    fn variables() {
        assert_eq!(
            coerce("{ search(term: $t, first: $f, filter: {min: $m}) }", json!({"t": "x", "m": 2})),
            Ok(json!({"term": "x", "first": 10, "filter": {"min": 2}}))
        );
        assert_eq!(
            coerce("{ search(term: $t) }", json!({})),
            Err("Argument \"term\" of required type \"String!\" was provided the variable \"$t\" which was not provided a runtime value.".to_string())
        );
        assert_eq!(
            coerce("{ search(term: $t) }", json!({"t": null})),
            Err("Argument \"term\" of non-null type \"String!\" must not be null.".to_string())
        );
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(
            coerce("{ search }", json!({})),
            Err("Argument \"term\" of required type \"String!\" was not provided.".to_string())
        );
        assert_eq!(
            coerce("{ search(term: null) }", json!({})),
            Err("Argument \"term\" of non-null type \"String!\" must not be null.".to_string())
        );
        assert_eq!(
            coerce(r#"{ search(term: "a", first: "ten") }"#, json!({})),
            Err("Argument \"first\" has invalid value \"ten\"; Int cannot represent non-integer value: \"ten\"".to_string())
        );
        assert_eq!(
            coerce(r#"{ search(term: "a", filter: {}) }"#, json!({})),
            Err("Argument \"filter\" has invalid value {}; Field \"min\" of required type \"Int!\" was not provided.".to_string())
        );
    }
}
