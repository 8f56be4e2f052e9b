use engine::{
    schema::{Field, FieldFuture, FieldValue, InputObject, InputValue, Object, Scalar, Schema},
    ConstValue, Engine,
};
use integration_tests::{post, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

fn engine() -> Engine {
    let echo = Field::new("echo", "JSON")
        .argument(InputValue::new("text", "String"))
        .argument(InputValue::new("count", "Int").default_value(1))
        .argument(InputValue::new("filter", "Filter"))
        .argument(InputValue::new("tags", "[String!]"))
        .resolve(|ctx| {
            let arguments = ctx.args.iter().map(|(name, value)| (name.clone(), value.clone()));
            FieldFuture::from_value(FieldValue::Value(ConstValue::Object(arguments.collect())))
        });
    let required = Field::new("required", "JSON!")
        .argument(InputValue::new("id", "ID!"))
        .resolve(|ctx| FieldFuture::from_value(ctx.args.get("id").cloned()));

    let schema = Schema::builder("Query")
        .register(Object::new("Query").field(echo).field(required))
        .register(
            InputObject::new("Filter")
                .field(InputValue::new("term", "String!"))
                .field(InputValue::new("limit", "Int").default_value(10)),
        )
        .register(Scalar::new("JSON"))
        .build()
        .unwrap();
    Engine::new(schema)
}

fn run(query: &str) -> serde_json::Value {
    runtime().block_on(post(&engine(), query))
}

#[test]
fn defaults_are_applied() {
    assert_eq!(run("{ echo }"), json!({"data": {"echo": {"count": 1}}}));
}

#[test]
fn arguments_follow_the_definition_order() {
    let response = run(r#"{ echo(tags: ["a", "b"], text: "hi", count: 3) }"#);

    assert_eq!(
        response,
        json!({"data": {"echo": {"text": "hi", "count": 3, "tags": ["a", "b"]}}})
    );
}

#[test]
fn single_value_for_a_list() {
    let response = run(r#"{ echo(tags: "a") }"#);

    assert_eq!(response, json!({"data": {"echo": {"count": 1, "tags": ["a"]}}}));
}

#[test]
fn input_objects() {
    let response = run(r#"{ echo(filter: {term: "rust"}) }"#);

    assert_eq!(
        response,
        json!({"data": {"echo": {"count": 1, "filter": {"term": "rust", "limit": 10}}}})
    );
}

#[test]
fn explicit_null() {
    let response = run("{ echo(text: null, count: null) }");

    assert_eq!(response, json!({"data": {"echo": {"text": null, "count": null}}}));
}

#[test]
fn invalid_value_nulls_the_field() {
    let response = run(r#"{ echo(count: "two") other: echo }"#);

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "echo": null,
        "other": {
          "count": 1
        }
      },
      "errors": [
        {
          "message": "Argument \"count\" has invalid value \"two\"; Int cannot represent non-integer value: \"two\"",
          "locations": [
            {
              "line": 1,
              "column": 3
            }
          ],
          "path": [
            "echo"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn missing_input_object_field() {
    let response = run("{ echo(filter: {limit: 1}) }");

    assert_eq!(response["data"], json!({"echo": null}));
    let message = response["errors"][0]["message"].as_str().unwrap();
    assert!(message.starts_with("Argument \"filter\" has invalid value"), "{message}");
    assert!(
        message.ends_with("Field \"term\" of required type \"String!\" was not provided."),
        "{message}"
    );
}

#[test]
fn missing_required_argument_propagates() {
    let response = run("{ required }");

    assert_eq!(
        response,
        json!({
            "data": null,
            "errors": [{
                "message": "Argument \"id\" of required type \"ID!\" was not provided.",
                "locations": [{"line": 1, "column": 3}],
                "path": ["required"]
            }]
        })
    );
}

#[test]
fn required_argument_from_an_unset_variable() {
    let response = run("query($id: ID) { required(id: $id) }");

    assert_eq!(
        response["errors"][0]["message"],
        json!("Argument \"id\" of required type \"ID!\" was provided the variable \"$id\" which was not provided a runtime value.")
    );
    assert_eq!(response["data"], json!(null));
}
