use std::sync::Mutex;

use engine::{
    schema::{Field, FieldFuture, FieldValue, InputValue, Object, ResolverContext, Schema},
    Engine, Request,
};
use integration_tests::{execute, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Default)]
struct Log(Mutex<Vec<String>>);

/// Appends `value` to the log after yielding `delay` times, returns the log at that point.
fn append(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        for _ in 0..ctx.args.i64("delay").unwrap_or_default() {
            tokio::task::yield_now().await;
        }
        let log = ctx.data::<Log>().unwrap();
        let mut entries = log.0.lock().unwrap();
        entries.push(ctx.args.str("value").unwrap_or_default().to_string());
        Ok(FieldValue::list(entries.iter().map(|entry| FieldValue::value(entry.as_str()))))
    })
}

fn engine() -> Engine {
    let field = || {
        Field::new("append", "[String!]!")
            .argument(InputValue::new("value", "String!"))
            .argument(InputValue::new("delay", "Int").default_value(0))
            .resolve(append)
    };
    let schema = Schema::builder("Query")
        .mutation("Mutation")
        .register(Object::new("Query").field(field()))
        .register(Object::new("Mutation").field(field()))
        .build()
        .unwrap();
    Engine::new(schema)
}

fn run(query: &str) -> serde_json::Value {
    let request = Request::parse(query).unwrap().context(Log::default());
    runtime().block_on(execute(&engine(), request))
}

#[test]
fn query_fields_run_concurrently() {
    let response = run(r#"{ a: append(value: "a", delay: 3) b: append(value: "b") }"#);

    // Keys keep the query order even though `b` completed first.
    assert_eq!(response, json!({"data": {"a": ["b", "a"], "b": ["b"]}}));
}

#[test]
fn mutation_fields_run_serially() {
    let response = run(r#"mutation { a: append(value: "a", delay: 3) b: append(value: "b") }"#);

    assert_eq!(response, json!({"data": {"a": ["a"], "b": ["a", "b"]}}));
}

#[test]
fn mutation_stops_at_a_null_reaching_the_root() {
    let response = run(
        r#"mutation {
  a: append(value: "a")
  b: append(value: null)
  c: append(value: "c")
}"#,
    );

    // `c` never runs, the data is gone entirely.
    insta::assert_json_snapshot!(response, @r#"
    {
      "data": null,
      "errors": [
        {
          "message": "Argument \"value\" of non-null type \"String!\" must not be null.",
          "locations": [
            {
              "line": 3,
              "column": 3
            }
          ],
          "path": [
            "b"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn aliases_keep_their_collection_order() {
    let response = run(
        r#"{
  z: append(value: "z", delay: 2)
  ...Fields
  y: append(value: "y")
}

fragment Fields on Query {
  x: append(value: "x", delay: 1)
  z: append(value: "z", delay: 2)
}"#,
    );

    assert_eq!(
        response,
        json!({"data": {"z": ["y", "x", "z"], "x": ["y", "x"], "y": ["y"]}})
    );
}
