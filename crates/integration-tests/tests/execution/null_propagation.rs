use engine::{
    schema::{Field, FieldError, FieldFuture, FieldValue, Object, Schema},
    ConstValue, Engine, Request,
};
use integration_tests::{execute, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

fn schema() -> Schema {
    let data_type = Object::new("DataType")
        .field(Field::new("sync", "String"))
        .field(Field::new("syncNonNull", "String!"))
        .field(Field::new("list", "[String]"))
        .field(Field::new("listNonNull", "[String!]"))
        .field(Field::new("nested", "DataType"))
        .field(Field::new("nestedNonNull", "DataType!"))
        .field(Field::new("error", "String").resolve(|_| {
            FieldFuture::err(FieldError::new("boom").with_extension("reason", "test"))
        }))
        .field(Field::new("errorNonNull", "String!").resolve(|_| {
            FieldFuture::new(async { Err::<FieldValue, _>(FieldError::new("boom")) })
        }));

    Schema::builder("Query")
        .register(
            Object::new("Query")
                .field(Field::new("nullable", "DataType"))
                .field(Field::new("nonNull", "DataType!")),
        )
        .register(data_type)
        .build()
        .unwrap()
}

fn data(depth: usize) -> serde_json::Value {
    let mut data = json!({
        "sync": "sync",
        "syncNonNull": null,
        "list": ["a", null],
        "listNonNull": ["a", null]
    });
    if depth > 0 {
        data["nested"] = self::data(depth - 1);
        data["nestedNonNull"] = self::data(depth - 1);
    }
    data
}

fn run(query: &str) -> serde_json::Value {
    let root = json!({"nullable": data(2), "nonNull": data(2)});
    let request = Request::parse(query)
        .unwrap()
        .root_value(FieldValue::Value(ConstValue::from_json(root).unwrap()));
    runtime().block_on(execute(&Engine::new(schema()), request))
}

#[test]
fn null_in_non_null_field_nulls_the_parent() {
    let response = run("{ nullable { sync syncNonNull } }");

    assert_eq!(
        response,
        json!({
            "data": {"nullable": null},
            "errors": [{
                "message": "Cannot return null for non-nullable field DataType.syncNonNull.",
                "locations": [{"line": 1, "column": 19}],
                "path": ["nullable", "syncNonNull"]
            }]
        })
    );
}

#[test]
fn null_propagates_to_the_nearest_nullable_ancestor() {
    let response = run("{ nullable { nested { nestedNonNull { syncNonNull } } } }");

    assert_eq!(
        response,
        json!({
            "data": {"nullable": {"nested": null}},
            "errors": [{
                "message": "Cannot return null for non-nullable field DataType.syncNonNull.",
                "locations": [{"line": 1, "column": 39}],
                "path": ["nullable", "nested", "nestedNonNull", "syncNonNull"]
            }]
        })
    );
}

#[test]
fn null_reaching_the_root_nulls_the_data() {
    let response = run("{ nonNull { syncNonNull } }");

    assert_eq!(
        response,
        json!({
            "data": null,
            "errors": [{
                "message": "Cannot return null for non-nullable field DataType.syncNonNull.",
                "locations": [{"line": 1, "column": 13}],
                "path": ["nonNull", "syncNonNull"]
            }]
        })
    );
}

#[test]
fn siblings_are_not_affected() {
    let response = run("{ nullable { syncNonNull } other: nullable { sync } }");

    assert_eq!(response["data"], json!({"nullable": null, "other": {"sync": "sync"}}));
    assert_eq!(response["errors"][0]["locations"], json!([{"line": 1, "column": 14}]));
}

#[test]
fn every_failing_sibling_is_reported() {
    let response = run("{ a: nullable { syncNonNull } b: nullable { syncNonNull } }");

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "a": null,
        "b": null
      },
      "errors": [
        {
          "message": "Cannot return null for non-nullable field DataType.syncNonNull.",
          "locations": [
            {
              "line": 1,
              "column": 17
            }
          ],
          "path": [
            "a",
            "syncNonNull"
          ]
        },
        {
          "message": "Cannot return null for non-nullable field DataType.syncNonNull.",
          "locations": [
            {
              "line": 1,
              "column": 45
            }
          ],
          "path": [
            "b",
            "syncNonNull"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn merged_fields_report_every_location() {
    let response = run("{ nullable { syncNonNull } nullable { syncNonNull } }");

    assert_eq!(
        response["errors"][0]["locations"],
        json!([{"line": 1, "column": 14}, {"line": 1, "column": 39}])
    );
}

#[test]
fn list_items() {
    let response = run("{ nullable { list listNonNull } }");

    assert_eq!(
        response,
        json!({
            "data": {"nullable": {"list": ["a", null], "listNonNull": null}},
            "errors": [{
                "message": "Cannot return null for non-nullable field DataType.listNonNull.",
                "locations": [{"line": 1, "column": 19}],
                "path": ["nullable", "listNonNull", 1]
            }]
        })
    );
}

#[test]
fn resolver_error_in_nullable_field() {
    let response = run("{ nullable { sync error } }");

    assert_eq!(
        response,
        json!({
            "data": {"nullable": {"sync": "sync", "error": null}},
            "errors": [{
                "message": "boom",
                "locations": [{"line": 1, "column": 19}],
                "path": ["nullable", "error"],
                "extensions": {"reason": "test"}
            }]
        })
    );
}

#[test]
fn resolver_error_in_non_null_field() {
    let response = run("{ nullable { sync errorNonNull } }");

    assert_eq!(
        response,
        json!({
            "data": {"nullable": null},
            "errors": [{
                "message": "boom",
                "locations": [{"line": 1, "column": 19}],
                "path": ["nullable", "errorNonNull"]
            }]
        })
    );
}
