use engine::{
    schema::{Field, FieldError, FieldFuture, FieldValue, Object, Schema},
    Config, Engine,
};
use indoc::indoc;
use integration_tests::{post, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

fn engine(config: &str) -> Engine {
    let failing = |name: &str, delay: usize| {
        Field::new(name, "String").resolve(move |_| {
            FieldFuture::new(async move {
                for _ in 0..delay {
                    tokio::task::yield_now().await;
                }
                Err::<FieldValue, _>(FieldError::new("failed"))
            })
        })
    };
    let schema = Schema::builder("Query")
        .register(
            Object::new("Query")
                .field(failing("slow", 2))
                .field(failing("fast", 0))
                .field(Field::new("coded", "String").resolve(|_| {
                    FieldFuture::err(FieldError::new("coded").with_extension("code", "CUSTOM"))
                })),
        )
        .build()
        .unwrap();
    Engine::builder(schema)
        .config(Config::from_toml(config).unwrap())
        .build()
}

fn paths(response: &serde_json::Value) -> Vec<serde_json::Value> {
    response["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["path"].clone())
        .collect()
}

#[test]
fn errors_are_in_completion_order_by_default() {
    let response = runtime().block_on(post(&engine(""), "{ slow fast }"));

    assert_eq!(paths(&response), [json!(["fast"]), json!(["slow"])]);
}

#[test]
fn errors_in_response_order() {
    let config = indoc! {r#"
        [errors]
        order = "path"
    "#};
    let response = runtime().block_on(post(&engine(config), "{ slow fast }"));

    assert_eq!(paths(&response), [json!(["slow"]), json!(["fast"])]);
}

#[test]
fn error_codes() {
    let config = indoc! {r#"
        [errors]
        include_codes = true
    "#};
    let response = runtime().block_on(post(&engine(config), "{ fast coded }"));

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "fast": null,
        "coded": null
      },
      "errors": [
        {
          "message": "failed",
          "locations": [
            {
              "line": 1,
              "column": 3
            }
          ],
          "path": [
            "fast"
          ],
          "extensions": {
            "code": "RESOLVER_ERROR"
          }
        },
        {
          "message": "coded",
          "locations": [
            {
              "line": 1,
              "column": 8
            }
          ],
          "path": [
            "coded"
          ],
          "extensions": {
            "code": "CUSTOM"
          }
        }
      ]
    }
    "#);
}

#[test]
fn invalid_configuration() {
    let error = Config::from_toml("[errors]\norder = \"random\"").unwrap_err();

    assert!(error.to_string().starts_with("Invalid configuration: "), "{error}");
}
