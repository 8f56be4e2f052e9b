use engine::{
    schema::{Field, FieldFuture, FieldResult, FieldValue, Object, Schema},
    Engine,
};
use integration_tests::{post, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

#[allow(clippy::panic)]
async fn explode_later() -> FieldResult {
    tokio::task::yield_now().await;
    panic!("future exploded")
}

#[allow(clippy::panic)]
fn engine() -> Engine {
    let schema = Schema::builder("Query")
        .register(
            Object::new("Query")
                .field(Field::new("ok", "String").resolve(|_| FieldFuture::from_value(FieldValue::value("ok"))))
                .field(Field::new("panics", "String").resolve(|_| panic!("resolver exploded")))
                .field(Field::new("panicsLater", "String!").resolve(|_| FieldFuture::new(explode_later()))),
        )
        .build()
        .unwrap();
    Engine::new(schema)
}

#[test]
fn panic_in_resolver_is_an_internal_error() {
    let response = runtime().block_on(post(&engine(), "{ ok panics }"));

    assert_eq!(
        response,
        json!({
            "data": {"ok": "ok", "panics": null},
            "errors": [{
                "message": "resolver exploded",
                "locations": [{"line": 1, "column": 6}],
                "path": ["panics"]
            }]
        })
    );
}

#[test]
fn panic_while_polling_the_resolver() {
    let response = runtime().block_on(post(&engine(), "{ panicsLater ok }"));

    assert_eq!(
        response,
        json!({
            "data": null,
            "errors": [{
                "message": "future exploded",
                "locations": [{"line": 1, "column": 3}],
                "path": ["panicsLater"]
            }]
        })
    );
}

#[test]
fn engine_is_usable_after_a_panic() {
    let engine = engine();

    runtime().block_on(async {
        post(&engine, "{ panics }").await;
        assert_eq!(post(&engine, "{ ok }").await, json!({"data": {"ok": "ok"}}));
    });
}
