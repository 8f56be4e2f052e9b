use engine::{
    schema::{Enum, Field, FieldFuture, FieldValue, InputObject, InputValue, Object, Scalar, Schema},
    ConstValue, Engine, Request, Variables,
};
use integration_tests::{execute, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

fn engine() -> Engine {
    let echo = |name: &str, ty: &str| {
        Field::new(name, "JSON")
            .argument(InputValue::new("value", ty))
            .resolve(|ctx| FieldFuture::from_value(ctx.args.get("value").cloned()))
    };
    let schema = Schema::builder("Query")
        .register(
            Object::new("Query")
                .field(echo("int", "Int"))
                .field(echo("color", "Color"))
                .field(echo("colors", "[Color!]"))
                .field(echo("point", "Point")),
        )
        .register(Scalar::new("JSON"))
        .register(Enum::new("Color").values(["RED", "GREEN", "BLUE"]))
        .register(
            InputObject::new("Point")
                .field(InputValue::new("x", "Int!"))
                .field(InputValue::new("y", "Int!")),
        )
        .build()
        .unwrap();
    Engine::new(schema)
}

fn run(query: &str, variables: serde_json::Value) -> serde_json::Value {
    let request = Request::parse(query)
        .unwrap()
        .variables(Variables::from_json(variables));
    runtime().block_on(execute(&engine(), request))
}

#[test]
fn provided_and_default_values() {
    let response = run(
        "query($a: Int, $b: Int = 2, $c: Color) { a: int(value: $a) b: int(value: $b) c: color(value: $c) }",
        json!({"a": 1, "c": "GREEN"}),
    );

    assert_eq!(response, json!({"data": {"a": 1, "b": 2, "c": "GREEN"}}));
}

#[test]
fn variables_inside_literals() {
    let response = run(
        "query($x: Int!, $color: Color!) { point(value: {x: $x, y: 2}) colors(value: [RED, $color]) }",
        json!({"x": 1, "color": "BLUE"}),
    );

    assert_eq!(
        response,
        json!({"data": {"point": {"x": 1, "y": 2}, "colors": ["RED", "BLUE"]}})
    );
}

#[test]
fn variable_errors_are_request_errors() {
    let response = run(
        "query($a: Int!, $b: Int!, $c: Color, $p: Point) { int(value: $a) }",
        json!({"b": null, "c": "PURPLE", "p": {"x": 1, "y": "two"}}),
    );

    let messages = response["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["message"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        [
            "Variable \"$a\" of required type \"Int!\" was not provided.",
            "Variable \"$b\" of non-null type \"Int!\" must not be null.",
            "Variable \"$c\" got invalid value \"PURPLE\"; Value \"PURPLE\" does not exist in \"Color\" enum.",
            "Variable \"$p\" got invalid value \"two\" at \"p.y\"; Int cannot represent non-integer value: \"two\"",
        ]
    );
    assert!(response.get("data").is_none());
}

#[test]
fn list_variable_item_errors() {
    let response = run("query($colors: [Color!]) { colors(value: $colors) }", json!({"colors": ["RED", null]}));

    assert_eq!(
        response["errors"][0]["message"],
        json!("Variable \"$colors\" got invalid value null at \"colors[1]\"; Expected non-nullable type \"Color!\" not to be null.")
    );
}

#[test]
fn unused_variables_are_ignored() {
    let response = run("query { int(value: 3) }", json!({"unused": true}));

    assert_eq!(response, json!({"data": {"int": 3}}));
}

#[test]
fn root_value_is_unused_by_resolvers_with_arguments() {
    let request = Request::parse("{ int(value: 4) }")
        .unwrap()
        .root_value(FieldValue::Value(ConstValue::from_json(json!({"int": 5})).unwrap()));
    let response = runtime().block_on(execute(&engine(), request));

    assert_eq!(response, json!({"data": {"int": 4}}));
}
