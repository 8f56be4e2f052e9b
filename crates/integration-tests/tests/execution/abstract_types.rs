use engine::{schema::FieldValue, Engine};
use integration_tests::{
    pets::{self, Cat, Human, TypeResolution},
    post, runtime,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

const QUERY: &str = r#"
{
  pets {
    __typename
    name
    ... on Dog { barks }
    ... on Cat { meows }
  }
  catOrDog {
    __typename
    ... on Dog { name barks }
    ... on Cat { name meows }
  }
}
"#;

#[rstest]
#[case::annotated_values(TypeResolution::Annotated)]
#[case::is_type_of(TypeResolution::IsTypeOf)]
#[case::resolve_type(TypeResolution::ResolveType)]
fn resolves_the_concrete_type(#[case] resolution: TypeResolution) {
    let engine = Engine::new(pets::schema(resolution));
    let response = runtime().block_on(post(&engine, QUERY));

    // Every resolution strategy yields the same response.
    insta::allow_duplicates! {
        insta::assert_json_snapshot!(response, @r#"
        {
          "data": {
            "pets": [
              {
                "__typename": "Dog",
                "name": "Odie",
                "barks": true
              },
              {
                "__typename": "Cat",
                "name": "Garfield",
                "meows": false
              }
            ],
            "catOrDog": [
              {
                "__typename": "Dog",
                "name": "Odie",
                "barks": true
              },
              {
                "__typename": "Cat",
                "name": "Garfield",
                "meows": false
              }
            ]
          }
        }
        "#);
    }
}

fn with_a_human() -> FieldValue {
    FieldValue::list([
        FieldValue::object(Human { name: "Jon" }),
        FieldValue::object(Cat {
            name: "Garfield",
            meows: false,
        })
        .with_type("Cat"),
    ])
}

#[rstest]
#[case::annotated_values(TypeResolution::Annotated)]
#[case::resolve_type(TypeResolution::ResolveType)]
fn runtime_type_must_be_a_possible_type(#[case] resolution: TypeResolution) {
    let engine = Engine::new(pets::schema_with_pets(resolution, with_a_human));
    let response = runtime().block_on(post(&engine, "{ pets { name } }"));

    assert_eq!(
        response,
        json!({
            "data": {"pets": [null, {"name": "Garfield"}]},
            "errors": [{
                "message": "Runtime Object type \"Human\" is not a possible type for \"Pet\".",
                "locations": [{"line": 1, "column": 3}],
                "path": ["pets", 0]
            }]
        })
    );
}

#[test]
fn abstract_type_without_any_type_resolution() {
    let plain_value = || FieldValue::list([FieldValue::value("Jon")]);
    let engine = Engine::new(pets::schema_with_pets(TypeResolution::IsTypeOf, plain_value));
    let response = runtime().block_on(post(&engine, "{ catOrDog { __typename } }"));

    assert_eq!(
        response,
        json!({
            "data": {"catOrDog": [null]},
            "errors": [{
                "message": "Abstract type \"CatOrDog\" must resolve to an Object type at runtime for field \"Query.catOrDog\". Either the \"CatOrDog\" type should provide a \"resolveType\" function or each possible type should provide an \"isTypeOf\" function.",
                "locations": [{"line": 1, "column": 3}],
                "path": ["catOrDog", 0]
            }]
        })
    );
}

#[test]
fn type_name_outside_the_schema() {
    let unknown = || FieldValue::list([FieldValue::value("Jon").with_type("Robot")]);
    let engine = Engine::new(pets::schema_with_pets(TypeResolution::Annotated, unknown));
    let response = runtime().block_on(post(&engine, "{ pets { name } }"));

    assert_eq!(
        response["errors"][0]["message"],
        json!("Abstract type \"Pet\" was resolved to a type \"Robot\" that does not exist inside the schema.")
    );
    assert_eq!(response["data"], json!({"pets": [null]}));
}

#[test]
fn is_type_of_rejects_the_value() {
    let wrong_value = || FieldValue::list([FieldValue::object(Human { name: "Jon" }).with_type("Dog")]);
    let engine = Engine::new(pets::schema_with_pets(TypeResolution::IsTypeOf, wrong_value));
    let response = runtime().block_on(post(&engine, "{ pets { name } }"));

    assert_eq!(
        response["errors"][0]["message"],
        json!("Expected value of type \"Dog\" but got: [object Dog].")
    );
    assert_eq!(response["data"], json!({"pets": [null]}));
}
