use engine::{
    schema::{Enum, Field, FieldValue, Object, Schema},
    ConstValue, Engine, Request,
};
use integration_tests::{execute, post, runtime};
use pretty_assertions::assert_eq;
use serde_json::json;

fn blog_schema() -> Schema {
    Schema::builder("Query")
        .register(
            Object::new("Query")
                .field(Field::new("article", "Article"))
                .field(Field::new("feed", "[Article!]!")),
        )
        .register(
            Object::new("Article")
                .field(Field::new("id", "ID!"))
                .field(Field::new("title", "String"))
                .field(Field::new("status", "Status"))
                .field(Field::new("author", "Author")),
        )
        .register(Object::new("Author").field(Field::new("name", "String")))
        .register(Enum::new("Status").values(["DRAFT", "PUBLISHED"]))
        .build()
        .unwrap()
}

fn root_value() -> FieldValue {
    let root = json!({
        "article": {
            "id": 1,
            "title": "Hello",
            "status": "PUBLISHED",
            "author": {"name": "Ada", "email": "ada@example.com"}
        },
        "feed": [
            {"id": "1", "title": "Hello", "status": "PUBLISHED"},
            {"id": "2", "title": "Draft", "status": "DRAFT"}
        ]
    });
    FieldValue::Value(ConstValue::from_json(root).unwrap())
}

fn run(query: &str) -> serde_json::Value {
    let engine = Engine::new(blog_schema());
    let request = Request::parse(query).unwrap().root_value(root_value());
    runtime().block_on(execute(&engine, request))
}

#[test]
fn default_resolver_reads_plain_values() {
    let response = run("{ article { id title status author { name } } }");

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "article": {
          "id": "1",
          "title": "Hello",
          "status": "PUBLISHED",
          "author": {
            "name": "Ada"
          }
        }
      }
    }
    "#);
}

#[test]
fn typename_and_aliases() {
    let response = run("{ __typename article { kind: __typename headline: title title } }");

    assert_eq!(
        response,
        json!({
            "data": {
                "__typename": "Query",
                "article": {"kind": "Article", "headline": "Hello", "title": "Hello"}
            }
        })
    );
}

#[test]
fn fragments_and_merged_selections() {
    let response = run(
        r#"
        query {
          article { id ...ArticleFields }
          article { author { name } ... on Article { status } }
        }

        fragment ArticleFields on Article {
          title
          author { name }
        }
        "#,
    );

    assert_eq!(
        response,
        json!({
            "data": {
                "article": {
                    "id": "1",
                    "title": "Hello",
                    "author": {"name": "Ada"},
                    "status": "PUBLISHED"
                }
            }
        })
    );
}

#[test]
fn skip_and_include() {
    let response = run(
        r#"
        query {
          article {
            id @skip(if: true)
            title @include(if: false)
            status @skip(if: false) @include(if: true)
            ... @include(if: false) { author { name } }
          }
        }
        "#,
    );

    assert_eq!(response, json!({"data": {"article": {"status": "PUBLISHED"}}}));
}

#[test]
fn unknown_fields_are_left_out() {
    let response = run("{ article { title email } unknown }");

    assert_eq!(response, json!({"data": {"article": {"title": "Hello"}}}));
}

#[test]
fn lists_of_objects() {
    let response = run("{ feed { id status } }");

    assert_eq!(
        response,
        json!({
            "data": {
                "feed": [
                    {"id": "1", "status": "PUBLISHED"},
                    {"id": "2", "status": "DRAFT"}
                ]
            }
        })
    );
}

#[test]
fn executing_twice_gives_the_same_response() {
    let engine = Engine::new(blog_schema());
    let query = "{ feed { title } article { author { name } } }";

    let responses = runtime().block_on(async {
        let first = execute(&engine, Request::parse(query).unwrap().root_value(root_value())).await;
        let second = execute(&engine, Request::parse(query).unwrap().root_value(root_value())).await;
        (first, second)
    });

    assert_eq!(responses.0, responses.1);
}

#[test]
fn missing_root_value_gives_nulls() {
    let engine = Engine::new(blog_schema());
    let response = runtime().block_on(post(&engine, "{ article { title } }"));

    assert_eq!(response, json!({"data": {"article": null}}));
}

#[test]
fn operation_selection() {
    let engine = Engine::new(blog_schema());
    let document = "query First { article { title } } query Second { __typename }";

    let (named, ambiguous, unknown) = runtime().block_on(async {
        let request = || Request::parse(document).unwrap().root_value(root_value());
        (
            execute(&engine, request().operation_name("Second")).await,
            execute(&engine, request()).await,
            execute(&engine, request().operation_name("Third")).await,
        )
    });

    assert_eq!(named, json!({"data": {"__typename": "Query"}}));
    assert_eq!(
        ambiguous,
        json!({"errors": [{"message": "Must provide operation name if query contains multiple operations."}]})
    );
    assert_eq!(unknown, json!({"errors": [{"message": "Unknown operation named \"Third\"."}]}));
}
