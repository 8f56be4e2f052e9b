use engine::{Engine, Request};
use integration_tests::{execute, numbers, runtime};

fn run_mutation(query: &str) -> (serde_json::Value, i64) {
    let root = numbers::Root::new(6);
    let engine = Engine::new(numbers::schema());
    let request = Request::parse(query)
        .unwrap()
        .root_value(engine::schema::FieldValue::object(root.clone()));

    let response = runtime().block_on(execute(&engine, request));
    (response, root.the_number())
}

#[test]
fn evaluates_mutations_serially() {
    let (response, the_number) = run_mutation(
        r#"mutation M {
      first: immediatelyChangeTheNumber(newNumber: 1) {
        theNumber
      },
      second: promiseToChangeTheNumber(newNumber: 2) {
        theNumber
      },
      third: immediatelyChangeTheNumber(newNumber: 3) {
        theNumber
      }
      fourth: promiseToChangeTheNumber(newNumber: 4) {
        theNumber
      },
      fifth: immediatelyChangeTheNumber(newNumber: 5) {
        theNumber
      }
      subField {
        first: immediatelyChangeTheNumber(newNumber: 6) {
          theNumber
        },
        second: promiseToChangeTheNumber(newNumber: 7) {
          theNumber
        },
        third: immediatelyChangeTheNumber(newNumber: 8) {
          theNumber
        }
        fourth: promiseToChangeTheNumber(newNumber: 9) {
          theNumber
        },
        fifth: immediatelyChangeTheNumber(newNumber: 10) {
          theNumber
        }
      }
    }"#,
    );

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "first": {
          "theNumber": 1
        },
        "second": {
          "theNumber": 2
        },
        "third": {
          "theNumber": 3
        },
        "fourth": {
          "theNumber": 4
        },
        "fifth": {
          "theNumber": 5
        },
        "subField": {
          "first": {
            "theNumber": 6
          },
          "second": {
            "theNumber": 7
          },
          "third": {
            "theNumber": 8
          },
          "fourth": {
            "theNumber": 9
          },
          "fifth": {
            "theNumber": 10
          }
        }
      }
    }
    "#);
    // Fields of subField run concurrently, the deferred changes land last.
    assert_eq!(the_number, 9);
}

#[test]
fn evaluates_mutations_correctly_in_the_presence_of_a_failed_mutation() {
    let (response, _) = run_mutation(
        r#"mutation M {
      first: immediatelyChangeTheNumber(newNumber: 1) {
        theNumber
      },
      second: promiseToChangeTheNumber(newNumber: 2) {
        theNumber
      },
      third: failToChangeTheNumber(newNumber: 3) {
        theNumber
      }
      fourth: promiseToChangeTheNumber(newNumber: 4) {
        theNumber
      },
      fifth: immediatelyChangeTheNumber(newNumber: 5) {
        theNumber
      }
      sixth: promiseAndFailToChangeTheNumber(newNumber: 6) {
        theNumber
      }
      subField {
        first: immediatelyChangeTheNumber(newNumber: 7) {
          theNumber
        },
        second: promiseToChangeTheNumber(newNumber: 8) {
          theNumber
        },
        third: failToChangeTheNumber(newNumber: 9) {
          theNumber
        }
        fourth: promiseToChangeTheNumber(newNumber: 10) {
          theNumber
        },
        fifth: immediatelyChangeTheNumber(newNumber: 11) {
          theNumber
        }
        sixth: promiseAndFailToChangeTheNumber(newNumber: 12) {
          theNumber
        }
      }
    }"#,
    );

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "first": {
          "theNumber": 1
        },
        "second": {
          "theNumber": 2
        },
        "third": null,
        "fourth": {
          "theNumber": 4
        },
        "fifth": {
          "theNumber": 5
        },
        "sixth": null,
        "subField": {
          "first": {
            "theNumber": 7
          },
          "second": {
            "theNumber": 8
          },
          "third": null,
          "fourth": {
            "theNumber": 10
          },
          "fifth": {
            "theNumber": 11
          },
          "sixth": null
        }
      },
      "errors": [
        {
          "message": "Cannot change the number",
          "locations": [
            {
              "line": 8,
              "column": 7
            }
          ],
          "path": [
            "third"
          ]
        },
        {
          "message": "Cannot change the number",
          "locations": [
            {
              "line": 17,
              "column": 7
            }
          ],
          "path": [
            "sixth"
          ]
        },
        {
          "message": "Cannot change the number",
          "locations": [
            {
              "line": 27,
              "column": 9
            }
          ],
          "path": [
            "subField",
            "third"
          ]
        },
        {
          "message": "Cannot change the number",
          "locations": [
            {
              "line": 36,
              "column": 9
            }
          ],
          "path": [
            "subField",
            "sixth"
          ]
        }
      ]
    }
    "#);
}

#[test]
fn query_reads_the_number() {
    let root = numbers::Root::new(6);
    let engine = Engine::new(numbers::schema());
    let request = Request::parse("{ numberHolder { theNumber } }")
        .unwrap()
        .root_value(engine::schema::FieldValue::object(root));

    let response = runtime().block_on(execute(&engine, request));
    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "numberHolder": {
          "theNumber": 6
        }
      }
    }
    "#);
}

#[test]
fn mutation_without_mutation_root() {
    let engine = Engine::new(integration_tests::pets::schema(integration_tests::pets::TypeResolution::Annotated));
    let response = runtime().block_on(integration_tests::post(&engine, "mutation { pets { name } }"));

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": null,
      "errors": [
        {
          "message": "Schema is not configured to execute mutation operation."
        }
      ]
    }
    "#);
}
