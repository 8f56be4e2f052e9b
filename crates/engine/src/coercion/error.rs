use std::fmt;

use async_graphql_value::ConstValue;

#[derive(Debug, thiserror::Error)]
pub(crate) enum InputValueError {
    #[error("Expected non-nullable type \"{expected}\" not to be null.")]
    UnexpectedNull { expected: String, path: InputPath },
    #[error("Expected type \"{input_object}\" to be an object.")]
    MissingObject { input_object: String, path: InputPath },
    #[error("Field \"{name}\" of required type \"{expected}\" was not provided.")]
    MissingInputField {
        name: String,
        expected: String,
        path: InputPath,
    },
    #[error("Field \"{name}\" is not defined by type \"{input_object}\".")]
    UnknownInputField {
        input_object: String,
        name: String,
        path: InputPath,
    },
    /// Rejected by the scalar or enum parser, the message comes from it.
    #[error("{message}")]
    IncorrectValue { message: String, path: InputPath },
    #[error("\"{name}\" is not an input type.")]
    NotAnInputType { name: String, path: InputPath },
}

impl InputValueError {
    pub fn path(&self) -> &InputPath {
        match self {
            InputValueError::UnexpectedNull { path, .. }
            | InputValueError::MissingObject { path, .. }
            | InputValueError::MissingInputField { path, .. }
            | InputValueError::UnknownInputField { path, .. }
            | InputValueError::IncorrectValue { path, .. }
            | InputValueError::NotAnInputType { path, .. } => path,
        }
    }
}

/// Position inside an input value, relative to the variable or argument being coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct InputPath(Vec<InputPathSegment>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputPathSegment {
    Field(String),
    Index(usize),
}

impl InputPath {
    pub fn push(&mut self, segment: InputPathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value found at this path, stopping at the deepest value that exists.
    pub fn value_in<'v>(&self, mut value: &'v ConstValue) -> &'v ConstValue {
        for segment in &self.0 {
            let next = match (segment, value) {
                (InputPathSegment::Field(name), ConstValue::Object(fields)) => fields.get(name.as_str()),
                (InputPathSegment::Index(index), ConstValue::List(items)) => items.get(*index),
                _ => None,
            };
            match next {
                Some(next) => value = next,
                None => break,
            }
        }
        value
    }
}

/// Renders `.field[0]`, appended to the variable name in error messages.
impl fmt::Display for InputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            match segment {
                InputPathSegment::Field(name) => write!(f, ".{name}")?,
                InputPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
