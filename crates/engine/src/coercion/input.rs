use std::convert::Infallible;

use async_graphql_value::{ConstValue, Name, Value, Variables};
use engine_schema::{Definition, InputObjectDefinition, Type};
use indexmap::IndexMap;

use super::error::{InputPath, InputPathSegment, InputValueError};

/// Coerces input values, either argument literals or raw variable values, against their
/// declared input type.
pub(crate) struct InputValueCoercer<'a> {
    /// Coerced variable values, absent when coercing the variables themselves.
    variables: Option<&'a Variables>,
    path: InputPath,
}

impl<'a> InputValueCoercer<'a> {
    pub fn new(variables: Option<&'a Variables>) -> Self {
        InputValueCoercer {
            variables,
            path: InputPath::default(),
        }
    }

    /// Returns `None` when the value is a variable without any runtime value, which callers
    /// treat as if nothing had been provided.
    pub fn coerce(&mut self, ty: Type<'_>, value: &Value) -> Result<Option<ConstValue>, InputValueError> {
        if let Value::Variable(name) = value {
            return match self.variables.and_then(|variables| variables.get(name)) {
                Some(ConstValue::Null) if ty.is_required() => Err(self.unexpected_null(ty)),
                Some(value) => Ok(Some(value.clone())),
                None => Ok(None),
            };
        }

        if matches!(value, Value::Null) {
            return if ty.is_required() {
                Err(self.unexpected_null(ty))
            } else {
                Ok(Some(ConstValue::Null))
            };
        }

        if let Some((_, item_wrapping)) = ty.wrapping.without_list() {
            let item_ty = ty.with_wrapping(item_wrapping);
            let Value::List(items) = value else {
                // A single value is accepted where a list is expected.
                return Ok(self.coerce(item_ty, value)?.map(|item| ConstValue::List(vec![item])));
            };

            let mut coerced = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                self.path.push(InputPathSegment::Index(index));
                let item = match self.coerce(item_ty, item)? {
                    Some(item) => item,
                    None if item_ty.is_required() => return Err(self.unexpected_null(item_ty)),
                    None => ConstValue::Null,
                };
                self.path.pop();
                coerced.push(item);
            }
            return Ok(Some(ConstValue::List(coerced)));
        }

        match ty.definition() {
            Definition::Scalar(scalar) => scalar
                .parse_value(&self.resolve_variables(value))
                .map(Some)
                .map_err(|message| self.incorrect_value(message)),
            Definition::Enum(r#enum) => r#enum
                .parse_value(&self.resolve_variables(value))
                .map(Some)
                .map_err(|message| self.incorrect_value(message)),
            Definition::InputObject(input_object) => self.coerce_input_object(input_object, value).map(Some),
            Definition::Object(_) | Definition::Interface(_) | Definition::Union(_) => {
                Err(InputValueError::NotAnInputType {
                    name: ty.name().to_string(),
                    path: self.path.clone(),
                })
            }
        }
    }

    fn coerce_input_object(
        &mut self,
        input_object: InputObjectDefinition<'_>,
        value: &Value,
    ) -> Result<ConstValue, InputValueError> {
        let Value::Object(fields) = value else {
            return Err(InputValueError::MissingObject {
                input_object: input_object.name().to_string(),
                path: self.path.clone(),
            });
        };

        let mut coerced = IndexMap::with_capacity(fields.len());
        for field in input_object.input_fields() {
            let provided = match fields.get(field.name()) {
                Some(value) => {
                    self.path.push(InputPathSegment::Field(field.name().to_string()));
                    let value = self.coerce(field.ty(), value)?;
                    self.path.pop();
                    value
                }
                None => None,
            };

            match provided.or_else(|| field.default_value().cloned()) {
                Some(value) => {
                    coerced.insert(Name::new(field.name()), value);
                }
                None if field.ty().is_required() => {
                    return Err(InputValueError::MissingInputField {
                        name: field.name().to_string(),
                        expected: field.ty().to_string(),
                        path: self.path.clone(),
                    });
                }
                None => {}
            }
        }

        if let Some(unknown) = fields
            .keys()
            .find(|name| input_object.find_input_field_by_name(name).is_none())
        {
            return Err(InputValueError::UnknownInputField {
                input_object: input_object.name().to_string(),
                name: unknown.to_string(),
                path: self.path.clone(),
            });
        }

        Ok(ConstValue::Object(coerced))
    }

    /// Leaf values may embed variables when a custom scalar accepts objects or lists. Missing
    /// ones are replaced by null.
    fn resolve_variables(&self, value: &Value) -> ConstValue {
        let resolved = value.clone().into_const_with(|name| {
            Ok::<_, Infallible>(
                self.variables
                    .and_then(|variables| variables.get(&name))
                    .cloned()
                    .unwrap_or(ConstValue::Null),
            )
        });
        match resolved {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    fn unexpected_null(&self, ty: Type<'_>) -> InputValueError {
        InputValueError::UnexpectedNull {
            expected: ty.to_string(),
            path: self.path.clone(),
        }
    }

    fn incorrect_value(&self, message: String) -> InputValueError {
        InputValueError::IncorrectValue {
            message,
            path: self.path.clone(),
        }
    }
}
