use async_graphql_parser::{
    types::{BaseType, Type as ParsedType, VariableDefinition},
    Positioned,
};
use async_graphql_value::{ConstValue, Variables};
use engine_error::{ErrorCode, GraphqlError};
use engine_schema::{inspect, Schema, Type, Wrapping};

use super::input::InputValueCoercer;

/// Coerces the raw variable values against the operation's variable definitions. Only defined
/// variables are kept, defaults included.
pub(crate) fn coerce_variable_values(
    schema: &Schema,
    definitions: &[Positioned<VariableDefinition>],
    mut provided: Variables,
) -> Result<Variables, Vec<GraphqlError>> {
    let mut coerced = Variables::default();
    let mut errors = Vec::new();

    for definition in definitions {
        let name = &definition.node.name.node;
        let error = |message: String| GraphqlError::new(message, ErrorCode::VariableError).with_location(definition.pos);

        let Some(ty) = variable_type(schema, &definition.node.var_type.node) else {
            errors.push(error(format!(
                "Variable \"${name}\" expected value of type \"{}\" which cannot be used as an input type.",
                definition.node.var_type.node
            )));
            continue;
        };

        let value = match provided.remove(name) {
            Some(value) => value,
            None => match &definition.node.default_value {
                Some(default_value) => default_value.node.clone(),
                None if ty.is_required() => {
                    errors.push(error(format!(
                        "Variable \"${name}\" of required type \"{ty}\" was not provided."
                    )));
                    continue;
                }
                None => continue,
            },
        };

        if value == ConstValue::Null && ty.is_required() {
            errors.push(error(format!(
                "Variable \"${name}\" of non-null type \"{ty}\" must not be null."
            )));
            continue;
        }

        match InputValueCoercer::new(None).coerce(ty, &value.clone().into_value()) {
            Ok(Some(value)) => {
                coerced.insert(name.clone(), value);
            }
            Ok(None) => {}
            Err(err) => {
                let path = err.path();
                let at = if path.is_empty() {
                    String::new()
                } else {
                    format!(" at \"{name}{path}\"")
                };
                errors.push(error(format!(
                    "Variable \"${name}\" got invalid value {}{at}; {err}",
                    inspect(path.value_in(&value))
                )));
            }
        }
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Schema type of a variable, `None` if it does not exist or isn't an input type.
pub(crate) fn variable_type<'s>(schema: &'s Schema, ty: &ParsedType) -> Option<Type<'s>> {
    let mut list_required = Vec::new();
    let mut current = ty;
    let name = loop {
        match &current.base {
            BaseType::Named(name) => break name,
            BaseType::List(item) => {
                list_required.push(!current.nullable);
                current = item;
            }
        }
    };

    let mut wrapping = Wrapping::new(!current.nullable);
    for required in list_required.into_iter().rev() {
        wrapping = if required {
            wrapping.wrap_list_non_null()
        } else {
            wrapping.wrap_list()
        };
    }

    let definition = schema.definition_by_name(name)?;
    definition.is_input_type().then_some(Type { definition, wrapping })
}
