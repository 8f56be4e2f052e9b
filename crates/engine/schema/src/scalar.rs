use std::sync::Arc;

use async_graphql_value::ConstValue;

use crate::{inspect, walker::walker};

/// Converts a resolved value into its serialized form, or explains why it cannot be.
pub type ScalarSerializer = Arc<dyn Fn(&ConstValue) -> Result<ConstValue, String> + Send + Sync>;
/// Converts an input value (variable or literal) into the value given to resolvers.
pub type ScalarParser = Arc<dyn Fn(&ConstValue) -> Result<ConstValue, String> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
    String,
    Boolean,
    ID,
    Custom,
}

impl ScalarType {
    pub const BUILT_INS: [(&'static str, ScalarType); 5] = [
        ("Int", ScalarType::Int),
        ("Float", ScalarType::Float),
        ("String", ScalarType::String),
        ("Boolean", ScalarType::Boolean),
        ("ID", ScalarType::ID),
    ];

    pub fn from_name(name: &str) -> Self {
        Self::BUILT_INS
            .iter()
            .find_map(|(built_in, ty)| (*built_in == name).then_some(*ty))
            .unwrap_or(ScalarType::Custom)
    }

    /// Result coercion of a resolved value.
    pub fn serialize(self, value: &ConstValue) -> Result<ConstValue, String> {
        match self {
            ScalarType::Int => serialize_int(value),
            ScalarType::Float => serialize_float(value),
            ScalarType::String => match value {
                ConstValue::String(_) => Ok(value.clone()),
                ConstValue::Boolean(b) => Ok(ConstValue::String(b.to_string())),
                ConstValue::Number(n) => Ok(ConstValue::String(n.to_string())),
                _ => Err(format!("String cannot represent value: {}", inspect(value))),
            },
            ScalarType::Boolean => match value {
                ConstValue::Boolean(_) => Ok(value.clone()),
                ConstValue::Number(n) if n.as_f64().is_some_and(f64::is_finite) => {
                    Ok(ConstValue::Boolean(n.as_f64() != Some(0.0)))
                }
                _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(value))),
            },
            ScalarType::ID => match value {
                ConstValue::String(_) => Ok(value.clone()),
                ConstValue::Number(n) if n.is_i64() || n.is_u64() => Ok(ConstValue::String(n.to_string())),
                _ => Err(format!("ID cannot represent value: {}", inspect(value))),
            },
            ScalarType::Custom => Ok(value.clone()),
        }
    }

    /// Input coercion of a variable value or argument literal, never called with null.
    pub fn coerce_input(self, value: &ConstValue) -> Result<ConstValue, String> {
        match self {
            ScalarType::Int => match value {
                ConstValue::Number(_) => serialize_int(value),
                _ => Err(format!("Int cannot represent non-integer value: {}", inspect(value))),
            },
            ScalarType::Float => match value {
                ConstValue::Number(_) => Ok(value.clone()),
                _ => Err(format!("Float cannot represent non numeric value: {}", inspect(value))),
            },
            ScalarType::String => match value {
                ConstValue::String(_) => Ok(value.clone()),
                _ => Err(format!("String cannot represent a non string value: {}", inspect(value))),
            },
            ScalarType::Boolean => match value {
                ConstValue::Boolean(_) => Ok(value.clone()),
                _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(value))),
            },
            ScalarType::ID => match value {
                ConstValue::String(_) => Ok(value.clone()),
                ConstValue::Number(n) if n.is_i64() || n.is_u64() => Ok(ConstValue::String(n.to_string())),
                _ => Err(format!("ID cannot represent value: {}", inspect(value))),
            },
            ScalarType::Custom => Ok(value.clone()),
        }
    }
}

fn serialize_int(value: &ConstValue) -> Result<ConstValue, String> {
    let number = match value {
        ConstValue::Boolean(b) => return Ok(ConstValue::from(i32::from(*b))),
        ConstValue::Number(n) => {
            if let Some(int) = n.as_i64() {
                return i32::try_from(int)
                    .map(ConstValue::from)
                    .map_err(|_| format!("Int cannot represent non 32-bit signed integer value: {}", inspect(value)));
            }
            n.as_f64()
        }
        ConstValue::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let Some(number) = number.filter(|number| number.is_finite() && number.fract() == 0.0) else {
        return Err(format!("Int cannot represent non-integer value: {}", inspect(value)));
    };

    if number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return Err(format!(
            "Int cannot represent non 32-bit signed integer value: {}",
            inspect(value)
        ));
    }

    Ok(ConstValue::from(number as i32))
}

fn serialize_float(value: &ConstValue) -> Result<ConstValue, String> {
    let number = match value {
        ConstValue::Boolean(b) => return Ok(ConstValue::from(i32::from(*b))),
        ConstValue::Number(n) => return Ok(ConstValue::Number(n.clone())),
        ConstValue::String(s) if !s.trim().is_empty() => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .and_then(serde_json::Number::from_f64)
        .map(ConstValue::Number)
        .ok_or_else(|| format!("Float cannot represent non numeric value: {}", inspect(value)))
}

pub struct ScalarDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub ty: ScalarType,
    pub serialize: Option<ScalarSerializer>,
    pub parse_value: Option<ScalarParser>,
}

walker!(ScalarDefinition, ScalarDefinitionId, ScalarDefinitionRecord);

impl<'a> ScalarDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn ty(&self) -> ScalarType {
        self.as_ref().ty
    }

    pub fn serialize(&self, value: &ConstValue) -> Result<ConstValue, String> {
        match &self.as_ref().serialize {
            Some(serialize) => serialize(value),
            None => self.ty().serialize(value),
        }
    }

    pub fn parse_value(&self, value: &ConstValue) -> Result<ConstValue, String> {
        match &self.as_ref().parse_value {
            Some(parse) => parse(value),
            None => self.ty().coerce_input(value),
        }
    }
}

impl std::fmt::Debug for ScalarDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarDefinition")
            .field("name", &self.name())
            .field("ty", &self.ty())
            .finish()
    }
}
