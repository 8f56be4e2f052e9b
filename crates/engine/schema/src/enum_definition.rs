use async_graphql_value::{ConstValue, Name};

use crate::{inspect, walker::walker};

pub struct EnumDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueRecord>,
}

#[derive(Debug, Clone)]
pub struct EnumValueRecord {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

walker!(EnumDefinition, EnumDefinitionId, EnumDefinitionRecord);

impl<'a> EnumDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn values(&self) -> impl Iterator<Item = &'a EnumValueRecord> + 'a {
        self.as_ref().values.iter()
    }

    pub fn find_value_by_name(&self, name: &str) -> Option<&'a EnumValueRecord> {
        self.values().find(|value| value.name == name)
    }

    /// Resolvers may return enum values either as enums or as strings.
    pub fn serialize(&self, value: &ConstValue) -> Result<ConstValue, String> {
        let name = match value {
            ConstValue::Enum(name) => Some(name.as_str()),
            ConstValue::String(name) => Some(name.as_str()),
            _ => None,
        };
        match name.and_then(|name| self.find_value_by_name(name)) {
            Some(value) => Ok(ConstValue::Enum(Name::new(&value.name))),
            None => Err(format!(
                "Enum \"{}\" cannot represent value: {}",
                self.name(),
                inspect(value)
            )),
        }
    }

    /// Literals are enum values while JSON variables carry strings.
    pub fn parse_value(&self, value: &ConstValue) -> Result<ConstValue, String> {
        let name = match value {
            ConstValue::Enum(name) => name.as_str(),
            ConstValue::String(name) => name.as_str(),
            _ => {
                return Err(format!(
                    "Enum \"{}\" cannot represent non-enum value: {}.",
                    self.name(),
                    inspect(value)
                ));
            }
        };
        match self.find_value_by_name(name) {
            Some(value) => Ok(ConstValue::Enum(Name::new(&value.name))),
            None => Err(format!(
                "Value \"{name}\" does not exist in \"{}\" enum.",
                self.name()
            )),
        }
    }
}

impl std::fmt::Debug for EnumDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumDefinition")
            .field("name", &self.name())
            .field("values", &self.values().map(|value| &value.name).collect::<Vec<_>>())
            .finish()
    }
}
