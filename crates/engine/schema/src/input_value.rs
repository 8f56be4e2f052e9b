use async_graphql_value::ConstValue;

use crate::{Type, TypeRecord, Walk, walker::walker};

/// Field argument or input object field.
pub struct InputValueDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub ty_record: TypeRecord,
    pub default_value: Option<ConstValue>,
}

walker!(InputValueDefinition, InputValueDefinitionId, InputValueDefinitionRecord);

impl<'a> InputValueDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn description(&self) -> Option<&'a str> {
        self.as_ref().description.as_deref()
    }

    pub fn ty(&self) -> Type<'a> {
        self.ty_record.walk(self.schema)
    }

    pub fn default_value(&self) -> Option<&'a ConstValue> {
        self.as_ref().default_value.as_ref()
    }
}

impl std::fmt::Debug for InputValueDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputValueDefinition")
            .field("name", &self.name())
            .field("ty", &self.ty().to_string())
            .field("default_value", &self.default_value())
            .finish()
    }
}
