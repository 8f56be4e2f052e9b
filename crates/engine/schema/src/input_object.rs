use crate::{InputValueDefinition, InputValueDefinitionId, Walk, walker::walker};

pub struct InputObjectDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub input_field_ids: Vec<InputValueDefinitionId>,
}

walker!(InputObjectDefinition, InputObjectDefinitionId, InputObjectDefinitionRecord);

impl<'a> InputObjectDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn input_fields(&self) -> impl Iterator<Item = InputValueDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().input_field_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn find_input_field_by_name(&self, name: &str) -> Option<InputValueDefinition<'a>> {
        self.input_fields().find(|field| field.name() == name)
    }
}

impl std::fmt::Debug for InputObjectDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputObjectDefinition")
            .field("name", &self.name())
            .field("input_fields", &self.input_fields().collect::<Vec<_>>())
            .finish()
    }
}
