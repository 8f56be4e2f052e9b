use crate::{FieldDefinition, FieldDefinitionId, ObjectDefinition, ObjectDefinitionId, TypeResolver, Walk, walker::walker};

pub struct InterfaceDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub field_ids: Vec<FieldDefinitionId>,
    /// Sorted
    pub possible_type_ids: Vec<ObjectDefinitionId>,
    pub resolve_type: Option<TypeResolver>,
}

walker!(InterfaceDefinition, InterfaceDefinitionId, InterfaceDefinitionRecord);

impl<'a> InterfaceDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn description(&self) -> Option<&'a str> {
        self.as_ref().description.as_deref()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().field_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn possible_types(&self) -> impl Iterator<Item = ObjectDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().possible_type_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn resolve_type(&self) -> Option<&'a TypeResolver> {
        self.as_ref().resolve_type.as_ref()
    }
}

impl std::fmt::Debug for InterfaceDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceDefinition")
            .field("name", &self.name())
            .field("fields", &self.fields().map(|f| f.name()).collect::<Vec<_>>())
            .field(
                "possible_types",
                &self.possible_types().map(|object| object.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
