use crate::{FieldDefinition, FieldDefinitionId, InterfaceDefinition, InterfaceDefinitionId, IsTypeOf, Walk, walker::walker};

pub struct ObjectDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub interface_ids: Vec<InterfaceDefinitionId>,
    pub field_ids: Vec<FieldDefinitionId>,
    pub is_type_of: Option<IsTypeOf>,
}

walker!(ObjectDefinition, ObjectDefinitionId, ObjectDefinitionRecord);

impl<'a> ObjectDefinition<'a> {
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

    pub fn interfaces(&self) -> impl Iterator<Item = InterfaceDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().interface_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn find_field_by_name(&self, name: &str) -> Option<FieldDefinition<'a>> {
        self.fields().find(|field| field.name() == name)
    }

    pub fn is_type_of(&self) -> Option<&'a IsTypeOf> {
        self.as_ref().is_type_of.as_ref()
    }
}

impl std::fmt::Debug for ObjectDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectDefinition")
            .field("name", &self.name())
            .field("description", &self.description())
            .field(
                "interfaces",
                &self.interfaces().map(|interface| interface.name()).collect::<Vec<_>>(),
            )
            .field("fields", &self.fields().map(|f| f.name()).collect::<Vec<_>>())
            .finish()
    }
}
