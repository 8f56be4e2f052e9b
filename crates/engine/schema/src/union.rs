use crate::{ObjectDefinition, ObjectDefinitionId, TypeResolver, Walk, walker::walker};

pub struct UnionDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    /// Sorted
    pub possible_type_ids: Vec<ObjectDefinitionId>,
    pub resolve_type: Option<TypeResolver>,
}

walker!(UnionDefinition, UnionDefinitionId, UnionDefinitionRecord);

impl<'a> UnionDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn possible_types(&self) -> impl Iterator<Item = ObjectDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().possible_type_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn resolve_type(&self) -> Option<&'a TypeResolver> {
        self.as_ref().resolve_type.as_ref()
    }
}

impl std::fmt::Debug for UnionDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionDefinition")
            .field("name", &self.name())
            .field(
                "possible_types",
                &self.possible_types().map(|object| object.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
