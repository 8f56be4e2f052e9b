use std::sync::Arc;

use crate::{Definition, DefinitionId, InputValueDefinition, InputValueDefinitionId, Resolver, Type, TypeRecord, Walk, walker::walker};

pub struct FieldDefinitionRecord {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: DefinitionId,
    pub ty_record: TypeRecord,
    pub argument_ids: Vec<InputValueDefinitionId>,
    /// Fields without a resolver use the engine's default resolver.
    pub resolver: Option<Arc<dyn Resolver>>,
    pub deprecation_reason: Option<String>,
}

walker!(FieldDefinition, FieldDefinitionId, FieldDefinitionRecord);

impl<'a> FieldDefinition<'a> {
    pub fn name(&self) -> &'a str {
        &self.as_ref().name
    }

    pub fn description(&self) -> Option<&'a str> {
        self.as_ref().description.as_deref()
    }

    pub fn parent(&self) -> Definition<'a> {
        self.parent_id.walk(self.schema)
    }

    pub fn ty(&self) -> Type<'a> {
        self.ty_record.walk(self.schema)
    }

    pub fn arguments(&self) -> impl Iterator<Item = InputValueDefinition<'a>> + 'a {
        let schema = self.schema;
        self.as_ref().argument_ids.iter().map(move |id| id.walk(schema))
    }

    pub fn resolver(&self) -> Option<&'a Arc<dyn Resolver>> {
        self.as_ref().resolver.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&'a str> {
        self.as_ref().deprecation_reason.as_deref()
    }
}

impl std::fmt::Debug for FieldDefinition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name())
            .field("parent", &self.parent().name())
            .field("ty", &self.ty().to_string())
            .field("arguments", &self.arguments().collect::<Vec<_>>())
            .field("has_resolver", &self.resolver().is_some())
            .finish()
    }
}
