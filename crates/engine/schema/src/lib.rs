//! Type system consumed by the executor.
//!
//! Every definition lives in a flat arena owned by [`Schema`] and is addressed by a small
//! `NonZero<u32>` id. References between definitions are ids, so cyclic type graphs are plain
//! index relationships. Walkers pair an id with the schema and deref to the underlying record.

mod builder;
mod definition;
mod enum_definition;
mod field;
mod ids;
mod input_object;
mod input_value;
mod inspect;
mod interface;
mod object;
mod resolver;
mod scalar;
mod ty;
mod union;
mod walker;

use std::collections::HashMap;

pub use builder::*;
pub use definition::*;
pub use enum_definition::*;
pub use field::*;
pub use ids::*;
pub use input_object::*;
pub use input_value::*;
pub use inspect::*;
pub use interface::*;
pub use object::*;
pub use resolver::*;
pub use scalar::*;
pub use ty::*;
pub use union::*;
pub use walker::*;
pub use wrapping::{ListWrapping, Wrapping};

pub struct Schema {
    pub(crate) objects: Vec<ObjectDefinitionRecord>,
    pub(crate) interfaces: Vec<InterfaceDefinitionRecord>,
    pub(crate) unions: Vec<UnionDefinitionRecord>,
    pub(crate) scalars: Vec<ScalarDefinitionRecord>,
    pub(crate) enums: Vec<EnumDefinitionRecord>,
    pub(crate) input_objects: Vec<InputObjectDefinitionRecord>,
    pub(crate) fields: Vec<FieldDefinitionRecord>,
    pub(crate) input_values: Vec<InputValueDefinitionRecord>,
    pub(crate) definitions_by_name: HashMap<String, DefinitionId>,
    pub(crate) root_operation_types: RootOperationTypes,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RootOperationTypes {
    pub query_id: ObjectDefinitionId,
    pub mutation_id: Option<ObjectDefinitionId>,
    pub subscription_id: Option<ObjectDefinitionId>,
}

impl Schema {
    pub fn builder(query: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(query)
    }

    pub fn walk<'a, Id: Walk<'a>>(&'a self, id: Id) -> Id::Walker {
        id.walk(self)
    }

    pub fn query_root(&self) -> ObjectDefinition<'_> {
        self.walk(self.root_operation_types.query_id)
    }

    pub fn mutation_root(&self) -> Option<ObjectDefinition<'_>> {
        self.root_operation_types.mutation_id.map(|id| self.walk(id))
    }

    pub fn subscription_root(&self) -> Option<ObjectDefinition<'_>> {
        self.root_operation_types.subscription_id.map(|id| self.walk(id))
    }

    pub fn definition_by_name(&self, name: &str) -> Option<Definition<'_>> {
        self.definitions_by_name.get(name).map(|id| self.walk(*id))
    }

    pub fn object_by_name(&self, name: &str) -> Option<ObjectDefinition<'_>> {
        self.definition_by_name(name).and_then(|definition| definition.as_object())
    }

    pub fn definitions(&self) -> impl Iterator<Item = Definition<'_>> + '_ {
        self.definitions_by_name.values().map(|id| self.walk(*id))
    }

    /// Whether `object` belongs to the possible types of `definition`. An object type is only a
    /// possible type of itself.
    pub fn is_possible_type(&self, definition: Definition<'_>, object: ObjectDefinition<'_>) -> bool {
        match definition {
            Definition::Object(candidate) => candidate.id == object.id,
            Definition::Interface(interface) => interface.possible_type_ids.binary_search(&object.id).is_ok(),
            Definition::Union(union) => union.possible_type_ids.binary_search(&object.id).is_ok(),
            Definition::Scalar(_) | Definition::Enum(_) | Definition::InputObject(_) => false,
        }
    }
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.definitions_by_name.keys().collect::<Vec<_>>();
        names.sort_unstable();
        f.debug_struct("Schema")
            .field("query", &self.query_root().name())
            .field("mutation", &self.mutation_root().map(|object| object.name()))
            .field("subscription", &self.subscription_root().map(|object| object.name()))
            .field("definitions", &names)
            .finish()
    }
}
