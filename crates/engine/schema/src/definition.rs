use crate::{
    EnumDefinition, EnumDefinitionId, InputObjectDefinition, InputObjectDefinitionId, InterfaceDefinition,
    InterfaceDefinitionId, ObjectDefinition, ObjectDefinitionId, ScalarDefinition, ScalarDefinitionId, Schema,
    UnionDefinition, UnionDefinitionId, Walk,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionId {
    Object(ObjectDefinitionId),
    Interface(InterfaceDefinitionId),
    Union(UnionDefinitionId),
    Scalar(ScalarDefinitionId),
    Enum(EnumDefinitionId),
    InputObject(InputObjectDefinitionId),
}

/// Any named type of the schema.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Definition<'a> {
    Object(ObjectDefinition<'a>),
    Interface(InterfaceDefinition<'a>),
    Union(UnionDefinition<'a>),
    Scalar(ScalarDefinition<'a>),
    Enum(EnumDefinition<'a>),
    InputObject(InputObjectDefinition<'a>),
}

impl<'a> Walk<'a> for DefinitionId {
    type Walker = Definition<'a>;

    fn walk(self, schema: &'a Schema) -> Self::Walker {
        match self {
            DefinitionId::Object(id) => Definition::Object(id.walk(schema)),
            DefinitionId::Interface(id) => Definition::Interface(id.walk(schema)),
            DefinitionId::Union(id) => Definition::Union(id.walk(schema)),
            DefinitionId::Scalar(id) => Definition::Scalar(id.walk(schema)),
            DefinitionId::Enum(id) => Definition::Enum(id.walk(schema)),
            DefinitionId::InputObject(id) => Definition::InputObject(id.walk(schema)),
        }
    }
}

impl<'a> Definition<'a> {
    pub fn id(&self) -> DefinitionId {
        match self {
            Definition::Object(object) => DefinitionId::Object(object.id),
            Definition::Interface(interface) => DefinitionId::Interface(interface.id),
            Definition::Union(union) => DefinitionId::Union(union.id),
            Definition::Scalar(scalar) => DefinitionId::Scalar(scalar.id),
            Definition::Enum(r#enum) => DefinitionId::Enum(r#enum.id),
            Definition::InputObject(input_object) => DefinitionId::InputObject(input_object.id),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Definition::Object(object) => object.name(),
            Definition::Interface(interface) => interface.name(),
            Definition::Union(union) => union.name(),
            Definition::Scalar(scalar) => scalar.name(),
            Definition::Enum(r#enum) => r#enum.name(),
            Definition::InputObject(input_object) => input_object.name(),
        }
    }

    pub fn as_object(&self) -> Option<ObjectDefinition<'a>> {
        match self {
            Definition::Object(object) => Some(*object),
            _ => None,
        }
    }

    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            Definition::Scalar(_) | Definition::Enum(_) | Definition::InputObject(_)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Definition::Object(_) => "object",
            Definition::Interface(_) => "interface",
            Definition::Union(_) => "union",
            Definition::Scalar(_) => "scalar",
            Definition::Enum(_) => "enum",
            Definition::InputObject(_) => "input object",
        }
    }
}

impl std::fmt::Debug for Definition<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind(), self.name())
    }
}
