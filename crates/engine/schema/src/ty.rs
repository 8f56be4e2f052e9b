use wrapping::Wrapping;

use crate::{Definition, DefinitionId, Schema, Walk};

/// Named type and its wrapping, `[Int!]!` for example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRecord {
    pub definition_id: DefinitionId,
    pub wrapping: Wrapping,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Type<'a> {
    pub definition: Definition<'a>,
    pub wrapping: Wrapping,
}

impl<'a> Walk<'a> for TypeRecord {
    type Walker = Type<'a>;

    fn walk(self, schema: &'a Schema) -> Self::Walker {
        Type {
            definition: self.definition_id.walk(schema),
            wrapping: self.wrapping,
        }
    }
}

impl<'a> Type<'a> {
    pub fn definition(&self) -> Definition<'a> {
        self.definition
    }

    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    pub fn is_required(&self) -> bool {
        self.wrapping.is_required()
    }

    pub fn is_list(&self) -> bool {
        self.wrapping.is_list()
    }

    /// Same named type with a different wrapping.
    #[must_use]
    pub fn with_wrapping(&self, wrapping: Wrapping) -> Self {
        Type {
            definition: self.definition,
            wrapping,
        }
    }
}

impl std::fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.wrapping.type_display(self.definition.name()).fmt(f)
    }
}

impl std::fmt::Debug for Type<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type({self})")
    }
}
