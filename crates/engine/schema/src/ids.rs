use std::num::NonZero;

use crate::{
    EnumDefinitionRecord, FieldDefinitionRecord, InputObjectDefinitionRecord, InputValueDefinitionRecord,
    InterfaceDefinitionRecord, ObjectDefinitionRecord, ScalarDefinitionRecord, Schema, UnionDefinitionRecord,
};

macro_rules! ids {
    ($($name:ident => $record:ident in $field:ident,)*) => {
        $(
            #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
            pub struct $name(NonZero<u32>);

            impl From<usize> for $name {
                fn from(index: usize) -> Self {
                    Self(NonZero::<u32>::MIN.saturating_add(index as u32))
                }
            }

            impl From<$name> for usize {
                fn from(id: $name) -> Self {
                    (id.0.get() - 1) as usize
                }
            }

            impl std::ops::Index<$name> for Schema {
                type Output = $record;

                fn index(&self, id: $name) -> &Self::Output {
                    &self.$field[usize::from(id)]
                }
            }
        )*
    };
}

ids! {
    ObjectDefinitionId => ObjectDefinitionRecord in objects,
    InterfaceDefinitionId => InterfaceDefinitionRecord in interfaces,
    UnionDefinitionId => UnionDefinitionRecord in unions,
    ScalarDefinitionId => ScalarDefinitionRecord in scalars,
    EnumDefinitionId => EnumDefinitionRecord in enums,
    InputObjectDefinitionId => InputObjectDefinitionRecord in input_objects,
    FieldDefinitionId => FieldDefinitionRecord in fields,
    InputValueDefinitionId => InputValueDefinitionRecord in input_values,
}
