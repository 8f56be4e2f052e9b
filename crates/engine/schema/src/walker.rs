use crate::Schema;

/// Turns an id or record into a walker bound to the schema.
pub trait Walk<'a> {
    type Walker: 'a;

    fn walk(self, schema: &'a Schema) -> Self::Walker;
}

macro_rules! walker {
    ($walker:ident, $id:ident, $record:ident) => {
        #[derive(Clone, Copy)]
        pub struct $walker<'a> {
            pub(crate) schema: &'a crate::Schema,
            pub id: crate::$id,
        }

        impl std::ops::Deref for $walker<'_> {
            type Target = $record;
            fn deref(&self) -> &Self::Target {
                self.as_ref()
            }
        }

        impl<'a> $walker<'a> {
            /// Prefer using Deref unless you need the 'a lifetime.
            #[allow(clippy::should_implement_trait)]
            pub fn as_ref(&self) -> &'a $record {
                &self.schema[self.id]
            }

            pub fn schema(&self) -> &'a crate::Schema {
                self.schema
            }
        }

        impl<'a> crate::Walk<'a> for crate::$id {
            type Walker = $walker<'a>;

            fn walk(self, schema: &'a crate::Schema) -> Self::Walker {
                $walker { schema, id: self }
            }
        }

        impl PartialEq for $walker<'_> {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.schema, other.schema) && self.id == other.id
            }
        }

        impl Eq for $walker<'_> {}
    };
}

pub(crate) use walker;
