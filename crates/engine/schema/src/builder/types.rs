use std::sync::Arc;

use async_graphql_value::ConstValue;

use crate::{
    ContextValue, FieldFuture, FieldValue, IsTypeOf, ResolveInfo, Resolver, ResolverContext, ScalarParser,
    ScalarSerializer, TypeResolver,
};

/// Type registered into a [`SchemaBuilder`](super::SchemaBuilder).
pub enum TypeBuilder {
    Object(Object),
    Interface(Interface),
    Union(Union),
    Scalar(Scalar),
    Enum(Enum),
    InputObject(InputObject),
}

impl TypeBuilder {
    pub fn name(&self) -> &str {
        match self {
            TypeBuilder::Object(object) => &object.name,
            TypeBuilder::Interface(interface) => &interface.name,
            TypeBuilder::Union(union) => &union.name,
            TypeBuilder::Scalar(scalar) => &scalar.name,
            TypeBuilder::Enum(r#enum) => &r#enum.name,
            TypeBuilder::InputObject(input_object) => &input_object.name,
        }
    }
}

macro_rules! into_type_builder {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for TypeBuilder {
                fn from(ty: $ty) -> Self {
                    TypeBuilder::$ty(ty)
                }
            }
        )*
    };
}

into_type_builder!(Object, Interface, Union, Scalar, Enum, InputObject);

pub struct Object {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) implements: Vec<String>,
    pub(super) fields: Vec<Field>,
    pub(super) is_type_of: Option<IsTypeOf>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Object {
            name: name.into(),
            description: None,
            implements: Vec::new(),
            fields: Vec::new(),
            is_type_of: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn is_type_of<F>(mut self, is_type_of: F) -> Self
    where
        F: Fn(&FieldValue, &ContextValue, &ResolveInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.is_type_of = Some(Arc::new(is_type_of));
        self
    }
}

pub struct Interface {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) fields: Vec<Field>,
    pub(super) resolve_type: Option<TypeResolver>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Interface {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            resolve_type: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn resolve_type<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&FieldValue, &ContextValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }
}

pub struct Union {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) possible_types: Vec<String>,
    pub(super) resolve_type: Option<TypeResolver>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Union {
            name: name.into(),
            description: None,
            possible_types: Vec::new(),
            resolve_type: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn possible_type(mut self, name: impl Into<String>) -> Self {
        self.possible_types.push(name.into());
        self
    }

    #[must_use]
    pub fn resolve_type<F>(mut self, resolve_type: F) -> Self
    where
        F: Fn(&FieldValue, &ContextValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.resolve_type = Some(Arc::new(resolve_type));
        self
    }
}

pub struct Scalar {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) serialize: Option<ScalarSerializer>,
    pub(super) parse_value: Option<ScalarParser>,
}

impl Scalar {
    pub fn new(name: impl Into<String>) -> Self {
        Scalar {
            name: name.into(),
            description: None,
            serialize: None,
            parse_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn serialize<F>(mut self, serialize: F) -> Self
    where
        F: Fn(&ConstValue) -> Result<ConstValue, String> + Send + Sync + 'static,
    {
        self.serialize = Some(Arc::new(serialize));
        self
    }

    #[must_use]
    pub fn parse_value<F>(mut self, parse_value: F) -> Self
    where
        F: Fn(&ConstValue) -> Result<ConstValue, String> + Send + Sync + 'static,
    {
        self.parse_value = Some(Arc::new(parse_value));
        self
    }
}

pub struct Enum {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) values: Vec<(String, Option<String>)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.push((name.into(), None));
        self
    }

    #[must_use]
    pub fn values<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.values.extend(names.into_iter().map(|name| (name.into(), None)));
        self
    }

    #[must_use]
    pub fn deprecated_value(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.values.push((name.into(), Some(reason.into())));
        self
    }
}

pub struct InputObject {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) fields: Vec<InputValue>,
}

impl InputObject {
    pub fn new(name: impl Into<String>) -> Self {
        InputObject {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }
}

/// Output field. The type is written in SDL, `"[Int!]!"` for example.
pub struct Field {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) ty: String,
    pub(super) arguments: Vec<InputValue>,
    pub(super) resolver: Option<Arc<dyn Resolver>>,
    pub(super) deprecation_reason: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            description: None,
            ty: ty.into(),
            arguments: Vec::new(),
            resolver: None,
            deprecation_reason: None,
        }
    }

    #[must_use]
    pub fn resolve<F>(mut self, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    #[must_use]
    pub fn resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    #[must_use]
    pub fn argument(mut self, argument: InputValue) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

/// Field argument or input object field.
pub struct InputValue {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) ty: String,
    pub(super) default_value: Option<ConstValue>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        InputValue {
            name: name.into(),
            description: None,
            ty: ty.into(),
            default_value: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<ConstValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}
