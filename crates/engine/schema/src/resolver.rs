use std::{
    any::Any,
    borrow::Cow,
    collections::HashMap,
    fmt,
    future::Future,
    sync::Arc,
};

use async_graphql_parser::{
    Positioned,
    types::{Field, FragmentDefinition, OperationDefinition},
};
use async_graphql_value::{ConstValue, Name, Variables};
use engine_error::ResponsePath;
use futures_util::{FutureExt, future::BoxFuture};
use indexmap::IndexMap;

use crate::{ObjectDefinition, Schema, Type};

/// Raw value produced by a resolver, completed by the engine against the field's declared type.
#[derive(Clone, Default)]
pub enum FieldValue {
    #[default]
    Null,
    /// Plain value. Objects are read by the default resolver, lists complete item by item.
    Value(ConstValue),
    List(Vec<FieldValue>),
    /// Application object, read through [`ObjectValue::property`] or by the field resolvers
    /// downcasting it.
    Object(Arc<dyn ObjectValue>),
    /// Value annotated with its concrete object type, used for interfaces and unions.
    WithType {
        type_name: Cow<'static, str>,
        value: Box<FieldValue>,
    },
}

impl FieldValue {
    pub fn value(value: impl Into<ConstValue>) -> Self {
        FieldValue::Value(value.into())
    }

    pub fn object(object: impl ObjectValue) -> Self {
        FieldValue::Object(Arc::new(object))
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FieldValue>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn with_type(self, type_name: impl Into<Cow<'static, str>>) -> Self {
        FieldValue::WithType {
            type_name: type_name.into(),
            value: Box::new(self),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null | FieldValue::Value(ConstValue::Null) => true,
            FieldValue::WithType { value, .. } => value.is_null(),
            _ => false,
        }
    }

    /// Value without its type annotation.
    pub fn inner(&self) -> &FieldValue {
        match self {
            FieldValue::WithType { value, .. } => value.inner(),
            value => value,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self.inner() {
            FieldValue::Object(object) => object.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Explicit type annotation, or the type named by the object itself.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FieldValue::WithType { type_name, .. } => Some(type_name),
            FieldValue::Object(object) => object.type_name(),
            FieldValue::Value(ConstValue::Object(fields)) => match fields.get("__typename") {
                Some(ConstValue::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

impl From<ConstValue> for FieldValue {
    fn from(value: ConstValue) -> Self {
        FieldValue::Value(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::list(items)
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldValue::List(items) => f.debug_tuple("List").field(items).finish(),
            FieldValue::Object(object) => write!(f, "Object({})", object.type_name().unwrap_or("?")),
            FieldValue::WithType { type_name, value } => f
                .debug_struct("WithType")
                .field("type_name", type_name)
                .field("value", value)
                .finish(),
        }
    }
}

/// Application object exposed to the engine.
pub trait ObjectValue: Send + Sync + 'static {
    /// Property read by the default resolver for fields without their own resolver.
    /// `None` means the object has no such property and yields null.
    fn property(&self, name: &str, args: &Arguments) -> Option<FieldResult> {
        let _ = (name, args);
        None
    }

    /// Concrete object type name, used when the object is returned for an interface or union.
    fn type_name(&self) -> Option<&str> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Error raised by a resolver. Only the message and extensions are exposed in the response.
#[derive(Clone)]
pub struct FieldError {
    pub message: String,
    pub extensions: Vec<(Cow<'static, str>, serde_json::Value)>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl FieldError {
    pub fn new(message: impl fmt::Display) -> Self {
        FieldError {
            message: message.to_string(),
            extensions: Vec::new(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<serde_json::Value>) -> Self {
        self.extensions.push((key.into(), value.into()));
        self
    }
}

impl<E> From<E> for FieldError
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        FieldError {
            message: error.to_string(),
            extensions: Vec::new(),
            source: Some(Arc::new(error)),
        }
    }
}

impl fmt::Debug for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldError")
            .field("message", &self.message)
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub type FieldResult<T = FieldValue> = Result<T, FieldError>;

/// Result of a resolver invocation, either available immediately or still pending.
pub enum FieldFuture<'a> {
    Ready(FieldResult),
    Pending(BoxFuture<'a, FieldResult>),
}

impl<'a> FieldFuture<'a> {
    pub fn new<Fut, T>(future: Fut) -> Self
    where
        Fut: Future<Output = FieldResult<T>> + Send + 'a,
        T: Into<FieldValue>,
    {
        FieldFuture::Pending(async move { future.await.map(Into::into) }.boxed())
    }

    pub fn ready<T: Into<FieldValue>>(result: FieldResult<T>) -> Self {
        FieldFuture::Ready(result.map(Into::into))
    }

    pub fn from_value(value: impl Into<FieldValue>) -> Self {
        FieldFuture::Ready(Ok(value.into()))
    }

    pub fn err(error: impl Into<FieldError>) -> Self {
        FieldFuture::Ready(Err(error.into()))
    }
}

pub trait Resolver: Send + Sync {
    fn resolve<'a>(&'a self, ctx: ResolverContext<'a>) -> FieldFuture<'a>;
}

impl<F> Resolver for F
where
    F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync,
{
    fn resolve<'a>(&'a self, ctx: ResolverContext<'a>) -> FieldFuture<'a> {
        self(ctx)
    }
}

/// Everything a resolver receives.
#[derive(Clone, Copy)]
pub struct ResolverContext<'a> {
    pub parent_value: &'a FieldValue,
    pub args: &'a Arguments,
    pub context: &'a ContextValue,
    pub info: &'a ResolveInfo<'a>,
}

impl<'a> ResolverContext<'a> {
    pub fn data<T: Any + Send + Sync>(&self) -> Option<&'a T> {
        self.context.data::<T>()
    }

    pub fn parent<T: Any>(&self) -> Option<&'a T> {
        self.parent_value.downcast_ref::<T>()
    }
}

/// Position of the field being resolved within the operation.
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every occurrence of the field merged under the same response key.
    pub field_nodes: &'a [&'a Positioned<Field>],
    pub return_type: Type<'a>,
    pub parent_type: ObjectDefinition<'a>,
    pub path: ResponsePath,
    pub variable_values: &'a Variables,
    pub root_value: &'a FieldValue,
    pub operation: &'a Positioned<OperationDefinition>,
    pub fragments: &'a HashMap<Name, Positioned<FragmentDefinition>>,
    pub schema: &'a Schema,
}

impl<'a> ResolveInfo<'a> {
    pub fn response_key(&self) -> &'a str {
        self.field_nodes
            .first()
            .map(|field| field.node.response_key().node.as_str())
            .unwrap_or(self.field_name)
    }
}

impl fmt::Debug for ResolveInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveInfo")
            .field("field_name", &self.field_name)
            .field("return_type", &self.return_type)
            .field("parent_type", &self.parent_type.name())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Coerced arguments of a field, in definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(IndexMap<Name, ConstValue>);

impl Arguments {
    pub fn new(arguments: IndexMap<Name, ConstValue>) -> Self {
        Arguments(arguments)
    }

    pub fn get(&self, name: &str) -> Option<&ConstValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &ConstValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<Name, ConstValue> {
        self.0
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ConstValue::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ConstValue::String(value) => Some(value),
            ConstValue::Enum(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Opaque application data given verbatim to every resolver of a request.
#[derive(Clone, Default)]
pub struct ContextValue(Option<Arc<dyn Any + Send + Sync>>);

impl ContextValue {
    pub fn new<T: Any + Send + Sync>(data: T) -> Self {
        ContextValue(Some(Arc::new(data)))
    }

    pub fn data<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|data| data.downcast_ref::<T>())
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextValue").field(&self.0.is_some()).finish()
    }
}

/// Name of the concrete object type of a value returned for an interface or union.
pub type TypeResolver = Arc<dyn Fn(&FieldValue, &ContextValue, &ResolveInfo<'_>) -> Option<String> + Send + Sync>;

/// Whether a value belongs to an object type.
pub type IsTypeOf = Arc<dyn Fn(&FieldValue, &ContextValue, &ResolveInfo<'_>) -> bool + Send + Sync>;

/// Resolver used for fields without one: reads the property named after the field from the
/// parent value.
pub fn default_field_resolver(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    match ctx.parent_value.inner() {
        FieldValue::Value(ConstValue::Object(fields)) => {
            FieldFuture::from_value(fields.get(ctx.info.field_name).cloned().unwrap_or(ConstValue::Null))
        }
        FieldValue::Object(object) => match object.property(ctx.info.field_name, ctx.args) {
            Some(result) => FieldFuture::Ready(result),
            None => FieldFuture::from_value(FieldValue::Null),
        },
        _ => FieldFuture::from_value(FieldValue::Null),
    }
}
