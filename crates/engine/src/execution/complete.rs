use std::borrow::Cow;

use async_graphql_value::ConstValue;
use engine_error::{ErrorCode, GraphqlError, ResponsePath};
use engine_schema::{inspect, Definition, FieldValue, ObjectDefinition, ResolveInfo, Type};
use futures_util::{
    future::{join_all, BoxFuture},
    FutureExt,
};

use super::{collect_fields, execute_fields, field::field_locations, Bubble, ExecutionContext};
use crate::response::ResponseValue;

/// Completes a resolved value against `ty`, one wrapping layer at a time.
///
/// A non-null layer turns a null into an error and propagates it. A nullable layer absorbs any
/// propagated null from within and becomes null itself.
pub(super) fn complete_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    info: &'a ResolveInfo<'a>,
    ty: Type<'a>,
    path: ResponsePath,
    value: FieldValue,
) -> BoxFuture<'a, Result<ResponseValue, Bubble>> {
    async move {
        let required = ty.is_required();
        let nullable_ty = ty.with_wrapping(ty.wrapping.without_non_null());

        match complete_nullable_value(ctx, info, nullable_ty, &path, value).await {
            Ok(ResponseValue::Null) if required => {
                let message = format!(
                    "Cannot return null for non-nullable field {}.{}.",
                    info.parent_type.name(),
                    info.field_name
                );
                ctx.push_error(completion_error(info, &path, message));
                Err(Bubble)
            }
            Err(Bubble) if !required => Ok(ResponseValue::Null),
            result => result,
        }
    }
    .boxed()
}

async fn complete_nullable_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    info: &'a ResolveInfo<'a>,
    ty: Type<'a>,
    path: &ResponsePath,
    value: FieldValue,
) -> Result<ResponseValue, Bubble> {
    if value.is_null() {
        return Ok(ResponseValue::Null);
    }

    if let Some((_, item_wrapping)) = ty.wrapping.without_list() {
        return complete_list_value(ctx, info, ty.with_wrapping(item_wrapping), path, value).await;
    }

    match ty.definition() {
        Definition::Scalar(scalar) => complete_leaf_value(ctx, info, ty, path, &value, |value| scalar.serialize(value)),
        Definition::Enum(r#enum) => complete_leaf_value(ctx, info, ty, path, &value, |value| r#enum.serialize(value)),
        Definition::Object(object) => complete_object_value(ctx, info, object, path, value).await,
        abstract_type @ (Definition::Interface(_) | Definition::Union(_)) => {
            let object = resolve_abstract_type(ctx, info, abstract_type, path, &value)?;
            complete_object_value(ctx, info, object, path, value).await
        }
        Definition::InputObject(_) => {
            let message = format!("\"{}\" is an input type and cannot be returned by a field.", ty.name());
            ctx.push_error(GraphqlError::internal_server_error().with_path(path));
            tracing::error!("{message}");
            Err(Bubble)
        }
    }
}

async fn complete_list_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    info: &'a ResolveInfo<'a>,
    item_ty: Type<'a>,
    path: &ResponsePath,
    value: FieldValue,
) -> Result<ResponseValue, Bubble> {
    let items = match without_type(value) {
        FieldValue::List(items) => items,
        FieldValue::Value(ConstValue::List(items)) => items.into_iter().map(FieldValue::Value).collect(),
        _ => {
            let message = format!(
                "Expected Iterable, but did not find one for field \"{}.{}\".",
                info.parent_type.name(),
                info.field_name
            );
            ctx.push_error(completion_error(info, path, message));
            return Err(Bubble);
        }
    };

    let futures = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| complete_value(ctx, info, item_ty, path.index(index), item));

    join_all(futures)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map(ResponseValue::List)
}

fn complete_leaf_value(
    ctx: &ExecutionContext<'_>,
    info: &ResolveInfo<'_>,
    ty: Type<'_>,
    path: &ResponsePath,
    value: &FieldValue,
    serialize: impl FnOnce(&ConstValue) -> Result<ConstValue, String>,
) -> Result<ResponseValue, Bubble> {
    let result = match to_const_value(value) {
        Some(value) => serialize(&value),
        None => Err(format!(
            "Expected a value of leaf type \"{}\" but got: {}.",
            ty.name(),
            describe(value)
        )),
    };

    result.map(ResponseValue::Scalar).map_err(|message| {
        ctx.push_error(completion_error(info, path, message));
        Bubble
    })
}

async fn complete_object_value<'a>(
    ctx: &'a ExecutionContext<'a>,
    info: &'a ResolveInfo<'a>,
    object: ObjectDefinition<'a>,
    path: &ResponsePath,
    value: FieldValue,
) -> Result<ResponseValue, Bubble> {
    if let Some(is_type_of) = object.is_type_of() {
        if !is_type_of(&value, ctx.context_value, info) {
            let message = format!("Expected value of type \"{}\" but got: {}.", object.name(), describe(&value));
            ctx.push_error(completion_error(info, path, message));
            return Err(Bubble);
        }
    }

    let fields = collect_fields(
        ctx,
        object,
        info.field_nodes.iter().map(|field| &field.node.selection_set.node),
    );
    execute_fields(ctx, object, &value, fields, path)
        .await
        .map(ResponseValue::Object)
}

/// Finds the concrete object type of a value returned for an interface or a union.
fn resolve_abstract_type<'a>(
    ctx: &ExecutionContext<'a>,
    info: &ResolveInfo<'_>,
    abstract_type: Definition<'a>,
    path: &ResponsePath,
    value: &FieldValue,
) -> Result<ObjectDefinition<'a>, Bubble> {
    let schema = ctx.schema;
    let abstract_name = abstract_type.name();
    let (type_resolver, possible_types) = match abstract_type {
        Definition::Interface(interface) => (interface.resolve_type(), interface.possible_types().collect::<Vec<_>>()),
        Definition::Union(union) => (union.resolve_type(), union.possible_types().collect()),
        _ => (None, vec![]),
    };

    let type_name = type_resolver
        .and_then(|resolve_type| resolve_type(value, ctx.context_value, info))
        .map(Cow::Owned)
        .or_else(|| value.type_name().map(Cow::Borrowed));

    let resolved = match type_name {
        Some(name) => match schema.definition_by_name(&name) {
            Some(Definition::Object(object)) => Ok(object),
            Some(_) => Err(format!(
                "Abstract type \"{abstract_name}\" was resolved to a non-object type \"{name}\"."
            )),
            None => Err(format!(
                "Abstract type \"{abstract_name}\" was resolved to a type \"{name}\" that does not exist inside the schema."
            )),
        },
        None => possible_types
            .into_iter()
            .find(|object| {
                object
                    .is_type_of()
                    .is_some_and(|is_type_of| is_type_of(value, ctx.context_value, info))
            })
            .ok_or_else(|| {
                format!(
                    "Abstract type \"{abstract_name}\" must resolve to an Object type at runtime for field \"{}.{}\". Either the \"{abstract_name}\" type should provide a \"resolveType\" function or each possible type should provide an \"isTypeOf\" function.",
                    info.parent_type.name(),
                    info.field_name
                )
            }),
    };

    let resolved = resolved.and_then(|object| {
        if schema.is_possible_type(abstract_type, object) {
            Ok(object)
        } else {
            Err(format!(
                "Runtime Object type \"{}\" is not a possible type for \"{abstract_name}\".",
                object.name()
            ))
        }
    });

    resolved.map_err(|message| {
        ctx.push_error(completion_error(info, path, message));
        Bubble
    })
}

fn completion_error(info: &ResolveInfo<'_>, path: &ResponsePath, message: String) -> GraphqlError {
    GraphqlError::new(message, ErrorCode::CompletionError)
        .with_locations(field_locations(info))
        .with_path(path)
}

fn without_type(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::WithType { value, .. } => without_type(*value),
        value => value,
    }
}

/// Plain value, `None` if it contains application objects.
fn to_const_value(value: &FieldValue) -> Option<ConstValue> {
    match value.inner() {
        FieldValue::Null => Some(ConstValue::Null),
        FieldValue::Value(value) => Some(value.clone()),
        FieldValue::List(items) => items.iter().map(to_const_value).collect::<Option<_>>().map(ConstValue::List),
        FieldValue::Object(_) | FieldValue::WithType { .. } => None,
    }
}

fn describe(value: &FieldValue) -> String {
    match to_const_value(value) {
        Some(value) => inspect(&value).to_string(),
        None => match value.type_name() {
            Some(name) => format!("[object {name}]"),
            None => "[object]".to_string(),
        },
    }
}
