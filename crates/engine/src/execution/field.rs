use std::{any::Any, panic::AssertUnwindSafe};

use async_graphql_parser::{types::Field, Positioned};
use async_graphql_value::ConstValue;
use engine_error::{ErrorCode, GraphqlError, Location, ResponsePath};
use engine_schema::{
    FieldDefinition, FieldError, FieldFuture, FieldValue, ObjectDefinition, ResolveInfo, Resolver, ResolverContext,
};
use futures_util::{future::BoxFuture, FutureExt};

use super::{complete::complete_value, Bubble, ExecutionContext};
use crate::{coercion::coerce_argument_values, response::ResponseValue};

/// Prepares the execution of a field. Returns `None` for fields the object does not define,
/// which are left out of the response.
pub(super) fn execute_field<'a>(
    ctx: &'a ExecutionContext<'a>,
    object: ObjectDefinition<'a>,
    parent_value: &'a FieldValue,
    response_key: &'a str,
    field_nodes: Vec<&'a Positioned<Field>>,
    parent_path: &ResponsePath,
) -> Option<BoxFuture<'a, Result<ResponseValue, Bubble>>> {
    let field_node = *field_nodes.first()?;
    let field_name = field_node.node.name.node.as_str();

    if field_name == "__typename" {
        let typename = ResponseValue::Scalar(ConstValue::String(object.name().to_string()));
        return Some(futures_util::future::ready(Ok(typename)).boxed());
    }

    let Some(definition) = object.find_field_by_name(field_name) else {
        tracing::trace!("Skipping unknown field {}.{field_name}", object.name());
        return None;
    };

    let path = parent_path.child_with_type(response_key, object.name());
    let future = async move {
        let info = ResolveInfo {
            field_name: definition.name(),
            field_nodes: &field_nodes,
            return_type: definition.ty(),
            parent_type: object,
            path,
            variable_values: ctx.variables,
            root_value: ctx.root_value,
            operation: ctx.operation,
            fragments: &ctx.document.fragments,
            schema: ctx.schema,
        };
        resolve_field(ctx, definition, field_node, parent_value, &info).await
    };
    Some(future.boxed())
}

async fn resolve_field<'a>(
    ctx: &'a ExecutionContext<'a>,
    definition: FieldDefinition<'a>,
    field_node: &'a Positioned<Field>,
    parent_value: &'a FieldValue,
    info: &'a ResolveInfo<'a>,
) -> Result<ResponseValue, Bubble> {
    tracing::trace!("Resolving {}.{} at '{}'", info.parent_type.name(), info.field_name, info.path);

    let args = match coerce_argument_values(definition, field_node, ctx.variables) {
        Ok(args) => args,
        Err(message) => return field_error(ctx, info, GraphqlError::new(message, ErrorCode::ArgumentError)),
    };

    let resolver = match definition.resolver() {
        Some(resolver) => resolver.as_ref(),
        None => ctx.default_resolver,
    };
    let resolver_ctx = ResolverContext {
        parent_value,
        args: &args,
        context: ctx.context_value,
        info,
    };

    match invoke_resolver(resolver, resolver_ctx).await {
        Ok(value) => complete_value(ctx, info, info.return_type, info.path.clone(), value).await,
        Err(ResolverFailure::Error(error)) => {
            let mut graphql_error =
                GraphqlError::new(error.message, ErrorCode::ResolverError).with_extensions(error.extensions);
            if let Some(source) = error.source {
                graphql_error = graphql_error.with_source(source);
            }
            field_error(ctx, info, graphql_error)
        }
        Err(ResolverFailure::Panic(message)) => {
            tracing::warn!(
                "Resolver of {}.{} panicked at '{}': {message}",
                info.parent_type.name(),
                info.field_name,
                info.path
            );
            field_error(ctx, info, GraphqlError::new(message, ErrorCode::InternalServerError))
        }
    }
}

enum ResolverFailure {
    Error(FieldError),
    Panic(String),
}

/// Runs the resolver, turning panics into failures, whether they happen when the resolver is
/// called or while its future is polled.
async fn invoke_resolver<'r>(resolver: &'r dyn Resolver, ctx: ResolverContext<'r>) -> Result<FieldValue, ResolverFailure> {
    let future = match std::panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve(ctx))) {
        Ok(FieldFuture::Ready(result)) => return result.map_err(ResolverFailure::Error),
        Ok(FieldFuture::Pending(future)) => future,
        Err(payload) => return Err(ResolverFailure::Panic(panic_message(payload.as_ref()))),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result.map_err(ResolverFailure::Error),
        Err(payload) => Err(ResolverFailure::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Resolver panicked".to_string()
    }
}

/// Records an error raised for the field itself. The field becomes null, which propagates
/// further if the field is non-null.
fn field_error(ctx: &ExecutionContext<'_>, info: &ResolveInfo<'_>, error: GraphqlError) -> Result<ResponseValue, Bubble> {
    ctx.push_error(error.with_locations(field_locations(info)).with_path(&info.path));
    if info.return_type.is_required() {
        Err(Bubble)
    } else {
        Ok(ResponseValue::Null)
    }
}

pub(super) fn field_locations<'a>(info: &'a ResolveInfo<'_>) -> impl Iterator<Item = Location> + 'a {
    info.field_nodes.iter().map(|field| Location::from(field.pos))
}
