use engine_error::ResponsePath;
use engine_schema::{FieldValue, ObjectDefinition};
use futures_util::{
    future::{join_all, BoxFuture},
    FutureExt,
};

use super::{field::execute_field, Bubble, ExecutionContext, GroupedFields};
use crate::response::ResponseObject;

/// Executes all fields concurrently. Every field runs to completion even if one of them
/// propagates a null, so that all errors are recorded. Response keys keep their collection order.
pub(crate) fn execute_fields<'a>(
    ctx: &'a ExecutionContext<'a>,
    object: ObjectDefinition<'a>,
    parent_value: &'a FieldValue,
    fields: GroupedFields<'a>,
    path: &ResponsePath,
) -> BoxFuture<'a, Result<ResponseObject, Bubble>> {
    tracing::trace!("Executing {} fields of {} at '{path}'", fields.len(), object.name());

    let futures = fields
        .into_iter()
        .filter_map(|(response_key, field_nodes)| {
            execute_field(ctx, object, parent_value, response_key, field_nodes, path)
                .map(|future| future.map(move |result| (response_key, result)))
        })
        .collect::<Vec<_>>();

    async move {
        let results = join_all(futures).await;
        let mut response_object = ResponseObject::with_capacity(results.len());
        let mut bubbled = false;
        for (response_key, result) in results {
            match result {
                Ok(value) => response_object.insert(response_key, value),
                Err(Bubble) => bubbled = true,
            }
        }
        if bubbled {
            Err(Bubble)
        } else {
            Ok(response_object)
        }
    }
    .boxed()
}

/// Executes fields one after the other, each one starting only once the previous one is fully
/// completed. Stops at the first field propagating a null, the remaining ones never run.
pub(crate) fn execute_fields_serially<'a>(
    ctx: &'a ExecutionContext<'a>,
    object: ObjectDefinition<'a>,
    parent_value: &'a FieldValue,
    fields: GroupedFields<'a>,
    path: &ResponsePath,
) -> BoxFuture<'a, Result<ResponseObject, Bubble>> {
    tracing::trace!("Executing {} fields of {} serially at '{path}'", fields.len(), object.name());
    let path = path.clone();

    async move {
        let mut response_object = ResponseObject::with_capacity(fields.len());
        for (response_key, field_nodes) in fields {
            let Some(future) = execute_field(ctx, object, parent_value, response_key, field_nodes, &path) else {
                continue;
            };
            let value = future.await?;
            response_object.insert(response_key, value);
        }
        Ok(response_object)
    }
    .boxed()
}
