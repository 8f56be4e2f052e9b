//! Operation execution.
//!
//! Fields are resolved then completed against their declared type. Errors are recorded into the
//! [`ExecutionContext`] as soon as they are detected, and a null reaching a non-null position is
//! signaled with [`Bubble`] up to the nearest nullable position, which becomes null.

mod collect;
mod complete;
mod context;
mod executor;
mod field;

use async_graphql_parser::types::OperationType;
use engine_error::ResponsePath;
use engine_schema::ObjectDefinition;

pub(crate) use collect::*;
pub(crate) use context::*;
pub(crate) use executor::*;

use crate::{operation::SelectedOperation, response::ResponseObject};

/// A null must propagate to the parent position. The error that caused it has already been
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bubble;

/// Executes the root selection set. Mutation root fields run one after the other, everything
/// else runs concurrently. `None` when a null propagated up to the root.
pub(crate) async fn execute_operation<'a>(
    ctx: &'a ExecutionContext<'a>,
    operation: SelectedOperation<'a>,
    root: ObjectDefinition<'a>,
) -> Option<ResponseObject> {
    let fields = collect_fields(ctx, root, [&operation.definition.node.selection_set.node]);
    let path = ResponsePath::root();
    let root_value = ctx.root_value;

    let result = match operation.ty {
        OperationType::Mutation => execute_fields_serially(ctx, root, root_value, fields, &path).await,
        OperationType::Query | OperationType::Subscription => {
            execute_fields(ctx, root, root_value, fields, &path).await
        }
    };
    result.ok()
}
