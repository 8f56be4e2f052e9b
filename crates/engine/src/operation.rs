use async_graphql_parser::{
    types::{ExecutableDocument, OperationDefinition, OperationType},
    Positioned,
};
use engine_error::{ErrorCode, GraphqlError, GraphqlResult};
use engine_schema::{ObjectDefinition, Schema};

/// Operation selected for execution.
#[derive(Clone, Copy)]
pub(crate) struct SelectedOperation<'a> {
    pub name: Option<&'a str>,
    pub ty: OperationType,
    pub definition: &'a Positioned<OperationDefinition>,
}

impl<'a> SelectedOperation<'a> {
    pub fn select(document: &'a ExecutableDocument, operation_name: Option<&str>) -> GraphqlResult<Self> {
        let (name, definition) = find_operation(document, operation_name)?;
        Ok(SelectedOperation {
            name,
            ty: definition.node.ty,
            definition,
        })
    }

    /// Root object type of the operation. Failing here is an execution error, not a request
    /// error: the response still carries `data: null`.
    pub fn root_object(&self, schema: &'a Schema) -> GraphqlResult<ObjectDefinition<'a>> {
        let (root, kind) = match self.ty {
            OperationType::Query => (Some(schema.query_root()), "query"),
            OperationType::Mutation => (schema.mutation_root(), "mutation"),
            OperationType::Subscription => (schema.subscription_root(), "subscription"),
        };
        root.ok_or_else(|| {
            GraphqlError::new(
                format!("Schema is not configured to execute {kind} operation."),
                ErrorCode::OperationResolutionError,
            )
        })
    }
}

fn find_operation<'a>(
    document: &'a ExecutableDocument,
    operation_name: Option<&str>,
) -> GraphqlResult<(Option<&'a str>, &'a Positioned<OperationDefinition>)> {
    if let Some(expected) = operation_name {
        return document
            .operations
            .iter()
            .find(|(name, _)| name.map(|name| name.as_str()) == Some(expected))
            .map(|(name, operation)| (name.map(|name| name.as_str()), operation))
            .ok_or_else(|| GraphqlError::unknown_operation(expected));
    }

    let mut operations = document.operations.iter();
    match (operations.next(), operations.next()) {
        (Some((name, operation)), None) => Ok((name.map(|name| name.as_str()), operation)),
        (Some(_), Some(_)) => Err(GraphqlError::ambiguous_operation()),
        (None, _) => Err(GraphqlError::missing_operation()),
    }
}
