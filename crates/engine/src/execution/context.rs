use async_graphql_parser::{
    types::{ExecutableDocument, OperationDefinition},
    Positioned,
};
use async_graphql_value::Variables;
use crossbeam_queue::SegQueue;
use engine_error::GraphqlError;
use engine_schema::{ContextValue, FieldValue, Resolver, Schema};

/// State shared by every field of an operation execution.
pub(crate) struct ExecutionContext<'a> {
    pub schema: &'a Schema,
    pub document: &'a ExecutableDocument,
    pub operation: &'a Positioned<OperationDefinition>,
    /// Coerced variable values.
    pub variables: &'a Variables,
    pub root_value: &'a FieldValue,
    pub context_value: &'a ContextValue,
    pub default_resolver: &'a dyn Resolver,
    // Appended from concurrently running fields, drained once execution is over.
    errors: SegQueue<GraphqlError>,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        schema: &'a Schema,
        document: &'a ExecutableDocument,
        operation: &'a Positioned<OperationDefinition>,
        variables: &'a Variables,
        root_value: &'a FieldValue,
        context_value: &'a ContextValue,
        default_resolver: &'a dyn Resolver,
    ) -> Self {
        ExecutionContext {
            schema,
            document,
            operation,
            variables,
            root_value,
            context_value,
            default_resolver,
            errors: SegQueue::new(),
        }
    }

    pub fn push_error(&self, error: GraphqlError) {
        tracing::debug!(
            code = %error.code,
            path = ?error.path,
            "Field error: {}", error.message
        );
        self.errors.push(error);
    }

    pub fn into_errors(self) -> Vec<GraphqlError> {
        let mut errors = Vec::with_capacity(self.errors.len());
        while let Some(error) = self.errors.pop() {
            errors.push(error);
        }
        errors
    }
}
