use std::{any::Any, sync::Arc};

use async_graphql_parser::types::ExecutableDocument;
use async_graphql_value::Variables;
use engine_schema::{ContextValue, FieldValue};

/// Operation to execute along with everything the resolvers may need.
///
/// The document is expected to be parsed and validated already.
pub struct Request {
    pub(crate) document: Arc<ExecutableDocument>,
    pub(crate) operation_name: Option<String>,
    pub(crate) variables: Variables,
    pub(crate) root_value: FieldValue,
    pub(crate) context: ContextValue,
}

impl Request {
    pub fn new(document: impl Into<Arc<ExecutableDocument>>) -> Self {
        Request {
            document: document.into(),
            operation_name: None,
            variables: Variables::default(),
            root_value: FieldValue::Null,
            context: ContextValue::default(),
        }
    }

    /// Parses the query, mostly useful in tests as no validation is applied.
    pub fn parse(query: &str) -> async_graphql_parser::Result<Self> {
        async_graphql_parser::parse_query(query).map(Self::new)
    }

    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Raw variable values, coerced against the operation's variable definitions before
    /// execution.
    #[must_use]
    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Parent value of the root fields.
    #[must_use]
    pub fn root_value(mut self, root_value: impl Into<FieldValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    #[must_use]
    pub fn context<T: Any + Send + Sync>(mut self, data: T) -> Self {
        self.context = ContextValue::new(data);
        self
    }

    #[must_use]
    pub fn context_value(mut self, context: ContextValue) -> Self {
        self.context = context;
        self
    }

    pub fn document(&self) -> &ExecutableDocument {
        &self.document
    }
}

impl From<ExecutableDocument> for Request {
    fn from(document: ExecutableDocument) -> Self {
        Request::new(document)
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("operation_name", &self.operation_name)
            .field("variables", &self.variables)
            .field("root_value", &self.root_value)
            .finish_non_exhaustive()
    }
}
