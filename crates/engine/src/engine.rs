use std::sync::Arc;

use async_graphql_parser::types::OperationType;
use engine_schema::{default_field_resolver, FieldFuture, Resolver, ResolverContext, Schema};
use tracing::{field::Empty, Instrument, Span};

use crate::{
    coercion::coerce_variable_values,
    config::Config,
    execution::{execute_operation, ExecutionContext},
    operation::SelectedOperation,
    request::Request,
    response::Response,
};

/// Executes operations against a schema. Cheap to share across requests.
pub struct Engine {
    schema: Arc<Schema>,
    config: Config,
    default_resolver: Arc<dyn Resolver>,
}

pub struct EngineBuilder {
    schema: Arc<Schema>,
    config: Config,
    default_resolver: Option<Arc<dyn Resolver>>,
}

impl EngineBuilder {
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Resolver of the fields without their own. Defaults to [`default_field_resolver`].
    #[must_use]
    pub fn default_resolver<F>(mut self, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.default_resolver = Some(Arc::new(resolver));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            schema: self.schema,
            config: self.config,
            default_resolver: self
                .default_resolver
                .unwrap_or_else(|| Arc::new(default_field_resolver) as Arc<dyn Resolver>),
        }
    }
}

impl Engine {
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self::builder(schema).build()
    }

    pub fn builder(schema: impl Into<Arc<Schema>>) -> EngineBuilder {
        EngineBuilder {
            schema: schema.into(),
            config: Config::default(),
            default_resolver: None,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn execute(&self, request: Request) -> Response {
        let span = tracing::info_span!(
            "graphql-execute",
            graphql.operation.name = Empty,
            graphql.operation.type = Empty,
            graphql.response.errors = Empty,
        );
        self.execute_request(request).instrument(span).await
    }

    async fn execute_request(&self, request: Request) -> Response {
        let Request {
            document,
            operation_name,
            variables,
            root_value,
            context,
        } = request;
        let errors_config = &self.config.errors;
        let span = Span::current();

        let operation = match SelectedOperation::select(&document, operation_name.as_deref()) {
            Ok(operation) => operation,
            Err(error) => {
                tracing::debug!("Could not select the operation: {error}");
                span.record("graphql.response.errors", 1);
                return Response::request_error([error], errors_config);
            }
        };

        if let Some(name) = operation.name {
            span.record("graphql.operation.name", name);
        }
        span.record(
            "graphql.operation.type",
            match operation.ty {
                OperationType::Query => "query",
                OperationType::Mutation => "mutation",
                OperationType::Subscription => "subscription",
            },
        );

        let variables =
            match coerce_variable_values(&self.schema, &operation.definition.node.variable_definitions, variables) {
                Ok(variables) => variables,
                Err(errors) => {
                    tracing::debug!("Invalid variables: {}", errors.len());
                    span.record("graphql.response.errors", errors.len());
                    return Response::request_error(errors, errors_config);
                }
            };

        let root = match operation.root_object(&self.schema) {
            Ok(root) => root,
            Err(error) => {
                tracing::debug!("Could not execute the operation: {error}");
                span.record("graphql.response.errors", 1);
                return Response::executed(None, vec![error], errors_config);
            }
        };

        let ctx = ExecutionContext::new(
            &self.schema,
            &document,
            operation.definition,
            &variables,
            &root_value,
            &context,
            self.default_resolver.as_ref(),
        );
        let data = execute_operation(&ctx, operation, root).await;
        let errors = ctx.into_errors();

        span.record("graphql.response.errors", errors.len());
        if data.is_none() {
            tracing::debug!("Null propagated up to the root, data is null");
        }
        Response::executed(data, errors, errors_config)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
