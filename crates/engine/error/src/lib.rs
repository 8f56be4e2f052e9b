mod code;
mod path;

pub use code::*;
pub use path::*;
use std::{borrow::Cow, sync::Arc};

pub type GraphqlResult<T> = Result<T, GraphqlError>;

/// Line and column, both starting at 1, of a node in the executable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl From<async_graphql_parser::Pos> for Location {
    fn from(pos: async_graphql_parser::Pos) -> Self {
        Location {
            line: pos.line,
            column: pos.column,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphqlError {
    pub message: Cow<'static, str>,
    pub code: ErrorCode,
    pub locations: Vec<Location>,
    pub path: Option<ErrorPath>,
    // Serialized as a map, but kept as a Vec for efficiency.
    pub extensions: Vec<(Cow<'static, str>, serde_json::Value)>,
    /// Error raised by the resolver, if any. Never serialized.
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl GraphqlError {
    pub fn new(message: impl Into<Cow<'static, str>>, code: ErrorCode) -> Self {
        GraphqlError {
            message: message.into(),
            code,
            locations: Vec::new(),
            path: None,
            extensions: Vec::new(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<Location>) -> Self {
        self.locations.push(location.into());
        self
    }

    #[must_use]
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.locations.extend(locations);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<ErrorPath>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_extension(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<serde_json::Value>) -> Self {
        let key = key.into();
        self.extensions.push((key, value.into()));
        self
    }

    #[must_use]
    pub fn with_extensions(
        mut self,
        extensions: impl IntoIterator<Item = (impl Into<Cow<'static, str>>, impl Into<serde_json::Value>)>,
    ) -> Self {
        for (key, value) in extensions {
            self.extensions.push((key.into(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn std::error::Error + Send + Sync>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn is_request_error(&self) -> bool {
        self.code.is_request_error()
    }

    // ------------- //
    // Common errors //
    // ------------- //

    pub fn internal_server_error() -> Self {
        GraphqlError::new("Internal server error", ErrorCode::InternalServerError)
    }

    pub fn missing_operation() -> Self {
        GraphqlError::new("Must provide an operation.", ErrorCode::OperationResolutionError)
    }

    pub fn ambiguous_operation() -> Self {
        GraphqlError::new(
            "Must provide operation name if query contains multiple operations.",
            ErrorCode::OperationResolutionError,
        )
    }

    pub fn unknown_operation(name: &str) -> Self {
        GraphqlError::new(
            format!("Unknown operation named \"{name}\"."),
            ErrorCode::OperationResolutionError,
        )
    }
}

impl std::fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message.fmt(f)
    }
}
