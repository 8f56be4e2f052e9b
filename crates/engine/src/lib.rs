//! GraphQL operation executor.
//!
//! Given a [`Schema`](engine_schema::Schema) and a parsed, validated document, the [`Engine`]
//! selects the operation, coerces variables, resolves and completes every selected field and
//! assembles the [`Response`].

#![deny(clippy::future_not_send)]

mod coercion;
mod config;
mod engine;
mod execution;
mod operation;
mod request;
mod response;

pub use async_graphql_value::{ConstValue, Name, Variables};
pub use config::{Config, ConfigError, ErrorOrder, ErrorsConfig};
pub use engine::{Engine, EngineBuilder};
pub use engine_error::{ErrorCode, ErrorPath, ErrorPathSegment, GraphqlError, Location, ResponsePath, ResponsePathSegment};
pub use engine_schema as schema;
pub use request::Request;
pub use response::{Response, ResponseObject, ResponseValue};
