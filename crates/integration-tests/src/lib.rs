#![allow(unused_crate_dependencies, clippy::panic)]

pub mod numbers;
pub mod pets;

use std::sync::OnceLock;

use engine::{Engine, Request};
use tokio::runtime::Runtime;

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("graphql_executor=debug".to_string()))
        .unwrap();
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .without_time()
        .init();
}

pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    })
}

/// Executes the request and returns the response as it would be sent over the wire.
pub async fn execute(engine: &Engine, request: Request) -> serde_json::Value {
    engine.execute(request).await.into_json().unwrap()
}

pub async fn post(engine: &Engine, query: &str) -> serde_json::Value {
    execute(engine, Request::parse(query).unwrap()).await
}
