use std::sync::OnceLock;

use http::{HeaderMap, HeaderValue};
use okapi_bridge::{OkapiContext, TENANT_HEADER};
use tokio::runtime::Runtime;
use url::Url;

#[ctor::ctor]
fn setup_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::builder()
        .parse(std::env::var("RUST_LOG").unwrap_or("okapi_bridge=debug".to_string()))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}

/// Shared runtime so tests can `block_on` without each spinning up their
/// own executor.
pub fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap()
    })
}

/// A connection context pointed at a mock server.
pub fn okapi_context(base_url: &str) -> OkapiContext {
    let mut headers = HeaderMap::new();
    headers.insert(TENANT_HEADER, HeaderValue::from_static("diku"));

    OkapiContext::new(Url::parse(base_url).unwrap(), headers).unwrap()
}
