//! Shared helpers for the mock-server tests

#![allow(dead_code)]

use consul_client::{Consul, ConsulClientConfig};
use wiremock::MockServer;

pub const CONSUL_INDEX: &str = "X-Consul-Index";
pub const CONSUL_TOKEN: &str = "X-Consul-Token";

/// Start a mock agent and a client pointed at it
pub async fn setup() -> (MockServer, Consul) {
    setup_with(|config| config).await
}

/// Same as [`setup`], with a hook to adjust the client config
pub async fn setup_with(
    adjust: impl FnOnce(ConsulClientConfig) -> ConsulClientConfig,
) -> (MockServer, Consul) {
    init_tracing();
    let server = MockServer::start().await;
    let addr = server.address();
    let config = adjust(ConsulClientConfig::new(&addr.ip().to_string(), addr.port()));
    let consul = Consul::new(config).expect("client should build");
    (server, consul)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
