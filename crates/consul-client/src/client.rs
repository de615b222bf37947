// Consul - entry point handing out one facade per subsystem

use std::sync::Arc;

use crate::{
    api::{Acl, Agent, Catalog, Health, Kv, Status},
    config::ConsulClientConfig,
    error::Result,
    http::ConsulHttpClient,
};

/// Client for one Consul agent.
///
/// Cloning is cheap; clones share the underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct Consul {
    http: Arc<ConsulHttpClient>,
}

impl Consul {
    /// Create a new client with the given configuration
    pub fn new(config: ConsulClientConfig) -> Result<Self> {
        let http = ConsulHttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Client for `http://<host>:<port>` with default settings
    pub fn from_addr(host: &str, port: u16) -> Result<Self> {
        Self::new(ConsulClientConfig::new(host, port))
    }

    /// Client configured from `CONSUL_HTTP_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ConsulClientConfig::from_env())
    }

    pub fn config(&self) -> &ConsulClientConfig {
        self.http.config()
    }

    /// Raw transport, for endpoints without a facade
    pub fn http(&self) -> &ConsulHttpClient {
        &self.http
    }

    pub fn kv(&self) -> Kv<'_> {
        Kv::new(&self.http)
    }

    pub fn agent(&self) -> Agent<'_> {
        Agent::new(&self.http)
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.http)
    }

    pub fn health(&self) -> Health<'_> {
        Health::new(&self.http)
    }

    pub fn acl(&self) -> Acl<'_> {
        Acl::new(&self.http)
    }

    pub fn status(&self) -> Status<'_> {
        Status::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consul_from_addr() {
        let consul = Consul::from_addr("10.1.2.3", 8600).unwrap();
        assert_eq!(consul.config().base_url(), "http://10.1.2.3:8600");
        assert!(consul.config().token.is_none());
    }

    #[test]
    fn test_consul_from_ipv6_addr() {
        let consul = Consul::from_addr("::1", 8500).unwrap();
        assert_eq!(consul.config().base_url(), "http://[::1]:8500");
    }

    #[test]
    fn test_consul_clone_shares_transport() {
        let consul = Consul::new(ConsulClientConfig::default().with_token("t")).unwrap();
        let other = consul.clone();
        assert!(std::ptr::eq(consul.http(), other.http()));
        assert_eq!(other.config().token.as_deref(), Some("t"));
    }
}
