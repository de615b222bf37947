// Configuration for the Consul client

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME, ENV_DATACENTER, ENV_HTTP_ADDR, ENV_HTTP_SSL,
    ENV_HTTP_TOKEN,
};

/// Configuration for the Consul HTTP client
#[derive(Clone, Debug)]
pub struct ConsulClientConfig {
    /// URL scheme, "http" or "https"
    pub scheme: String,
    /// Agent host name or address
    pub host: String,
    /// Agent HTTP port
    pub port: u16,
    /// Default ACL token sent with every request that has no per-call token
    pub token: Option<String>,
    /// Default datacenter for requests that do not name one
    pub datacenter: Option<String>,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds (default: 30000)
    pub read_timeout_ms: u64,
}

impl Default for ConsulClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            token: None,
            datacenter: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl ConsulClientConfig {
    /// Create a config for the given host and port
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    /// Create from the standard Consul environment variables.
    ///
    /// `CONSUL_HTTP_ADDR` accepts either `host:port` or a full
    /// `scheme://host:port` address. Unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var(ENV_HTTP_ADDR) {
            config.apply_addr(&addr);
        }
        if let Ok(token) = std::env::var(ENV_HTTP_TOKEN)
            && !token.is_empty()
        {
            config.token = Some(token);
        }
        if std::env::var(ENV_HTTP_SSL)
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false)
        {
            config.scheme = "https".to_string();
        }
        if let Ok(dc) = std::env::var(ENV_DATACENTER)
            && !dc.is_empty()
        {
            config.datacenter = Some(dc);
        }

        config
    }

    /// Set the URL scheme
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Set the default ACL token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Set the default datacenter
    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = Some(datacenter.to_string());
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }

    /// Base URL of the agent, e.g. `http://127.0.0.1:8500`
    /// IPv6 hosts are bracketed: `http://[::1]:8500`
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    fn apply_addr(&mut self, addr: &str) {
        let rest = match addr.split_once("://") {
            Some((scheme, rest)) => {
                self.scheme = scheme.to_string();
                rest
            }
            None => addr,
        };
        let rest = rest.trim_end_matches('/');

        // `[v6]:port` or `[v6]`
        if let Some(bracketed) = rest.strip_prefix('[')
            && let Some((host, tail)) = bracketed.split_once(']')
        {
            self.host = host.to_string();
            if let Some(Ok(port)) = tail.strip_prefix(':').map(str::parse::<u16>) {
                self.port = port;
            }
            return;
        }

        // A bare IPv6 address has no port
        if rest.matches(':').count() > 1 {
            self.host = rest.to_string();
            return;
        }

        match rest.rsplit_once(':') {
            Some((host, port)) => {
                self.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.port = port;
                }
            }
            None if !rest.is_empty() => self.host = rest.to_string(),
            None => {}
        }
    }
}
