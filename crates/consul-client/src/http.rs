// HTTP transport for the Consul agent API
//
// Builds request URLs, attaches the ACL token, performs a single HTTP
// exchange and classifies error statuses. Nothing here retries; transport
// failures reach the caller as `ConsulError::Http`.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    config::ConsulClientConfig,
    constants::{
        ACL_DISABLED_MESSAGE, DEFAULT_BLOCKING_WAIT, HEADER_CONSUL_INDEX, HEADER_CONSUL_TOKEN,
    },
    error::{ConsulError, Result},
    model::{QueryOptions, format_duration},
};

/// A single request against the agent
#[derive(Clone, Debug)]
pub struct ConsulRequest {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
    token: Option<String>,
    datacenter: Option<String>,
    body: Option<Vec<u8>>,
    json_body: bool,
    blocking_wait: Option<Duration>,
}

impl ConsulRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            token: None,
            datacenter: None,
            body: None,
            json_body: false,
            blocking_wait: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a `key=value` query parameter
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    pub fn param_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Add a presence-only flag such as `recurse` or `passing`
    pub fn flag(mut self, key: &str, enabled: bool) -> Self {
        if enabled {
            self.params.push((key.to_string(), String::new()));
        }
        self
    }

    /// Per-call ACL token; falls back to the client default when `None`
    pub fn token(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            self.token = Some(token.to_string());
        }
        self
    }

    /// Per-call datacenter; falls back to the client default when `None`
    pub fn datacenter(mut self, datacenter: Option<&str>) -> Self {
        if let Some(dc) = datacenter {
            self.datacenter = Some(dc.to_string());
        }
        self
    }

    /// Raw request body
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self.json_body = false;
        self
    }

    /// JSON request body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        self.json_body = true;
        Ok(self)
    }

    /// Apply the shared read options: dc, token, consistency and blocking
    /// index/wait.
    pub fn query_options(self, opts: &QueryOptions) -> Self {
        let mut req = self
            .datacenter(opts.datacenter.as_deref())
            .token(opts.token.as_deref());

        if let Some(flag) = opts.consistency.as_flag() {
            req = req.flag(flag, true);
        }

        if let Some(index) = opts.index {
            // Consul reads a zero wait as its default
            let wait = opts.wait.filter(|w| !w.is_zero());
            req = req.param("index", index);
            if let Some(wait) = wait {
                req = req.param("wait", format_duration(wait));
            }
            req.blocking_wait = Some(wait.unwrap_or(DEFAULT_BLOCKING_WAIT));
        }

        req
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Status, consistency index and raw body of a completed exchange
#[derive(Clone, Debug)]
pub struct ConsulResponse {
    pub status: StatusCode,
    /// Value of `X-Consul-Index`, 0 when the endpoint sends none
    pub index: u64,
    pub body: Vec<u8>,
}

impl ConsulResponse {
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_string()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the `true`/`false` reply of write endpoints. An empty body on
    /// success counts as applied.
    pub fn bool(&self) -> Result<bool> {
        match self.text().as_str() {
            "true" | "" => Ok(true),
            "false" => Ok(false),
            other => Err(ConsulError::Decode(format!(
                "expected boolean reply, got {:?}",
                other
            ))),
        }
    }

    /// Turn a 404 into [`ConsulError::NotFound`] for endpoints with no
    /// "absent" result.
    pub fn found(self) -> Result<Self> {
        if self.is_not_found() {
            let message = self.text();
            return Err(ConsulError::NotFound(if message.is_empty() {
                "resource not found".to_string()
            } else {
                message
            }));
        }
        Ok(self)
    }
}

/// Map an error status to the error taxonomy. Success and 404 pass through.
pub(crate) fn classify_status(status: StatusCode, body: &[u8]) -> Option<ConsulError> {
    if status.is_success() || status == StatusCode::NOT_FOUND {
        return None;
    }

    let mut message = String::from_utf8_lossy(body).trim().to_string();
    if message.is_empty() {
        message = status.canonical_reason().unwrap_or_default().to_string();
    }

    if status == StatusCode::UNAUTHORIZED || message.contains(ACL_DISABLED_MESSAGE) {
        return Some(ConsulError::AclDisabled(message));
    }
    if status == StatusCode::FORBIDDEN {
        return Some(ConsulError::AclPermissionDenied(message));
    }

    Some(ConsulError::Consul {
        status: status.as_u16(),
        message,
    })
}

/// HTTP client bound to one Consul agent
#[derive(Debug)]
pub struct ConsulHttpClient {
    client: Client,
    config: ConsulClientConfig,
    base_url: Url,
}

impl ConsulHttpClient {
    /// Create a new HTTP client
    pub fn new(config: ConsulClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        let base_url = Url::parse(&config.base_url())?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn config(&self) -> &ConsulClientConfig {
        &self.config
    }

    /// Build the full URL for a path and query parameters.
    ///
    /// Each path segment is percent-encoded on its own so KV keys keep their
    /// `/` hierarchy.
    pub fn uri(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConsulError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .clear()
            .extend(path.trim_start_matches('/').split('/'));

        if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Client-side ceiling for a request: blocking queries get the server
    /// wait plus Consul's wait/16 jitter on top of the read timeout.
    fn request_timeout(&self, blocking_wait: Option<Duration>) -> Duration {
        let read = Duration::from_millis(self.config.read_timeout_ms);
        match blocking_wait {
            Some(wait) => read + wait + wait / 16,
            None => read,
        }
    }

    /// Perform one HTTP exchange.
    ///
    /// Returns the response for 2xx and 404; every other status becomes a
    /// typed error.
    pub async fn execute(&self, request: ConsulRequest) -> Result<ConsulResponse> {
        let ConsulRequest {
            method,
            path,
            mut params,
            token,
            datacenter,
            body,
            json_body,
            blocking_wait,
        } = request;

        if let Some(dc) = datacenter.or_else(|| self.config.datacenter.clone()) {
            params.push(("dc".to_string(), dc));
        }

        let url = self.uri(&path, &params)?;
        debug!("Sending {} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .timeout(self.request_timeout(blocking_wait));

        if let Some(token) = token.as_deref().or(self.config.token.as_deref()) {
            builder = builder.header(HEADER_CONSUL_TOKEN, token);
        }
        if let Some(body) = body {
            if json_body {
                builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
            }
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request {} {} failed: {}", method, url, e);
                return Err(e.into());
            }
        };

        let status = response.status();
        let index = response
            .headers()
            .get(HEADER_CONSUL_INDEX)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let body = response.bytes().await?.to_vec();

        if let Some(err) = classify_status(status, &body) {
            if status.is_server_error() {
                error!("Request {} {} failed with status {}: {}", method, url, status, err);
            } else {
                debug!("Request {} {} rejected with status {}: {}", method, url, status, err);
            }
            return Err(err);
        }

        Ok(ConsulResponse {
            status,
            index,
            body,
        })
    }
}
