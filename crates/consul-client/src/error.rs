// Error types for the Consul client

/// Errors that can occur during Consul client operations
#[derive(Debug, thiserror::Error)]
pub enum ConsulError {
    /// Network, DNS or timeout failure, passed through unchanged
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("Consul request failed with status {status}: {message}")]
    Consul { status: u16, message: String },

    #[error("ACL support disabled: {0}")]
    AclDisabled(String),

    #[error("ACL permission denied: {0}")]
    AclPermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON body could not be (de)serialized, including malformed base64 KV values
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Write endpoint answered something other than `true`/`false`
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl ConsulError {
    /// True when the failure happened below HTTP (connect, DNS, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, ConsulError::Http(_))
    }

    /// True for either ACL condition.
    pub fn is_acl(&self) -> bool {
        matches!(
            self,
            ConsulError::AclDisabled(_) | ConsulError::AclPermissionDenied(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConsulError>;
