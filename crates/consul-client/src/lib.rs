//! consul-client - async client for the Consul agent HTTP API
//!
//! This crate provides:
//! - An HTTP transport that builds `/v1/...` requests, attaches ACL tokens and
//!   classifies error statuses
//! - Facades for KV, agent, catalog, health, ACL and status endpoints
//! - Blocking-query support through `index`/`wait` and change streams
//!
//! ```no_run
//! use consul_client::{Consul, KvPutOptions, QueryOptions};
//!
//! # async fn demo() -> consul_client::Result<()> {
//! let consul = Consul::from_addr("127.0.0.1", 8500)?;
//! consul.kv().put("foo", "bar", &KvPutOptions::new()).await?;
//! let entry = consul.kv().get("foo", &QueryOptions::new()).await?;
//! assert_eq!(entry.value.unwrap().value_str(), Some("bar"));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod model;
pub mod watch;

pub use client::Consul;
pub use config::ConsulClientConfig;
pub use error::{ConsulError, Result};
pub use http::{ConsulHttpClient, ConsulRequest, ConsulResponse};
pub use model::*;
