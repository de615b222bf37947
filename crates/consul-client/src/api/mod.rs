// Endpoint facades, one per Consul subsystem

pub mod acl;
pub mod agent;
pub mod catalog;
pub mod health;
pub mod kv;
pub mod status;

pub use acl::Acl;
pub use agent::{Agent, CheckEndpoint, ServiceEndpoint};
pub use catalog::Catalog;
pub use health::Health;
pub use kv::Kv;
pub use status::Status;
