// Model types for Consul API requests and responses

pub mod acl;
pub mod agent;
pub mod catalog;
pub mod common;
pub mod health;
pub mod kv;

pub use acl::{AclToken, AclTokenRequest, AclTokenType};
pub use agent::{
    AgentCheck, AgentMember, AgentSelf, AgentService, AgentServiceCheck, CheckRegistration,
    ServiceRegistration,
};
pub use catalog::{CatalogNode, CatalogService, Node};
pub use common::{Consistency, Indexed, QueryOptions, format_duration};
pub use health::{HealthCheck, HealthServiceOptions, HealthStatus, ServiceEntry};
pub use kv::{KvDeleteOptions, KvPair, KvPutOptions};
