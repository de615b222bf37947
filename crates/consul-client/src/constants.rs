// Consul HTTP API constants

use std::time::Duration;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8500;

pub const ENV_HTTP_ADDR: &str = "CONSUL_HTTP_ADDR";
pub const ENV_HTTP_TOKEN: &str = "CONSUL_HTTP_TOKEN";
pub const ENV_HTTP_SSL: &str = "CONSUL_HTTP_SSL";
pub const ENV_DATACENTER: &str = "CONSUL_DATACENTER";

pub const HEADER_CONSUL_TOKEN: &str = "X-Consul-Token";
pub const HEADER_CONSUL_INDEX: &str = "X-Consul-Index";

/// Server-side wait applied by Consul when a blocking query names no `wait`
pub const DEFAULT_BLOCKING_WAIT: Duration = Duration::from_secs(300);

/// Marker Consul puts in error bodies when the ACL subsystem is off
pub const ACL_DISABLED_MESSAGE: &str = "ACL support disabled";

pub mod consul_api_path {
    // KV
    pub const KV: &str = "/v1/kv";

    // Agent
    pub const AGENT_SELF: &str = "/v1/agent/self";
    pub const AGENT_MEMBERS: &str = "/v1/agent/members";
    pub const AGENT_SERVICES: &str = "/v1/agent/services";
    pub const AGENT_CHECKS: &str = "/v1/agent/checks";
    pub const AGENT_SERVICE_REGISTER: &str = "/v1/agent/service/register";
    pub const AGENT_SERVICE_DEREGISTER: &str = "/v1/agent/service/deregister";
    pub const AGENT_CHECK_REGISTER: &str = "/v1/agent/check/register";
    pub const AGENT_CHECK_DEREGISTER: &str = "/v1/agent/check/deregister";
    pub const AGENT_CHECK_PASS: &str = "/v1/agent/check/pass";
    pub const AGENT_CHECK_WARN: &str = "/v1/agent/check/warn";
    pub const AGENT_CHECK_FAIL: &str = "/v1/agent/check/fail";

    // Catalog
    pub const CATALOG_DATACENTERS: &str = "/v1/catalog/datacenters";
    pub const CATALOG_NODES: &str = "/v1/catalog/nodes";
    pub const CATALOG_SERVICES: &str = "/v1/catalog/services";
    pub const CATALOG_SERVICE: &str = "/v1/catalog/service";
    pub const CATALOG_NODE: &str = "/v1/catalog/node";

    // Health
    pub const HEALTH_SERVICE: &str = "/v1/health/service";
    pub const HEALTH_CHECKS: &str = "/v1/health/checks";
    pub const HEALTH_NODE: &str = "/v1/health/node";
    pub const HEALTH_STATE: &str = "/v1/health/state";

    // ACL (legacy token API)
    pub const ACL_LIST: &str = "/v1/acl/list";
    pub const ACL_INFO: &str = "/v1/acl/info";
    pub const ACL_CREATE: &str = "/v1/acl/create";
    pub const ACL_UPDATE: &str = "/v1/acl/update";
    pub const ACL_CLONE: &str = "/v1/acl/clone";
    pub const ACL_DESTROY: &str = "/v1/acl/destroy";

    // Status
    pub const STATUS_LEADER: &str = "/v1/status/leader";
    pub const STATUS_PEERS: &str = "/v1/status/peers";
}
