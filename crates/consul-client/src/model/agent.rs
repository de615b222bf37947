// Agent model types

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::common::go_duration;

/// Response of /v1/agent/self
#[derive(Clone, Debug, Deserialize)]
pub struct AgentSelf {
    /// Agent configuration; its shape depends on the agent version
    #[serde(rename = "Config")]
    pub config: serde_json::Map<String, serde_json::Value>,

    #[serde(rename = "Member")]
    pub member: AgentMember,
}

impl AgentSelf {
    /// Datacenter the agent belongs to, if reported
    pub fn datacenter(&self) -> Option<&str> {
        self.config.get("Datacenter").and_then(|v| v.as_str())
    }

    /// Node name of the agent, if reported
    pub fn node_name(&self) -> Option<&str> {
        self.config.get("NodeName").and_then(|v| v.as_str())
    }
}

/// Serf LAN member as seen by the agent
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AgentMember {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Addr", default)]
    pub addr: String,
    #[serde(rename = "Port", default)]
    pub port: u16,
    #[serde(rename = "Tags", default)]
    pub tags: HashMap<String, String>,
    /// Serf status code (1 = alive)
    #[serde(rename = "Status", default)]
    pub status: i32,
    #[serde(rename = "ProtocolMin", default)]
    pub protocol_min: u8,
    #[serde(rename = "ProtocolMax", default)]
    pub protocol_max: u8,
    #[serde(rename = "ProtocolCur", default)]
    pub protocol_cur: u8,
    #[serde(rename = "DelegateMin", default)]
    pub delegate_min: u8,
    #[serde(rename = "DelegateMax", default)]
    pub delegate_max: u8,
    #[serde(rename = "DelegateCur", default)]
    pub delegate_cur: u8,
}

/// A service registered with the local agent
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AgentService {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Tags", default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Port", default)]
    pub port: u16,
    #[serde(rename = "Meta", default)]
    pub meta: Option<HashMap<String, String>>,
    #[serde(rename = "EnableTagOverride", default)]
    pub enable_tag_override: bool,
}

/// A check registered with the local agent
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AgentCheck {
    #[serde(rename = "Node", default)]
    pub node: String,
    #[serde(rename = "CheckID")]
    pub check_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Output", default)]
    pub output: String,
    #[serde(rename = "ServiceID", default)]
    pub service_id: String,
    #[serde(rename = "ServiceName", default)]
    pub service_name: String,
}

/// Service registration request for /v1/agent/service/register
#[derive(Clone, Debug, Default, Serialize)]
pub struct ServiceRegistration {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "Address", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "Port", skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(rename = "Meta", skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
    #[serde(rename = "Check", skip_serializing_if = "Option::is_none")]
    pub check: Option<AgentServiceCheck>,
}

impl ServiceRegistration {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_address(mut self, address: &str, port: u16) -> Self {
        self.address = Some(address.to_string());
        self.port = Some(port);
        self
    }

    pub fn with_meta(mut self, meta: HashMap<String, String>) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Attach a TTL check; it starts critical until the first heartbeat.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.check = Some(AgentServiceCheck::ttl(ttl));
        self
    }

    pub fn with_check(mut self, check: AgentServiceCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Check ID Consul assigns to the embedded check: `service:<id or name>`
    pub fn check_id(&self) -> String {
        format!("service:{}", self.id.as_deref().unwrap_or(&self.name))
    }
}

/// Check definition embedded in a service registration
#[derive(Clone, Debug, Default, Serialize)]
pub struct AgentServiceCheck {
    #[serde(
        rename = "TTL",
        serialize_with = "go_duration::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<Duration>,
    #[serde(rename = "HTTP", skip_serializing_if = "Option::is_none")]
    pub http: Option<String>,
    #[serde(rename = "TCP", skip_serializing_if = "Option::is_none")]
    pub tcp: Option<String>,
    #[serde(
        rename = "Interval",
        serialize_with = "go_duration::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval: Option<Duration>,
    #[serde(
        rename = "Timeout",
        serialize_with = "go_duration::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout: Option<Duration>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        rename = "DeregisterCriticalServiceAfter",
        serialize_with = "go_duration::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub deregister_critical_service_after: Option<Duration>,
}

impl AgentServiceCheck {
    pub fn ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Default::default()
        }
    }

    pub fn http(url: &str, interval: Duration) -> Self {
        Self {
            http: Some(url.to_string()),
            interval: Some(interval),
            ..Default::default()
        }
    }

    pub fn tcp(addr: &str, interval: Duration) -> Self {
        Self {
            tcp: Some(addr.to_string()),
            interval: Some(interval),
            ..Default::default()
        }
    }
}

/// Standalone check registration for /v1/agent/check/register
#[derive(Clone, Debug, Default, Serialize)]
pub struct CheckRegistration {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "ServiceID", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Check definition; its `notes` are the registration's notes
    #[serde(flatten)]
    pub check: AgentServiceCheck,
}

impl CheckRegistration {
    pub fn new(name: &str, check: AgentServiceCheck) -> Self {
        Self {
            name: name.to_string(),
            check,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_service_id(mut self, service_id: &str) -> Self {
        self.service_id = Some(service_id.to_string());
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.check.notes = Some(notes.to_string());
        self
    }
}
