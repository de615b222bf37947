// Health model types

use serde::{Deserialize, Serialize};

use super::agent::AgentService;
use super::catalog::Node;
use super::common::QueryOptions;

/// Status of a health check
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Passing,
    Warning,
    #[default]
    Critical,
    Maintenance,
    /// Matches every state in /v1/health/state queries
    Any,
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Passing => "passing",
            HealthStatus::Warning => "warning",
            HealthStatus::Critical => "critical",
            HealthStatus::Maintenance => "maintenance",
            HealthStatus::Any => "any",
            HealthStatus::Unknown => "unknown",
        }
    }

    fn severity(&self) -> u8 {
        match self {
            HealthStatus::Passing | HealthStatus::Any => 0,
            HealthStatus::Warning => 1,
            HealthStatus::Critical | HealthStatus::Unknown => 2,
            HealthStatus::Maintenance => 3,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A health check as reported by the /v1/health endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(rename = "Node", default)]
    pub node: String,
    #[serde(rename = "CheckID")]
    pub check_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Status")]
    pub status: HealthStatus,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "Output", default)]
    pub output: String,
    #[serde(rename = "ServiceID", default)]
    pub service_id: String,
    #[serde(rename = "ServiceName", default)]
    pub service_name: String,
    #[serde(rename = "CreateIndex", default)]
    pub create_index: u64,
    #[serde(rename = "ModifyIndex", default)]
    pub modify_index: u64,
}

/// One service instance with its node and checks
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceEntry {
    #[serde(rename = "Node")]
    pub node: Node,
    #[serde(rename = "Service")]
    pub service: AgentService,
    #[serde(rename = "Checks", default)]
    pub checks: Vec<HealthCheck>,
}

impl ServiceEntry {
    /// Worst status across all checks; passing when there are none.
    pub fn aggregated_status(&self) -> HealthStatus {
        self.checks
            .iter()
            .map(|c| c.status)
            .max_by_key(HealthStatus::severity)
            .unwrap_or(HealthStatus::Passing)
    }

    pub fn is_passing(&self) -> bool {
        self.aggregated_status() == HealthStatus::Passing
    }
}

/// Options for /v1/health/service/:service
#[derive(Clone, Debug, Default)]
pub struct HealthServiceOptions {
    /// Only return instances whose checks are all passing
    pub passing: bool,
    /// Only return instances carrying this tag
    pub tag: Option<String>,
    pub query: QueryOptions,
}

impl HealthServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passing() -> Self {
        Self {
            passing: true,
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_query(mut self, query: QueryOptions) -> Self {
        self.query = query;
        self
    }
}
