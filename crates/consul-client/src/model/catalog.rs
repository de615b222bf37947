// Catalog model types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::agent::AgentService;

/// A node known to the catalog
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Datacenter", default)]
    pub datacenter: String,
    #[serde(rename = "TaggedAddresses", default)]
    pub tagged_addresses: Option<HashMap<String, String>>,
    #[serde(rename = "Meta", default)]
    pub meta: Option<HashMap<String, String>>,
    #[serde(rename = "CreateIndex", default)]
    pub create_index: u64,
    #[serde(rename = "ModifyIndex", default)]
    pub modify_index: u64,
}

/// One instance of a service as listed by /v1/catalog/service/:service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogService {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Node")]
    pub node: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Datacenter", default)]
    pub datacenter: String,
    #[serde(rename = "ServiceID")]
    pub service_id: String,
    #[serde(rename = "ServiceName")]
    pub service_name: String,
    #[serde(rename = "ServiceTags", default)]
    pub service_tags: Option<Vec<String>>,
    #[serde(rename = "ServiceAddress", default)]
    pub service_address: String,
    #[serde(rename = "ServicePort", default)]
    pub service_port: u16,
    #[serde(rename = "ServiceMeta", default)]
    pub service_meta: Option<HashMap<String, String>>,
    #[serde(rename = "CreateIndex", default)]
    pub create_index: u64,
    #[serde(rename = "ModifyIndex", default)]
    pub modify_index: u64,
}

impl CatalogService {
    /// Address clients should dial: the service address, or the node's.
    pub fn effective_address(&self) -> &str {
        if self.service_address.is_empty() {
            &self.address
        } else {
            &self.service_address
        }
    }
}

/// Response of /v1/catalog/node/:node
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogNode {
    #[serde(rename = "Node")]
    pub node: Node,
    /// Services on the node keyed by service ID
    #[serde(rename = "Services", default)]
    pub services: HashMap<String, AgentService>,
}
