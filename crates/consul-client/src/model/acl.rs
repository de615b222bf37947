// ACL model types (legacy token API)

use serde::{Deserialize, Serialize};

/// Token privilege class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclTokenType {
    #[default]
    Client,
    Management,
}

/// An ACL token as returned by /v1/acl/info and /v1/acl/list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclToken {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub token_type: AclTokenType,
    /// Policy text in HCL or JSON
    #[serde(rename = "Rules", default)]
    pub rules: String,
    #[serde(rename = "CreateIndex", default)]
    pub create_index: u64,
    #[serde(rename = "ModifyIndex", default)]
    pub modify_index: u64,
}

/// Body for token create/update; unset fields are left to the server.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AclTokenRequest {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<AclTokenType>,
    #[serde(rename = "Rules", skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
}

impl AclTokenRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_type(mut self, token_type: AclTokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    pub fn with_rules(mut self, rules: &str) -> Self {
        self.rules = Some(rules.to_string());
        self
    }
}

/// `{"ID": "..."}` reply of create/update/clone
#[derive(Debug, Deserialize)]
pub(crate) struct AclIdResponse {
    #[serde(rename = "ID")]
    pub id: String,
}
