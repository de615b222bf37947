// KV store model types

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An entry of the Consul KV store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "CreateIndex", default)]
    pub create_index: u64,

    #[serde(rename = "ModifyIndex", default)]
    pub modify_index: u64,

    #[serde(rename = "LockIndex", default)]
    pub lock_index: u64,

    #[serde(rename = "Flags", default)]
    pub flags: u64,

    /// Raw value, base64 encoded on the wire
    #[serde(
        rename = "Value",
        default,
        serialize_with = "serialize_value",
        deserialize_with = "deserialize_value"
    )]
    pub value: Option<Vec<u8>>,

    #[serde(rename = "Session", default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

impl KvPair {
    /// UTF-8 view of the value, `None` if absent or not valid UTF-8
    pub fn value_str(&self) -> Option<&str> {
        self.value
            .as_deref()
            .and_then(|v| std::str::from_utf8(v).ok())
    }
}

fn serialize_value<S: Serializer>(value: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(bytes) => s.serialize_str(&BASE64.encode(bytes)),
        None => s.serialize_none(),
    }
}

fn deserialize_value<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
    let encoded: Option<String> = Option::deserialize(d)?;
    encoded
        .map(|v| BASE64.decode(v.as_bytes()).map_err(serde::de::Error::custom))
        .transpose()
}

/// Options for a KV write
#[derive(Clone, Debug, Default)]
pub struct KvPutOptions {
    /// Check-and-set: 0 creates only, N requires ModifyIndex == N
    pub cas: Option<u64>,
    /// Opaque client flags stored with the entry
    pub flags: Option<u64>,
    pub token: Option<String>,
    pub datacenter: Option<String>,
}

impl KvPutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cas(mut self, cas: u64) -> Self {
        self.cas = Some(cas);
        self
    }

    pub fn with_flags(mut self, flags: u64) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = Some(datacenter.to_string());
        self
    }
}

/// Options for a KV delete
#[derive(Clone, Debug, Default)]
pub struct KvDeleteOptions {
    /// Delete every key under the given prefix
    pub recurse: bool,
    /// Only delete if ModifyIndex matches
    pub cas: Option<u64>,
    pub token: Option<String>,
    pub datacenter: Option<String>,
}

impl KvDeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursive() -> Self {
        Self {
            recurse: true,
            ..Default::default()
        }
    }

    pub fn with_cas(mut self, cas: u64) -> Self {
        self.cas = Some(cas);
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = Some(datacenter.to_string());
        self
    }
}
