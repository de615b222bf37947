// Common model types shared by every endpoint

use std::time::Duration;

/// A result tagged with the Consul index it is consistent with.
///
/// Feed `index` back through [`QueryOptions::with_index`] to block until the
/// result changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Indexed<T> {
    pub index: u64,
    pub value: T,
}

impl<T> Indexed<T> {
    pub fn new(index: u64, value: T) -> Self {
        Self { index, value }
    }

    pub fn into_parts(self) -> (u64, T) {
        (self.index, self.value)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Indexed<U> {
        Indexed {
            index: self.index,
            value: f(self.value),
        }
    }
}

/// Read consistency mode for a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Consistency {
    /// Leader-forwarded read, Consul's default
    #[default]
    Default,
    /// Leader verifies it is still leader before answering
    Consistent,
    /// Any server may answer, possibly with stale data
    Stale,
}

impl Consistency {
    pub(crate) fn as_flag(&self) -> Option<&'static str> {
        match self {
            Consistency::Default => None,
            Consistency::Consistent => Some("consistent"),
            Consistency::Stale => Some("stale"),
        }
    }
}

/// Per-call options for read endpoints
#[derive(Clone, Debug, Default)]
pub struct QueryOptions {
    /// Datacenter to query, overriding the client default
    pub datacenter: Option<String>,
    /// ACL token, overriding the client default
    pub token: Option<String>,
    /// Blocking query: wait until the index moves past this value
    pub index: Option<u64>,
    /// Blocking query: maximum server-side wait
    pub wait: Option<Duration>,
    pub consistency: Consistency,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = Some(datacenter.to_string());
        self
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = Some(wait);
        self
    }

    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = consistency;
        self
    }
}

/// Format a duration the way Consul's Go parser expects it ("10s", "250ms").
pub fn format_duration(d: Duration) -> String {
    if d.subsec_nanos() == 0 {
        format!("{}s", d.as_secs())
    } else if d.as_nanos() % 1_000_000 == 0 {
        format!("{}ms", d.as_millis())
    } else if d.as_nanos() % 1_000 == 0 {
        format!("{}us", d.as_micros())
    } else {
        format!("{}ns", d.as_nanos())
    }
}

pub(crate) mod go_duration {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => serializer.serialize_str(&super::format_duration(*d)),
            None => serializer.serialize_none(),
        }
    }
}
