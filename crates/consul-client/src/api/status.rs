// Status endpoints: /v1/status

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
};

/// Raft status of the cluster
#[derive(Clone, Copy, Debug)]
pub struct Status<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> Status<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// Address of the Raft leader, empty while there is none
    pub async fn leader(&self) -> Result<String> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::STATUS_LEADER))
            .await?
            .found()?
            .json()
    }

    /// Addresses of the Raft peers
    pub async fn peers(&self) -> Result<Vec<String>> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::STATUS_PEERS))
            .await?
            .found()?
            .json()
    }
}
