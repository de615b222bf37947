// Health endpoints: /v1/health

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
    model::{
        HealthCheck, HealthServiceOptions, HealthStatus, Indexed, QueryOptions, ServiceEntry,
    },
};

use super::agent::CheckEndpoint;

/// Health status queries
#[derive(Clone, Copy, Debug)]
pub struct Health<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> Health<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// Instances of a service with their node and checks. With
    /// `opts.passing` only instances whose checks all pass are returned.
    pub async fn service(
        &self,
        name: &str,
        opts: &HealthServiceOptions,
    ) -> Result<Indexed<Vec<ServiceEntry>>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(format!("{}/{}", consul_api_path::HEALTH_SERVICE, name))
                    .flag("passing", opts.passing)
                    .param_opt("tag", opts.tag.as_deref())
                    .query_options(&opts.query),
            )
            .await?
            .found()?;
        Ok(Indexed::new(resp.index, resp.json()?))
    }

    /// Checks attached to a service
    pub async fn checks(
        &self,
        service: &str,
        opts: &QueryOptions,
    ) -> Result<Indexed<Vec<HealthCheck>>> {
        self.list_checks(format!("{}/{}", consul_api_path::HEALTH_CHECKS, service), opts)
            .await
    }

    /// Checks running on a node
    pub async fn node(
        &self,
        node: &str,
        opts: &QueryOptions,
    ) -> Result<Indexed<Vec<HealthCheck>>> {
        self.list_checks(format!("{}/{}", consul_api_path::HEALTH_NODE, node), opts)
            .await
    }

    /// Checks currently in `state`; [`HealthStatus::Any`] lists all of them.
    pub async fn state(
        &self,
        state: HealthStatus,
        opts: &QueryOptions,
    ) -> Result<Indexed<Vec<HealthCheck>>> {
        self.list_checks(
            format!("{}/{}", consul_api_path::HEALTH_STATE, state.as_str()),
            opts,
        )
        .await
    }

    /// TTL heartbeats for checks on the local agent
    pub fn check(&self) -> CheckEndpoint<'a> {
        CheckEndpoint::new(self.http)
    }

    async fn list_checks(
        &self,
        path: String,
        opts: &QueryOptions,
    ) -> Result<Indexed<Vec<HealthCheck>>> {
        let resp = self
            .http
            .execute(ConsulRequest::get(path).query_options(opts))
            .await?
            .found()?;
        Ok(Indexed::new(resp.index, resp.json()?))
    }
}
