// Agent endpoints: /v1/agent

use std::collections::HashMap;

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
    model::{
        AgentCheck, AgentMember, AgentSelf, AgentService, CheckRegistration, ServiceRegistration,
    },
};

/// Operations on the local agent
#[derive(Clone, Copy, Debug)]
pub struct Agent<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> Agent<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// Configuration and member information of the agent
    pub async fn self_info(&self) -> Result<AgentSelf> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::AGENT_SELF))
            .await?
            .found()?
            .json()
    }

    /// LAN members known to the agent
    pub async fn members(&self) -> Result<Vec<AgentMember>> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::AGENT_MEMBERS))
            .await?
            .found()?
            .json()
    }

    /// Services registered with the agent, keyed by service ID
    pub async fn services(&self) -> Result<HashMap<String, AgentService>> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::AGENT_SERVICES))
            .await?
            .found()?
            .json()
    }

    /// Checks registered with the agent, keyed by check ID
    pub async fn checks(&self) -> Result<HashMap<String, AgentCheck>> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::AGENT_CHECKS))
            .await?
            .found()?
            .json()
    }

    pub fn service(&self) -> ServiceEndpoint<'a> {
        ServiceEndpoint { http: self.http }
    }

    pub fn check(&self) -> CheckEndpoint<'a> {
        CheckEndpoint::new(self.http)
    }
}

/// Service registration on the local agent
#[derive(Clone, Copy, Debug)]
pub struct ServiceEndpoint<'a> {
    http: &'a ConsulHttpClient,
}

impl ServiceEndpoint<'_> {
    pub async fn register(&self, registration: &ServiceRegistration) -> Result<bool> {
        let resp = self
            .http
            .execute(
                ConsulRequest::put(consul_api_path::AGENT_SERVICE_REGISTER).json(registration)?,
            )
            .await?;
        Ok(!resp.is_not_found())
    }

    /// Remove a service; `false` when the agent does not know the ID.
    pub async fn deregister(&self, service_id: &str) -> Result<bool> {
        let resp = self
            .http
            .execute(ConsulRequest::put(format!(
                "{}/{}",
                consul_api_path::AGENT_SERVICE_DEREGISTER,
                service_id
            )))
            .await?;
        Ok(!resp.is_not_found())
    }
}

/// Check registration and TTL heartbeats on the local agent
#[derive(Clone, Copy, Debug)]
pub struct CheckEndpoint<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> CheckEndpoint<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    pub async fn register(&self, registration: &CheckRegistration) -> Result<bool> {
        let resp = self
            .http
            .execute(
                ConsulRequest::put(consul_api_path::AGENT_CHECK_REGISTER).json(registration)?,
            )
            .await?;
        Ok(!resp.is_not_found())
    }

    /// Remove a check; `false` when the agent does not know the ID.
    pub async fn deregister(&self, check_id: &str) -> Result<bool> {
        let resp = self
            .http
            .execute(ConsulRequest::put(format!(
                "{}/{}",
                consul_api_path::AGENT_CHECK_DEREGISTER,
                check_id
            )))
            .await?;
        Ok(!resp.is_not_found())
    }

    /// Mark a TTL check as passing. Must be repeated within the TTL.
    pub async fn ttl_pass(&self, check_id: &str, note: Option<&str>) -> Result<()> {
        self.update_ttl(consul_api_path::AGENT_CHECK_PASS, check_id, note)
            .await
    }

    pub async fn ttl_warn(&self, check_id: &str, note: Option<&str>) -> Result<()> {
        self.update_ttl(consul_api_path::AGENT_CHECK_WARN, check_id, note)
            .await
    }

    pub async fn ttl_fail(&self, check_id: &str, note: Option<&str>) -> Result<()> {
        self.update_ttl(consul_api_path::AGENT_CHECK_FAIL, check_id, note)
            .await
    }

    async fn update_ttl(&self, base: &str, check_id: &str, note: Option<&str>) -> Result<()> {
        self.http
            .execute(
                ConsulRequest::put(format!("{}/{}", base, check_id)).param_opt("note", note),
            )
            .await?
            .found()?;
        Ok(())
    }
}
