// ACL endpoints: /v1/acl (legacy token API)
//
// Every call fails with `AclDisabled` when the cluster runs without ACLs and
// with `AclPermissionDenied` when the token is not privileged enough.

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
    model::{AclToken, AclTokenRequest, acl::AclIdResponse},
};

/// ACL token management
#[derive(Clone, Copy, Debug)]
pub struct Acl<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> Acl<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// All tokens; needs a management token.
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<AclToken>> {
        let tokens: Option<Vec<AclToken>> = self
            .http
            .execute(ConsulRequest::get(consul_api_path::ACL_LIST).token(token))
            .await?
            .found()?
            .json()?;
        Ok(tokens.unwrap_or_default())
    }

    /// Look up one token; `None` when it does not exist.
    pub async fn info(&self, id: &str, token: Option<&str>) -> Result<Option<AclToken>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(format!("{}/{}", consul_api_path::ACL_INFO, id)).token(token),
            )
            .await?;

        if resp.is_not_found() {
            return Ok(None);
        }
        let tokens: Option<Vec<AclToken>> = resp.json()?;
        Ok(tokens.and_then(|t| t.into_iter().next()))
    }

    /// Create a token and return its ID.
    pub async fn create(&self, request: &AclTokenRequest, token: Option<&str>) -> Result<String> {
        let resp = self
            .http
            .execute(
                ConsulRequest::put(consul_api_path::ACL_CREATE)
                    .token(token)
                    .json(request)?,
            )
            .await?
            .found()?;
        Ok(resp.json::<AclIdResponse>()?.id)
    }

    /// Update the token `id` and echo its ID back.
    pub async fn update(
        &self,
        id: &str,
        request: &AclTokenRequest,
        token: Option<&str>,
    ) -> Result<String> {
        let body = AclTokenRequest {
            id: Some(id.to_string()),
            ..request.clone()
        };
        let resp = self
            .http
            .execute(
                ConsulRequest::put(consul_api_path::ACL_UPDATE)
                    .token(token)
                    .json(&body)?,
            )
            .await?
            .found()?;

        // Older agents reply with an empty body
        if resp.body.is_empty() {
            return Ok(id.to_string());
        }
        Ok(resp.json::<AclIdResponse>()?.id)
    }

    /// Copy the rules of `id` into a new token and return the new ID.
    pub async fn clone_token(&self, id: &str, token: Option<&str>) -> Result<String> {
        let resp = self
            .http
            .execute(
                ConsulRequest::put(format!("{}/{}", consul_api_path::ACL_CLONE, id)).token(token),
            )
            .await?
            .found()?;
        Ok(resp.json::<AclIdResponse>()?.id)
    }

    pub async fn destroy(&self, id: &str, token: Option<&str>) -> Result<bool> {
        self.http
            .execute(
                ConsulRequest::put(format!("{}/{}", consul_api_path::ACL_DESTROY, id)).token(token),
            )
            .await?
            .found()?
            .bool()
    }
}
