// Catalog endpoints: /v1/catalog

use std::collections::HashMap;

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
    model::{CatalogNode, CatalogService, Indexed, Node, QueryOptions},
};

/// Cluster-wide catalog queries
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    http: &'a ConsulHttpClient,
}

impl<'a> Catalog<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// Known datacenters, nearest first as Consul orders them
    pub async fn datacenters(&self) -> Result<Vec<String>> {
        self.http
            .execute(ConsulRequest::get(consul_api_path::CATALOG_DATACENTERS))
            .await?
            .found()?
            .json()
    }

    /// Nodes of a datacenter. An unreachable `dc` fails with the server's
    /// error.
    pub async fn nodes(&self, opts: &QueryOptions) -> Result<Indexed<Vec<Node>>> {
        let resp = self
            .http
            .execute(ConsulRequest::get(consul_api_path::CATALOG_NODES).query_options(opts))
            .await?
            .found()?;
        Ok(Indexed::new(resp.index, resp.json()?))
    }

    /// Service names mapped to their tags
    pub async fn services(
        &self,
        opts: &QueryOptions,
    ) -> Result<Indexed<HashMap<String, Vec<String>>>> {
        let resp = self
            .http
            .execute(ConsulRequest::get(consul_api_path::CATALOG_SERVICES).query_options(opts))
            .await?
            .found()?;
        Ok(Indexed::new(resp.index, resp.json()?))
    }

    /// Instances of one service, optionally filtered by tag
    pub async fn service(
        &self,
        name: &str,
        tag: Option<&str>,
        opts: &QueryOptions,
    ) -> Result<Indexed<Vec<CatalogService>>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(format!("{}/{}", consul_api_path::CATALOG_SERVICE, name))
                    .param_opt("tag", tag)
                    .query_options(opts),
            )
            .await?
            .found()?;
        Ok(Indexed::new(resp.index, resp.json()?))
    }

    /// A node and its services; `None` for an unknown node.
    pub async fn node(
        &self,
        name: &str,
        opts: &QueryOptions,
    ) -> Result<Indexed<Option<CatalogNode>>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(format!("{}/{}", consul_api_path::CATALOG_NODE, name))
                    .query_options(opts),
            )
            .await?;

        if resp.is_not_found() {
            return Ok(Indexed::new(resp.index, None));
        }
        // Consul answers `null` for nodes it has never seen
        Ok(Indexed::new(resp.index, resp.json()?))
    }
}
