// KV store endpoint: /v1/kv

use futures::Stream;

use crate::{
    constants::consul_api_path,
    error::Result,
    http::{ConsulHttpClient, ConsulRequest},
    model::{Indexed, KvDeleteOptions, KvPair, KvPutOptions, QueryOptions},
    watch,
};

/// Key/value store operations
#[derive(Clone, Copy, Debug)]
pub struct Kv<'a> {
    http: &'a ConsulHttpClient,
}

fn key_path(key: &str) -> String {
    format!("{}/{}", consul_api_path::KV, key.trim_start_matches('/'))
}

impl<'a> Kv<'a> {
    pub(crate) fn new(http: &'a ConsulHttpClient) -> Self {
        Self { http }
    }

    /// Read a single key. `None` when the key does not exist.
    pub async fn get(&self, key: &str, opts: &QueryOptions) -> Result<Indexed<Option<KvPair>>> {
        let resp = self
            .http
            .execute(ConsulRequest::get(key_path(key)).query_options(opts))
            .await?;

        if resp.is_not_found() {
            return Ok(Indexed::new(resp.index, None));
        }

        let pairs: Vec<KvPair> = resp.json()?;
        Ok(Indexed::new(resp.index, pairs.into_iter().next()))
    }

    /// Read every entry under `prefix`, sorted by key. `None` when nothing
    /// lives under the prefix.
    pub async fn list(
        &self,
        prefix: &str,
        opts: &QueryOptions,
    ) -> Result<Indexed<Option<Vec<KvPair>>>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(key_path(prefix))
                    .flag("recurse", true)
                    .query_options(opts),
            )
            .await?;

        if resp.is_not_found() {
            return Ok(Indexed::new(resp.index, None));
        }

        let mut pairs: Vec<KvPair> = resp.json()?;
        if pairs.is_empty() {
            return Ok(Indexed::new(resp.index, None));
        }
        pairs.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(Indexed::new(resp.index, Some(pairs)))
    }

    /// List key names under `prefix`, optionally folded at `separator`.
    pub async fn keys(
        &self,
        prefix: &str,
        separator: Option<&str>,
        opts: &QueryOptions,
    ) -> Result<Indexed<Option<Vec<String>>>> {
        let resp = self
            .http
            .execute(
                ConsulRequest::get(key_path(prefix))
                    .flag("keys", true)
                    .param_opt("separator", separator)
                    .query_options(opts),
            )
            .await?;

        if resp.is_not_found() {
            return Ok(Indexed::new(resp.index, None));
        }

        let mut keys: Vec<String> = resp.json()?;
        keys.sort();
        Ok(Indexed::new(resp.index, Some(keys)))
    }

    /// Write `value` at `key`. Returns `false` when a CAS condition did not
    /// hold.
    pub async fn put(
        &self,
        key: &str,
        value: impl Into<Vec<u8>>,
        opts: &KvPutOptions,
    ) -> Result<bool> {
        let resp = self
            .http
            .execute(
                ConsulRequest::put(key_path(key))
                    .param_opt("cas", opts.cas)
                    .param_opt("flags", opts.flags)
                    .token(opts.token.as_deref())
                    .datacenter(opts.datacenter.as_deref())
                    .body(value),
            )
            .await?
            .found()?;

        resp.bool()
    }

    /// Delete `key`, or the whole subtree when `opts.recurse` is set.
    pub async fn delete(&self, key: &str, opts: &KvDeleteOptions) -> Result<bool> {
        let resp = self
            .http
            .execute(
                ConsulRequest::delete(key_path(key))
                    .flag("recurse", opts.recurse)
                    .param_opt("cas", opts.cas)
                    .token(opts.token.as_deref())
                    .datacenter(opts.datacenter.as_deref()),
            )
            .await?
            .found()?;

        resp.bool()
    }

    /// Stream every change of a single key via blocking queries.
    pub fn watch(
        &self,
        key: &str,
        opts: &QueryOptions,
    ) -> impl Stream<Item = Result<Indexed<Option<KvPair>>>> + use<'a> {
        let kv = *self;
        let key = key.to_string();
        let opts = opts.clone();

        watch::watch(opts.index.unwrap_or(0), move |index| {
            let key = key.clone();
            let opts = opts.clone().with_index(index);
            async move { kv.get(&key, &opts).await }
        })
    }

    /// Stream every change under a prefix via blocking queries.
    pub fn watch_prefix(
        &self,
        prefix: &str,
        opts: &QueryOptions,
    ) -> impl Stream<Item = Result<Indexed<Option<Vec<KvPair>>>>> + use<'a> {
        let kv = *self;
        let prefix = prefix.to_string();
        let opts = opts.clone();

        watch::watch(opts.index.unwrap_or(0), move |index| {
            let prefix = prefix.clone();
            let opts = opts.clone().with_index(index);
            async move { kv.list(&prefix, &opts).await }
        })
    }
}
