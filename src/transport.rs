//! HTTP transport seam.
//!
//! Every API call is a single JSON POST; [`Transport`] is the one
//! abstraction point over that round-trip so the polling protocol can be
//! exercised against a scripted transport in tests.

use crate::config::ApiEndpoint;
use crate::error::Result;
use async_trait::async_trait;
use rquest::{Client, Proxy};
use serde_json::Value;
use std::sync::Arc;

/// A JSON request/response channel to the CapSolver API.
///
/// Implementations make exactly one attempt per call; retry policy is the
/// caller's business.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` to `path` (relative to the configured host) and return
    /// the decoded JSON response.
    async fn post_json(&self, path: &str, body: Value) -> Result<Value>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        (**self).post_json(path, body).await
    }
}

/// [`Transport`] backed by an rquest [`Client`].
pub struct HttpTransport {
    client: Client,
    base_url: &'static str,
}

impl HttpTransport {
    /// Build a transport for the given endpoint, optionally routed through
    /// an HTTP or SOCKS5 proxy.
    pub fn new(api_url: ApiEndpoint, proxy: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy_url) = proxy {
            builder = builder.proxy(Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: api_url.base_url(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(&body).send().await?;
        Ok(response.json().await?)
    }
}
