//! HTTP Meta Transport
//!
//! reqwest-backed [`MetaTransport`]. Issues a plain `GET` against the
//! configured base URL and hands the raw status and body back to the
//! meta service; no headers, body, or credentials are attached.

use crate::config::MetaClientConfig;
use crate::error_ext::ErrorContext;
use async_trait::async_trait;
use portal_domain::error::Result;
use portal_domain::ports::{HttpReply, MetaTransport};
use tracing::debug;

/// reqwest implementation of the meta transport port
pub struct ReqwestMetaTransport {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestMetaTransport {
    /// Create a transport for `base_url` using an existing client
    pub fn new<S: Into<String>>(base_url: S, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Create a transport from configuration, applying the client timeout
    pub fn from_config(config: &MetaClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .config_context("Failed to create HTTP client")?;
        Ok(Self::new(config.base_url.clone(), client))
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a path without doubling the slash
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl MetaTransport for ReqwestMetaTransport {
    async fn get(&self, path: &str) -> Result<HttpReply> {
        let url = self.url_for(path);
        debug!(url = %url, "Sending meta request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .transport_context(format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .transport_context(format!("Reading body of GET {url} failed"))?;

        debug!(status, bytes = body.len(), "Received meta response");
        Ok(HttpReply::new(status, body.to_vec()))
    }

    fn transport_name(&self) -> &str {
        "reqwest"
    }
}
