//! Application bootstrap
//!
//! Composition root: builds the service graph from [`AppConfig`] once and
//! hands out shared handles. Each [`AppContext`] owns its own meta cache, so
//! tests and separate contexts never share cached state.

use crate::adapters::ReqwestMetaTransport;
use crate::config::AppConfig;
use portal_application::MetaService;
use portal_domain::error::Result;
use portal_domain::ports::MetaTransport;
use std::sync::Arc;
use tracing::info;

/// Wired application services
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    meta_service: Arc<MetaService>,
}

impl AppContext {
    /// Build the context using the reqwest transport
    pub fn new(config: AppConfig) -> Result<Self> {
        let transport = ReqwestMetaTransport::from_config(&config.meta)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build the context around a given transport
    pub fn with_transport(config: AppConfig, transport: Arc<dyn MetaTransport>) -> Self {
        info!(
            base_url = %config.meta.base_url,
            path = %config.meta.path,
            ttl_ms = config.meta.ttl_ms,
            transport = transport.transport_name(),
            "Initializing application context"
        );

        let meta_service = MetaService::new(transport)
            .with_path(config.meta.path.clone())
            .with_ttl(config.meta.ttl());

        Self {
            config: Arc::new(config),
            meta_service: Arc::new(meta_service),
        }
    }

    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shared public meta service
    pub fn meta_service(&self) -> Arc<MetaService> {
        Arc::clone(&self.meta_service)
    }
}
