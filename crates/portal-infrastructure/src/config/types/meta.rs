//! Public meta client configuration types

use crate::constants::*;
use portal_domain::{META_CACHE_TTL_MS, PUBLIC_META_PATH};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of the public meta accessor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaClientConfig {
    /// Base URL of the backend (scheme, host, optional port)
    pub base_url: String,

    /// Resource path of the meta document
    pub path: String,

    /// Cache TTL in milliseconds
    pub ttl_ms: u64,

    /// HTTP client timeout in seconds (0 disables)
    pub timeout_secs: u64,
}

impl MetaClientConfig {
    /// Cache TTL as a [`Duration`]
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Client timeout, if enabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for MetaClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_META_BASE_URL.to_string(),
            path: PUBLIC_META_PATH.to_string(),
            ttl_ms: META_CACHE_TTL_MS,
            timeout_secs: DEFAULT_META_TIMEOUT_SECS,
        }
    }
}
