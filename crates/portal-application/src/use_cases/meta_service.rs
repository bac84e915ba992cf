//! Public Meta Service Use Case
//!
//! Cached accessor for the public meta document (service types and
//! permission preset keys). One document is held at a time and served
//! until it is older than the configured TTL.
//!
//! ## Cache rules
//!
//! - A call with `force = false` returns the cached document when one
//!   exists and `now - fetched_at < ttl`. A falsy document (`null`,
//!   `false`, `0`, `""`) counts as no cached value.
//! - Any other call goes to the transport. Only a 2xx reply with a JSON
//!   body replaces the cache; the entry's timestamp is the instant the
//!   call started.
//! - Failures leave the previous entry and its timestamp untouched.
//!
//! Concurrent stale calls are not coalesced. Each one issues its own
//! request and the last to complete wins the cache slot.

use portal_domain::error::{Error, Result};
use portal_domain::ports::MetaTransport;
use portal_domain::value_objects::{MetaDocument, PublicMeta};
use portal_domain::{META_CACHE_TTL_MS, PUBLIC_META_PATH};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Meta document held in the cache
#[derive(Debug, Clone)]
pub struct CachedMeta {
    /// The document as last fetched
    pub document: Arc<MetaDocument>,
    /// Instant the fetch that produced it was started
    pub fetched_at: Instant,
}

impl CachedMeta {
    /// Whether the entry is still within `ttl` at `now`
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }

    /// Whether the document can be served as a cache hit
    pub fn has_value(&self) -> bool {
        match self.document.as_ref() {
            MetaDocument::Null | MetaDocument::Bool(false) => false,
            MetaDocument::Number(n) => n.as_f64() != Some(0.0),
            MetaDocument::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

/// Public meta access interface
#[async_trait::async_trait]
pub trait MetaServiceInterface: Send + Sync {
    /// Return the meta document, from cache when fresh unless `force` is set
    async fn fetch_meta(&self, force: bool) -> Result<Arc<MetaDocument>>;

    /// Same as [`MetaServiceInterface::fetch_meta`], decoded into [`PublicMeta`]
    async fn fetch_public_meta(&self, force: bool) -> Result<PublicMeta>;
}

/// Meta service implementation backed by a [`MetaTransport`]
pub struct MetaService {
    transport: Arc<dyn MetaTransport>,
    path: String,
    ttl: Duration,
    cache: RwLock<Option<CachedMeta>>,
}

impl MetaService {
    /// Create a service with the default path and TTL
    pub fn new(transport: Arc<dyn MetaTransport>) -> Self {
        Self {
            transport,
            path: PUBLIC_META_PATH.to_string(),
            ttl: Duration::from_millis(META_CACHE_TTL_MS),
            cache: RwLock::new(None),
        }
    }

    /// Override the resource path
    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.path = path.into();
        self
    }

    /// Override the cache TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Resource path requested from the transport
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Configured cache TTL
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current cache entry, fresh or not, without network access
    pub async fn cached(&self) -> Option<CachedMeta> {
        self.cache.read().await.clone()
    }

    /// Drop the cached document
    pub async fn clear(&self) {
        *self.cache.write().await = None;
    }

    async fn fresh_document(&self, now: Instant) -> Option<Arc<MetaDocument>> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|entry| entry.has_value() && entry.is_fresh(now, self.ttl))
            .map(|entry| Arc::clone(&entry.document))
    }

    async fn fetch_remote(&self) -> Result<MetaDocument> {
        debug!(
            path = %self.path,
            transport = self.transport.transport_name(),
            "Fetching public meta"
        );

        let reply = self.transport.get(&self.path).await?;
        if !reply.is_success() {
            warn!(
                status = reply.status,
                path = %self.path,
                "Meta endpoint returned non-success status"
            );
            return Err(Error::fetch(reply.status));
        }

        serde_json::from_slice(&reply.body).map_err(|e| {
            warn!(error = %e, path = %self.path, "Meta response is not valid JSON");
            Error::from(e)
        })
    }
}

#[async_trait::async_trait]
impl MetaServiceInterface for MetaService {
    async fn fetch_meta(&self, force: bool) -> Result<Arc<MetaDocument>> {
        let now = Instant::now();

        if !force && let Some(document) = self.fresh_document(now).await {
            debug!("Serving public meta from cache");
            return Ok(document);
        }

        let document = Arc::new(self.fetch_remote().await?);

        *self.cache.write().await = Some(CachedMeta {
            document: Arc::clone(&document),
            fetched_at: now,
        });
        info!(forced = force, "Public meta cache refreshed");

        Ok(document)
    }

    async fn fetch_public_meta(&self, force: bool) -> Result<PublicMeta> {
        let document = self.fetch_meta(force).await?;
        PublicMeta::from_document(&document)
    }
}
