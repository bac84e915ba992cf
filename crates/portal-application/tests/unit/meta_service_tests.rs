//! Tests for the cached public meta accessor
//!
//! Time is paused in every async test so TTL boundaries can be stepped
//! through with `tokio::time::advance`.

use async_trait::async_trait;
use portal_application::{MetaService, MetaServiceInterface};
use portal_domain::{Error, HttpReply, MetaTransport, PUBLIC_META_PATH, Result};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

const BODY: &str = r#"{"serviceTypes":["A","B"],"permissionPresets":["x"]}"#;

/// Transport that replays scripted replies and counts requests
struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<HttpReply>>>,
    calls: AtomicUsize,
    paths: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Result<HttpReply>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
            paths: Mutex::new(Vec::new()),
        })
    }

    fn ok(body: &str) -> Result<HttpReply> {
        Ok(HttpReply::new(200, body))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetaTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<HttpReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(path.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport("no scripted reply left")))
    }

    fn transport_name(&self) -> &str {
        "scripted"
    }
}

fn service(transport: &Arc<ScriptedTransport>) -> MetaService {
    MetaService::new(Arc::clone(transport) as Arc<dyn MetaTransport>)
}

#[tokio::test(start_paused = true)]
async fn test_success_returns_document_and_caches_it() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(BODY)]);
    let service = service(&transport);

    let first = service.fetch_meta(false).await.unwrap();
    assert_eq!(
        *first,
        json!({"serviceTypes": ["A", "B"], "permissionPresets": ["x"]})
    );

    let second = service.fetch_meta(false).await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.paths.lock().unwrap().as_slice(),
        [PUBLIC_META_PATH.to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cache_hit_until_ttl_boundary() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok(BODY),
        ScriptedTransport::ok(r#"{"serviceTypes":[]}"#),
    ]);
    let service = service(&transport);

    let first = service.fetch_meta(false).await.unwrap();

    tokio::time::advance(Duration::from_millis(29_999)).await;
    let cached = service.fetch_meta(false).await.unwrap();
    assert!(Arc::ptr_eq(&first, &cached));
    assert_eq!(transport.calls(), 1);

    // Exactly at the TTL the entry is stale
    tokio::time::advance(Duration::from_millis(1)).await;
    let refreshed = service.fetch_meta(false).await.unwrap();
    assert_eq!(transport.calls(), 2);
    assert_eq!(*refreshed, json!({"serviceTypes": []}));
}

#[tokio::test(start_paused = true)]
async fn test_force_always_fetches() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok(BODY),
        ScriptedTransport::ok(BODY),
        ScriptedTransport::ok(r#"{"v":3}"#),
    ]);
    let service = service(&transport);

    service.fetch_meta(false).await.unwrap();
    service.fetch_meta(true).await.unwrap();
    let third = service.fetch_meta(true).await.unwrap();

    assert_eq!(transport.calls(), 3);
    assert_eq!(*third, json!({"v": 3}));

    // A forced refresh restarts the TTL window
    let cached = service.fetch_meta(false).await.unwrap();
    assert!(Arc::ptr_eq(&third, &cached));
    assert_eq!(transport.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_http_error_rejects_with_status_and_leaves_cache_empty() {
    let transport = ScriptedTransport::new(vec![Ok(HttpReply::new(500, "boom"))]);
    let service = service(&transport);

    let err = service.fetch_meta(false).await.unwrap_err();
    assert!(err.to_string().contains("500"));
    assert_eq!(err.status(), Some(500));
    assert!(service.cached().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_malformed_json_is_parse_error() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok("<html>nope</html>")]);
    let service = service(&transport);

    let err = service.fetch_meta(false).await.unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(service.cached().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_transport_failure_propagates() {
    let transport = ScriptedTransport::new(vec![Err(Error::transport("connection refused"))]);
    let service = service(&transport);

    let err = service.fetch_meta(false).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
    assert!(service.cached().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_failed_refresh_keeps_old_value_and_ttl_window() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok(BODY),
        Ok(HttpReply::new(503, "")),
        Ok(HttpReply::new(502, "")),
    ]);
    let service = service(&transport);

    let original = service.fetch_meta(false).await.unwrap();
    let fetched_at = service.cached().await.unwrap().fetched_at;

    tokio::time::advance(Duration::from_millis(10_000)).await;
    let err = service.fetch_meta(true).await.unwrap_err();
    assert_eq!(err.status(), Some(503));

    // Still inside the original window: old value, no network
    tokio::time::advance(Duration::from_millis(10_000)).await;
    let cached = service.fetch_meta(false).await.unwrap();
    assert!(Arc::ptr_eq(&original, &cached));
    assert_eq!(transport.calls(), 2);
    assert_eq!(service.cached().await.unwrap().fetched_at, fetched_at);

    // Window not extended by the failed refresh
    tokio::time::advance(Duration::from_millis(10_000)).await;
    let err = service.fetch_meta(false).await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(transport.calls(), 3);
    assert!(Arc::ptr_eq(
        &original,
        &service.cached().await.unwrap().document
    ));
}

#[tokio::test(start_paused = true)]
async fn test_custom_ttl_and_path() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok(BODY),
        ScriptedTransport::ok(BODY),
    ]);
    let service = service(&transport)
        .with_ttl(Duration::from_secs(5))
        .with_path("/meta");
    assert_eq!(service.ttl(), Duration::from_secs(5));
    assert_eq!(service.path(), "/meta");

    service.fetch_meta(false).await.unwrap();
    tokio::time::advance(Duration::from_secs(5)).await;
    service.fetch_meta(false).await.unwrap();

    assert_eq!(transport.calls(), 2);
    assert_eq!(transport.paths.lock().unwrap()[0], "/meta");
}

#[tokio::test(start_paused = true)]
async fn test_clear_forces_next_fetch() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok(BODY),
        ScriptedTransport::ok(BODY),
    ]);
    let service = service(&transport);

    service.fetch_meta(false).await.unwrap();
    service.clear().await;
    assert!(service.cached().await.is_none());

    service.fetch_meta(false).await.unwrap();
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_public_meta_decodes_fields() {
    let transport = ScriptedTransport::new(vec![ScriptedTransport::ok(BODY)]);
    let service = service(&transport);

    let meta = service.fetch_public_meta(false).await.unwrap();
    assert_eq!(meta.service_types, vec!["A", "B"]);
    assert_eq!(meta.permission_presets, vec!["x"]);

    // Served from the same cache entry
    service.fetch_public_meta(false).await.unwrap();
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_null_body_is_not_served_from_cache() {
    let transport = ScriptedTransport::new(vec![
        ScriptedTransport::ok("null"),
        ScriptedTransport::ok(BODY),
    ]);
    let service = service(&transport);

    let first = service.fetch_meta(false).await.unwrap();
    assert!(first.is_null());

    let second = service.fetch_meta(false).await.unwrap();
    assert_eq!(second["serviceTypes"], json!(["A", "B"]));
    assert_eq!(transport.calls(), 2);

    service.fetch_meta(false).await.unwrap();
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_falsy_bodies_count_as_empty_cache() {
    for body in ["false", "0", r#""""#] {
        let transport = ScriptedTransport::new(vec![
            ScriptedTransport::ok(body),
            ScriptedTransport::ok(body),
        ]);
        let service = service(&transport);

        service.fetch_meta(false).await.unwrap();
        service.fetch_meta(false).await.unwrap();
        assert_eq!(transport.calls(), 2, "body {body} was served from cache");
    }
}

/// Transport that holds every request until two are in flight
struct GatedTransport {
    gate: Barrier,
    calls: AtomicUsize,
}

#[async_trait]
impl MetaTransport for GatedTransport {
    async fn get(&self, _path: &str) -> Result<HttpReply> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.wait().await;
        Ok(HttpReply::new(200, format!(r#"{{"n":{n}}}"#)))
    }

    fn transport_name(&self) -> &str {
        "gated"
    }
}

#[tokio::test]
async fn test_concurrent_stale_calls_each_fetch() {
    let transport = Arc::new(GatedTransport {
        gate: Barrier::new(2),
        calls: AtomicUsize::new(0),
    });
    let service = MetaService::new(Arc::clone(&transport) as Arc<dyn MetaTransport>);

    let (a, b) = tokio::join!(service.fetch_meta(false), service.fetch_meta(false));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    assert_ne!(a, b);

    let cached = service.cached().await.unwrap().document;
    assert!(Arc::ptr_eq(&cached, &a) || Arc::ptr_eq(&cached, &b));
}
