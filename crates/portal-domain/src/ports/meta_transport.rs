//! Meta Transport Port
//!
//! Outbound retrieval used by the meta accessor. Implementations perform a
//! single `GET` without body or custom headers and report the raw status
//! and body; status checks and JSON decoding are left to the caller.

use crate::error::Result;
use async_trait::async_trait;

/// Raw reply from a transport request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Create a reply from a status and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used to fetch the public meta document
///
/// Errors returned here are network-level failures (connection refused,
/// timeout, ...). A response with any status is an `Ok` reply.
#[async_trait]
pub trait MetaTransport: Send + Sync {
    /// Issue a `GET` for `path`
    async fn get(&self, path: &str) -> Result<HttpReply>;

    /// Get the name of this transport
    fn transport_name(&self) -> &str;
}
