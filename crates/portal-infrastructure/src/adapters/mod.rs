//! Adapters
//!
//! Implementations of domain ports backed by external libraries.

pub mod http_meta_transport;

pub use http_meta_transport::ReqwestMetaTransport;
