//! Domain Port Interfaces
//!
//! Contracts implemented by outer layers.

pub mod meta_transport;

pub use meta_transport::{HttpReply, MetaTransport};
