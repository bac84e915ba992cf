//! # Domain Layer
//!
//! Core types shared by every other layer of the portal.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Registry labels, meta endpoint path, cache TTL |
//! | [`value_objects`] | [`ServiceType`] and the [`PublicMeta`] document view |
//! | [`ports`] | Transport contract used to fetch the public meta document |
//! | [`error`] | Domain [`Error`] and [`Result`] alias |
//!
//! This crate has no knowledge of HTTP clients, templates, or configuration
//! files; those live in the infrastructure and server crates.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use constants::*;
pub use error::{Error, Result};
pub use ports::{HttpReply, MetaTransport};
pub use value_objects::{MetaDocument, PublicMeta, ServiceType, normalize_service_type};
