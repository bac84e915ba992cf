//! Use cases

pub mod meta_service;

pub use meta_service::{CachedMeta, MetaService, MetaServiceInterface};
