//! Application Layer - Portal
//!
//! Use cases built on top of the domain ports.
//!
//! ## Use Cases
//!
//! - [`MetaService`]: cached access to the public meta document
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `portal-domain`: for the transport port, document types and errors
//! - Pure Rust libraries for async and serialization

pub mod use_cases;

pub use use_cases::*;
