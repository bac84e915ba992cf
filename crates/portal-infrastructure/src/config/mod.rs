//! Configuration
//!
//! Typed configuration and the figment loader that fills it.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
