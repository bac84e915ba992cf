//! Views
//!
//! Server-rendered pages. Templates are embedded at compile time so the
//! binary is self-contained.

pub mod forbidden;

pub use forbidden::ForbiddenView;
