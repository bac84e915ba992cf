//! HTTP routes
//!
//! Rocket routes and catchers serving the portal views.

pub mod handlers;
pub mod router;

pub use router::{portal_catchers, portal_rocket, portal_routes};
