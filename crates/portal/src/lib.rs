//! # Portal
//!
//! Facade over the portal workspace.
//!
//! - **Service-type registry**: [`domain::SERVICE_TYPES`] and [`domain::ServiceType`]
//! - **Public meta client**: [`application::MetaService`], cached for 30 s
//! - **Forbidden view**: [`server::ForbiddenView`] and the Rocket 403 catcher
//!
//! ## Example
//!
//! ```ignore
//! use portal::application::MetaServiceInterface;
//! use portal::infrastructure::{AppContext, config::ConfigLoader};
//!
//! let context = AppContext::new(ConfigLoader::new().load()?)?;
//! let meta = context.meta_service().fetch_meta(false).await?;
//! ```

/// Domain layer - registry, document types, ports
pub mod domain {
    pub use portal_domain::*;
}

/// Application layer - cached meta accessor
pub mod application {
    pub use portal_application::*;
}

/// Infrastructure layer - config, logging, bootstrap
pub mod infrastructure {
    pub use portal_infrastructure::*;
}

/// Server layer - views and routes
pub mod server {
    pub use portal_server::*;
}
