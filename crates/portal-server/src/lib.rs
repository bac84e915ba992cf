//! # Portal Server
//!
//! Server-rendered views and the Rocket instance that serves them.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`views`] | Tera-rendered pages ([`ForbiddenView`]) |
//! | [`routes`] | Rocket routes and the 403 catcher |
//! | [`init`] | Config + logging bootstrap and server launch |

pub mod init;
pub mod routes;
pub mod views;

pub use init::run_server;
pub use routes::{portal_catchers, portal_rocket, portal_routes};
pub use views::ForbiddenView;
