//! Router configuration

use portal_domain::error::Result;
use portal_infrastructure::config::ServerConfig;
use rocket::{Build, Catcher, Rocket, Route, catchers, routes};

use super::handlers;
use crate::views::ForbiddenView;

/// Get routes for mounting in a parent Rocket instance
///
/// Routes:
/// - GET `/forbidden` - Forbidden notice
pub fn portal_routes() -> Vec<Route> {
    routes![handlers::forbidden_page]
}

/// Get catchers for registering in a parent Rocket instance
///
/// The 403 catcher needs a managed [`ForbiddenView`].
pub fn portal_catchers() -> Vec<Catcher> {
    catchers![handlers::forbidden_catcher]
}

/// Create the portal rocket instance bound to the configured address
pub fn portal_rocket(config: &ServerConfig) -> Result<Rocket<Build>> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));

    Ok(rocket::custom(figment)
        .manage(ForbiddenView::new()?)
        .mount("/", portal_routes())
        .register("/", portal_catchers()))
}
