//! Route handlers
//!
//! `GET /forbidden` serves the notice for client-side routers; the 403
//! catcher serves the same markup for any route that fails an
//! authorization check elsewhere.

use crate::views::forbidden::{FORBIDDEN_MESSAGE, FORBIDDEN_TITLE};
use crate::views::ForbiddenView;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::{Request, State, catch, get};
use tracing::{error, warn};

/// Forbidden page handler
#[get("/forbidden")]
pub fn forbidden_page(view: &State<ForbiddenView>) -> RawHtml<String> {
    RawHtml(render_or_fallback(view.inner()))
}

/// Catcher for 403 responses
#[catch(403)]
pub fn forbidden_catcher(req: &Request<'_>) -> (Status, RawHtml<String>) {
    warn!(method = %req.method(), uri = %req.uri(), "Access denied");
    let html = match req.rocket().state::<ForbiddenView>() {
        Some(view) => render_or_fallback(view),
        None => fallback_html(),
    };
    (Status::Forbidden, RawHtml(html))
}

fn render_or_fallback(view: &ForbiddenView) -> String {
    view.render().unwrap_or_else(|e| {
        error!(error = %e, "Forbidden view failed to render");
        fallback_html()
    })
}

fn fallback_html() -> String {
    format!("<div><h2>{FORBIDDEN_TITLE}</h2><p>{FORBIDDEN_MESSAGE}</p></div>")
}
