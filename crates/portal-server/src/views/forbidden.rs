//! Forbidden view
//!
//! Static notice shown in place of a section the user may not view. The
//! view takes no input and performs no permission check; routers and
//! access-control wrappers decide when to show it.

use portal_domain::error::{Error, Result};
use serde::Serialize;
use tera::{Context, Tera};

const TPL_FORBIDDEN: &str = include_str!("templates/forbidden.html");
const TEMPLATE_NAME: &str = "forbidden.html";

/// Heading of the notice
pub const FORBIDDEN_TITLE: &str = "403 Forbidden";

/// Explanatory text of the notice
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to view this section.";

/// Fixed view model for the template
#[derive(Serialize)]
struct ForbiddenViewModel {
    title: &'static str,
    message: &'static str,
    padding: &'static str,
}

const VIEW_MODEL: ForbiddenViewModel = ForbiddenViewModel {
    title: FORBIDDEN_TITLE,
    message: FORBIDDEN_MESSAGE,
    padding: "2rem",
};

/// Renderer for the 403 notice
pub struct ForbiddenView {
    templates: Tera,
}

impl ForbiddenView {
    /// Register the embedded template
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TPL_FORBIDDEN)
            .map_err(|e| Error::template(format!("Failed to register {TEMPLATE_NAME}: {e}")))?;
        Ok(Self { templates: tera })
    }

    /// Render the notice as an HTML fragment
    pub fn render(&self) -> Result<String> {
        let context = Context::from_serialize(&VIEW_MODEL)
            .map_err(|e| Error::template(format!("Failed to build context: {e}")))?;
        self.templates.render(TEMPLATE_NAME, &context).map_err(|e| {
            tracing::error!("Template error: {}", e);
            Error::template(format!("Failed to render {TEMPLATE_NAME}: {e}"))
        })
    }
}
