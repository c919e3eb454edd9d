use crate::error::PageError;
use askama::Template;
use axum::response::Html;

/// The home page template.
#[derive(Template)]
#[template(path = "demo_app/home.html")]
pub struct HomeTemplate {
    pub name: &'static str,
}

/// GET /home/ handler - Render the home page
///
/// Builds a fresh one-entry context per request and delegates rendering to
/// the template engine. Holds no state across invocations.
pub async fn home_handler() -> Result<Html<String>, PageError> {
    let page = HomeTemplate { name: "Home" };
    Ok(Html(page.render()?))
}
