use crate::error::PageError;
use askama::Template;
use axum::response::Html;

/// The about page template.
#[derive(Template)]
#[template(path = "demo_app/about.html")]
pub struct AboutTemplate {
    pub name: &'static str,
}

/// GET /about/ handler - Render the about page
pub async fn about_handler() -> Result<Html<String>, PageError> {
    let page = AboutTemplate { name: "About" };
    Ok(Html(page.render()?))
}
