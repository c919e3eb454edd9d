use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::routes;

/// Build the site router.
///
/// A static table of literal paths; anything unregistered falls through to
/// the framework's 404.
pub fn router() -> Router {
    Router::new()
        .route(routes::HOME, get(handlers::home_handler))
        .route(routes::ABOUT, get(handlers::about_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn status_for(path: &str) -> StatusCode {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_registered_paths_match() {
        assert_eq!(status_for("/home/").await, StatusCode::OK);
        assert_eq!(status_for("/about/").await, StatusCode::OK);
        assert_eq!(status_for("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unregistered_paths_are_not_found() {
        assert_eq!(status_for("/").await, StatusCode::NOT_FOUND);
        assert_eq!(status_for("/contact/").await, StatusCode::NOT_FOUND);
        assert_eq!(status_for("/home/extra").await, StatusCode::NOT_FOUND);
        // Exact literal match only, no trailing-slash redirect
        assert_eq!(status_for("/home").await, StatusCode::NOT_FOUND);
        assert_eq!(status_for("/about").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_reverse_lookup_resolves_registered_paths() {
        // Names round-trip to paths the router actually serves
        for name in ["home", "about"] {
            let path = crate::routes::reverse(name).unwrap();
            assert_eq!(status_for(path).await, StatusCode::OK);
        }
    }
}
