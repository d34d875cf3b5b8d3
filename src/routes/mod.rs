pub mod application_routes;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::AppState;

/// The full route table, including the JSON 404/405 fallbacks, so the binary
/// and the tests serve the same surface.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/applications",
            get(application_routes::list_applications)
                .post(application_routes::create_application)
                .fallback(application_routes::method_not_allowed),
        )
        .route(
            "/api/applications/:id",
            get(application_routes::get_application)
                .put(application_routes::update_application)
                .delete(application_routes::delete_application)
                .fallback(application_routes::method_not_allowed),
        )
        .route(
            "/api/status-options",
            get(application_routes::status_options)
                .fallback(application_routes::method_not_allowed),
        )
        .fallback(application_routes::endpoint_not_found)
}
