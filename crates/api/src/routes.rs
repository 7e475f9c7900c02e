//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Builds the application router.
///
/// Generated reports are served from the service's reports directory under
/// `/reports`. With no `allowed_origin` any origin may call the API.
pub fn create_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let reports = ServeDir::new(state.scenarios.reports_dir());

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(handlers::openapi_spec))
        .route("/simulate", post(handlers::simulate))
        .route(
            "/scenarios",
            get(handlers::list_scenarios).post(handlers::save_scenario),
        )
        .route(
            "/scenarios/{id}",
            get(handlers::get_scenario).delete(handlers::delete_scenario),
        )
        .route("/report/generate", post(handlers::generate_report))
        .nest_service("/reports", reports)
        .layer(cors_layer(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let Some(origin) = allowed_origin else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        Err(e) => {
            warn!(origin, error = %e, "ignoring invalid frontend origin");
            CorsLayer::new()
        }
    }
}
