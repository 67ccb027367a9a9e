//! mentis-lambda
//!
//! The diagnosis service: an axum router served through the Lambda HTTP
//! runtime. Exposed as a library so integration tests can run the router
//! on a local listener.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/getDiagnosis", post(routes::diagnosis::get_diagnosis))
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(cors)
        .with_state(state)
}
