//! edgemore-server
//!
//! HTTP front door for estimate requests: `GET /health` and
//! `POST /submit-estimate`.

use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod form;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    // The estimate form is served from the marketing site's origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/submit-estimate", post(routes::estimates::submit_estimate))
        // Free-text fields have no length cap.
        .layer(DefaultBodyLimit::disable())
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
