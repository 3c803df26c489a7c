//! flonotes-lambda
//!
//! HTTP surface for the FloNotes demo, served from AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Form vocabulary
        .route("/catalog", get(routes::catalog::get_catalog))
        .route("/session/default", get(routes::prompt::default_session))
        // Prompt compilation and note generation
        .route("/prompt", post(routes::prompt::compile_prompt))
        .route("/api/generateNote", post(routes::notes::generate_note))
        .route("/demo/generate", post(routes::notes::generate_from_session))
        .route("/notes", post(routes::notes::save_note))
        .layer(axum_mw::from_fn(middleware::request_log))
        .layer(cors)
        .with_state(state)
}
