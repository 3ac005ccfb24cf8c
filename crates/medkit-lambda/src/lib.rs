//! medkit-lambda
//!
//! HTTP surface for the tool catalog, served from AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

/// Build the router with all routes and layers applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/tools", get(routes::tools::list_tools))
        .route("/tools/{id}", get(routes::tools::get_tool_detail))
        .route("/tools/{id}/invoke", post(routes::tools::invoke_tool))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
