//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `HotelService`.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Hotel resource routes.
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied; the caller provides the state.
pub(crate) fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hotels",
            get(handlers::hotels::index).post(handlers::hotels::store),
        )
        .route(
            "/hotels/{id}",
            get(handlers::hotels::show)
                .put(handlers::hotels::update)
                .patch(handlers::hotels::update)
                .delete(handlers::hotels::destroy),
        )
}

/// Create the main Axum router with all routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(hotel_routes().with_state(state))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
