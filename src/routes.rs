//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`            - Welcome message
//! - `GET /scientists`  - List scientists
//! - `POST /scientists` - Register a scientist
//! - `GET /planets`     - List planets
//! - `GET /missions`    - List missions
//! - `POST /missions`   - Book a mission
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::home_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .merge(api::routes::resource_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
