//! API route configuration.

use crate::api::handlers::{
    create_mission_handler, create_scientist_handler, mission_list_handler, planet_list_handler,
    scientist_list_handler,
};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Resource routes for the three entities.
///
/// # Endpoints
///
/// - `GET  /scientists`  - List scientists with their missions
/// - `POST /scientists`  - Register a scientist
/// - `GET  /planets`     - List planets with their missions
/// - `GET  /missions`    - List missions with both parents embedded
/// - `POST /missions`    - Book a mission
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/scientists",
            get(scientist_list_handler).post(create_scientist_handler),
        )
        .route("/planets", get(planet_list_handler))
        .route(
            "/missions",
            get(mission_list_handler).post(create_mission_handler),
        )
}
