//! Handler for the welcome endpoint.

use axum::Json;

use crate::api::dto::home::HomeResponse;

/// Returns the service welcome message.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Interplanetary Booking System!".to_string(),
    })
}
