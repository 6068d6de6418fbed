//! DTO for the welcome endpoint.

use serde::Serialize;

/// Welcome payload returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}
