//! Handlers for scientist endpoints.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::scientist::{CreateScientistRequest, ScientistResponse};
use crate::api::extract;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all scientists with their missions.
///
/// # Endpoint
///
/// `GET /scientists`
pub async fn scientist_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScientistResponse>>, AppError> {
    let scientists = state.scientist_service.list_scientists().await?;

    Ok(Json(
        scientists.into_iter().map(ScientistResponse::from).collect(),
    ))
}

/// Registers a new scientist.
///
/// # Endpoint
///
/// `POST /scientists`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "field_of_study": "Physics" }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` - blank name or field of study
/// - 400 `malformed_request` - unparseable body or missing keys
/// - 409 `conflict` - name already registered
pub async fn create_scientist_handler(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<CreateScientistRequest>,
) -> Result<(StatusCode, Json<ScientistResponse>), AppError> {
    payload.validate()?;

    let created = state
        .scientist_service
        .create_scientist(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
