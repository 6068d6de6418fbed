//! Handlers for mission endpoints.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::mission::{CreateMissionRequest, MissionResponse};
use crate::api::extract;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all missions, each with its planet and scientist embedded.
///
/// # Endpoint
///
/// `GET /missions`
pub async fn mission_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MissionResponse>>, AppError> {
    let missions = state.mission_service.list_missions().await?;

    Ok(Json(
        missions.into_iter().map(MissionResponse::from).collect(),
    ))
}

/// Books a new mission.
///
/// # Endpoint
///
/// `POST /missions`
///
/// # Request Body
///
/// ```json
/// {
///   "planet_id": 1,
///   "scientist_id": 2,
///   "mission_date": "2030-01-15",
///   "duration_days": 14
/// }
/// ```
///
/// A `name` key is accepted and ignored.
///
/// # Errors
///
/// - 400 `validation_error` - non-positive duration or a date not
///   strictly in the future
/// - 400 `malformed_request` - unparseable body or missing keys
/// - 422 `foreign_key_violation` - unknown planet or scientist id
pub async fn create_mission_handler(
    State(state): State<AppState>,
    extract::Json(payload): extract::Json<CreateMissionRequest>,
) -> Result<(StatusCode, Json<MissionResponse>), AppError> {
    payload.validate()?;

    let booked = state.mission_service.create_mission(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(booked.into())))
}
