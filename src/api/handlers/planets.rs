//! Handlers for planet endpoints.

use axum::{extract::State, Json};

use crate::api::dto::planet::PlanetResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all planets with their missions.
///
/// # Endpoint
///
/// `GET /planets`
///
/// # Response
///
/// 200 OK with a JSON array; each planet embeds its missions, and each
/// embedded mission carries the boarding scientist but no planet edge.
pub async fn planet_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, AppError> {
    let planets = state.planet_service.list_planets().await?;

    Ok(Json(
        planets.into_iter().map(PlanetResponse::from).collect(),
    ))
}
