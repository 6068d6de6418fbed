//! DTOs for planet endpoints.

use serde::Serialize;

use crate::api::dto::mission::MissionInPlanet;
use crate::domain::entities::{Planet, PlanetWithMissions};

/// A planet without its missions list, for embedding inside a mission.
///
/// This is the reverse-edge cut that keeps serialization acyclic: a mission
/// embeds this form, never [`PlanetResponse`].
#[derive(Debug, Serialize)]
pub struct PlanetSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Planet> for PlanetSummary {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            description: planet.description,
        }
    }
}

/// A planet with its missions, as returned by `GET /planets`.
#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub missions: Vec<MissionInPlanet>,
}

impl From<PlanetWithMissions> for PlanetResponse {
    fn from(p: PlanetWithMissions) -> Self {
        Self {
            id: p.planet.id,
            name: p.planet.name,
            description: p.planet.description,
            missions: p.missions.into_iter().map(MissionInPlanet::from).collect(),
        }
    }
}
