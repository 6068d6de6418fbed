//! DTOs for mission endpoints.
//!
//! Serialization of the bidirectional planet/scientist/mission graph is kept
//! acyclic with one distinct type per direction: a mission embedded in a
//! planet omits the planet edge, a mission embedded in a scientist omits the
//! scientist edge, and a top-level mission embeds only the summary form of
//! each parent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::planet::PlanetSummary;
use crate::api::dto::scientist::ScientistSummary;
use crate::domain::entities::{Mission, MissionDetail, NewMission, Planet, Scientist};

/// Request to book a new mission.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionRequest {
    /// Accepted for wire compatibility; missions have no name column.
    #[serde(default)]
    pub name: Option<String>,

    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,

    #[validate(range(min = 1, message = "mission duration must be positive"))]
    pub duration_days: i64,
}

impl From<CreateMissionRequest> for NewMission {
    fn from(req: CreateMissionRequest) -> Self {
        NewMission {
            planet_id: req.planet_id,
            scientist_id: req.scientist_id,
            mission_date: req.mission_date,
            duration_days: req.duration_days,
        }
    }
}

/// A mission embedded in a planet's missions list: no planet edge,
/// scientist embedded as a summary.
#[derive(Debug, Serialize)]
pub struct MissionInPlanet {
    pub id: i64,
    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,
    pub duration_days: i64,
    pub scientist: ScientistSummary,
}

impl From<(Mission, Scientist)> for MissionInPlanet {
    fn from((mission, scientist): (Mission, Scientist)) -> Self {
        Self {
            id: mission.id,
            planet_id: mission.planet_id,
            scientist_id: mission.scientist_id,
            mission_date: mission.mission_date,
            duration_days: mission.duration_days,
            scientist: scientist.into(),
        }
    }
}

/// A mission embedded in a scientist's missions list: no scientist edge,
/// planet embedded as a summary.
#[derive(Debug, Serialize)]
pub struct MissionInScientist {
    pub id: i64,
    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,
    pub duration_days: i64,
    pub planet: PlanetSummary,
}

impl From<(Mission, Planet)> for MissionInScientist {
    fn from((mission, planet): (Mission, Planet)) -> Self {
        Self {
            id: mission.id,
            planet_id: mission.planet_id,
            scientist_id: mission.scientist_id,
            mission_date: mission.mission_date,
            duration_days: mission.duration_days,
            planet: planet.into(),
        }
    }
}

/// A top-level mission, as returned by `GET /missions` and `POST /missions`.
#[derive(Debug, Serialize)]
pub struct MissionResponse {
    pub id: i64,
    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,
    pub duration_days: i64,
    pub planet: PlanetSummary,
    pub scientist: ScientistSummary,
}

impl From<MissionDetail> for MissionResponse {
    fn from(detail: MissionDetail) -> Self {
        Self {
            id: detail.mission.id,
            planet_id: detail.mission.planet_id,
            scientist_id: detail.mission.scientist_id,
            mission_date: detail.mission.mission_date,
            duration_days: detail.mission.duration_days,
            planet: detail.planet.into(),
            scientist: detail.scientist.into(),
        }
    }
}
