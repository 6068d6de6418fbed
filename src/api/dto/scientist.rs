//! DTOs for scientist endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::mission::MissionInScientist;
use crate::api::dto::not_blank;
use crate::domain::entities::{NewScientist, Scientist, ScientistWithMissions};

/// Request to register a new scientist.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScientistRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "not_blank"))]
    pub field_of_study: String,
}

impl From<CreateScientistRequest> for NewScientist {
    fn from(req: CreateScientistRequest) -> Self {
        NewScientist {
            name: req.name,
            field_of_study: req.field_of_study,
        }
    }
}

/// A scientist without their missions list, for embedding inside a mission.
///
/// This is the reverse-edge cut that keeps serialization acyclic: a mission
/// embeds this form, never [`ScientistResponse`].
#[derive(Debug, Serialize)]
pub struct ScientistSummary {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

impl From<Scientist> for ScientistSummary {
    fn from(scientist: Scientist) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
        }
    }
}

/// A scientist with their missions, as returned by `GET /scientists`
/// and `POST /scientists`.
#[derive(Debug, Serialize)]
pub struct ScientistResponse {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<MissionInScientist>,
}

impl From<ScientistWithMissions> for ScientistResponse {
    fn from(s: ScientistWithMissions) -> Self {
        Self {
            id: s.scientist.id,
            name: s.scientist.name,
            field_of_study: s.scientist.field_of_study,
            missions: s
                .missions
                .into_iter()
                .map(MissionInScientist::from)
                .collect(),
        }
    }
}
