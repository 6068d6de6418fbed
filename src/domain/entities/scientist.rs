//! Scientist entity and its joined composites.

use crate::domain::entities::{Mission, Planet};
use crate::domain::validation::{require_not_blank, ValidationError};

/// A scientist who can be booked onto missions.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Scientist {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
}

/// Input data for creating a new scientist.
#[derive(Debug, Clone)]
pub struct NewScientist {
    pub name: String,
    pub field_of_study: String,
}

impl NewScientist {
    /// Runs field validators. Name uniqueness is left to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_not_blank("name", &self.name)?;
        require_not_blank("field_of_study", &self.field_of_study)?;
        Ok(())
    }
}

/// A scientist together with their missions, each joined with the destination planet.
#[derive(Debug, Clone)]
pub struct ScientistWithMissions {
    pub scientist: Scientist,
    pub missions: Vec<(Mission, Planet)>,
}
