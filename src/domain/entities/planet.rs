//! Planet entity and its joined composites.

use crate::domain::entities::{Mission, Scientist};
use crate::domain::validation::{require_not_blank, ValidationError};

/// A destination planet.
///
/// Owns a collection of missions; deleting a planet cascades deletion of
/// its missions at the store level.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Input data for creating a new planet.
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub description: String,
}

impl NewPlanet {
    /// Runs field validators. Name uniqueness is left to the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_not_blank("name", &self.name)?;
        require_not_blank("description", &self.description)?;
        Ok(())
    }
}

/// A planet together with its missions, each joined with the boarding scientist.
#[derive(Debug, Clone)]
pub struct PlanetWithMissions {
    pub planet: Planet,
    pub missions: Vec<(Mission, Scientist)>,
}
