//! Mission entity, the join between a planet and a scientist.

use chrono::NaiveDate;

use crate::domain::entities::{Planet, Scientist};
use crate::domain::validation::{
    require_future_date, require_positive_duration, ValidationError,
};

/// A booked mission linking one planet and one scientist.
///
/// Missions do not exist independently of both parents; deleting either
/// parent removes the mission.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Mission {
    pub id: i64,
    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,
    pub duration_days: i64,
}

/// Input data for booking a new mission.
#[derive(Debug, Clone)]
pub struct NewMission {
    pub planet_id: i64,
    pub scientist_id: i64,
    pub mission_date: NaiveDate,
    pub duration_days: i64,
}

impl NewMission {
    /// Runs field validators against the given calendar date.
    ///
    /// Whether the referenced planet and scientist exist is left to the
    /// store's foreign-key checks at commit time.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        require_positive_duration(self.duration_days)?;
        require_future_date(self.mission_date, today)?;
        Ok(())
    }
}

/// A mission joined with both of its parent rows.
#[derive(Debug, Clone)]
pub struct MissionDetail {
    pub mission: Mission,
    pub planet: Planet,
    pub scientist: Scientist,
}
