//! Repository trait for mission data access.

use crate::domain::entities::{Mission, MissionDetail, NewMission, Planet, Scientist};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing missions and the relationships
/// derived through them.
///
/// Missions are the join entity between planets and scientists, so the
/// projected associations (a planet's scientists, a scientist's planets)
/// live here as read-only queries rather than stored state.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMissionRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mission.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Inserts a new mission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ForeignKey`] if `planet_id` or `scientist_id`
    /// does not reference an existing row.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_mission: NewMission) -> Result<Mission, AppError>;

    /// Finds a mission by id, joined with both parent rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_detail(&self, id: i64) -> Result<Option<MissionDetail>, AppError>;

    /// Lists all missions ordered by id, each joined with both parent rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_detailed(&self) -> Result<Vec<MissionDetail>, AppError>;

    /// Lists a planet's missions, each joined with the boarding scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_planet(&self, planet_id: i64)
        -> Result<Vec<(Mission, Scientist)>, AppError>;

    /// Lists a scientist's missions, each joined with the destination planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_scientist(
        &self,
        scientist_id: i64,
    ) -> Result<Vec<(Mission, Planet)>, AppError>;

    /// Projects the scientists booked onto a planet's missions, de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn scientists_for_planet(&self, planet_id: i64) -> Result<Vec<Scientist>, AppError>;

    /// Projects the planets a scientist is booked onto, de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn planets_for_scientist(&self, scientist_id: i64) -> Result<Vec<Planet>, AppError>;
}
