//! Repository trait for planet data access.

use crate::domain::entities::{NewPlanet, Planet};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing planets.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePlanetRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_planet.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// Lists all planets ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Planet>, AppError>;

    /// Finds a planet by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Planet))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError>;

    /// Inserts a new planet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError>;

    /// Deletes a planet; the store cascades deletion of its missions.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if no planet
    /// had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
