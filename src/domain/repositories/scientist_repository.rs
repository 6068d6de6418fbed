//! Repository trait for scientist data access.

use crate::domain::entities::{NewScientist, Scientist};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing scientists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteScientistRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScientistRepository: Send + Sync {
    /// Lists all scientists ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Scientist>, AppError>;

    /// Finds a scientist by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, AppError>;

    /// Inserts a new scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_scientist: NewScientist) -> Result<Scientist, AppError>;

    /// Deletes a scientist; the store cascades deletion of their missions.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if no scientist
    /// had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
