//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. One serialization type exists per traversal
//! direction of the planet/mission/scientist graph, so the cycle-safe
//! contract is enforced by the type system rather than by exclusion rules.

pub mod home;
pub mod mission;
pub mod planet;
pub mod scientist;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings at the request boundary.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
