//! Field-level validation for entity construction.
//!
//! Validators run before the insert that would persist the entity; a failed
//! validator prevents that insert. Uniqueness and foreign-key constraints are
//! not checked here — the store reports those at commit time.

use chrono::NaiveDate;
use serde_json::json;

use crate::error::AppError;

/// A violated field-level contract.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Blank(&'static str),
    #[error("mission duration must be positive")]
    NonPositiveDuration,
    #[error("mission date must be in the future")]
    DateNotInFuture,
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        let field = match &e {
            ValidationError::Blank(field) => *field,
            ValidationError::NonPositiveDuration => "duration_days",
            ValidationError::DateNotInFuture => "mission_date",
        };
        AppError::bad_request(e.to_string(), json!({ "field": field }))
    }
}

/// Rejects empty and whitespace-only strings.
pub fn require_not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(())
}

/// Rejects durations of zero days or less.
pub fn require_positive_duration(duration_days: i64) -> Result<(), ValidationError> {
    if duration_days <= 0 {
        return Err(ValidationError::NonPositiveDuration);
    }
    Ok(())
}

/// Rejects mission dates on or before `today`.
pub fn require_future_date(mission_date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if mission_date <= today {
        return Err(ValidationError::DateNotInFuture);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_not_blank() {
        assert!(require_not_blank("name", "Ada").is_ok());
        assert_eq!(
            require_not_blank("name", ""),
            Err(ValidationError::Blank("name"))
        );
        assert_eq!(
            require_not_blank("name", "   "),
            Err(ValidationError::Blank("name"))
        );
        assert_eq!(
            require_not_blank("name", "\t\n"),
            Err(ValidationError::Blank("name"))
        );
    }

    #[test]
    fn test_require_positive_duration() {
        assert!(require_positive_duration(1).is_ok());
        assert!(require_positive_duration(365).is_ok());
        assert_eq!(
            require_positive_duration(0),
            Err(ValidationError::NonPositiveDuration)
        );
        assert_eq!(
            require_positive_duration(-3),
            Err(ValidationError::NonPositiveDuration)
        );
    }

    #[test]
    fn test_require_future_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();

        let tomorrow = today.succ_opt().unwrap();
        assert!(require_future_date(tomorrow, today).is_ok());

        assert_eq!(
            require_future_date(today, today),
            Err(ValidationError::DateNotInFuture)
        );

        let yesterday = today.pred_opt().unwrap();
        assert_eq!(
            require_future_date(yesterday, today),
            Err(ValidationError::DateNotInFuture)
        );
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err: AppError = ValidationError::Blank("field_of_study").into();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
