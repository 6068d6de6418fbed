//! Mission booking service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{MissionDetail, NewMission};
use crate::domain::repositories::MissionRepository;
use crate::error::AppError;

/// Service for booking missions and listing them with their parent rows.
pub struct MissionService<M: MissionRepository> {
    mission_repository: Arc<M>,
}

impl<M: MissionRepository> MissionService<M> {
    /// Creates a new mission service.
    pub fn new(mission_repository: Arc<M>) -> Self {
        Self { mission_repository }
    }

    /// Lists all missions, each joined with its planet and scientist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_missions(&self) -> Result<Vec<MissionDetail>, AppError> {
        self.mission_repository.list_detailed().await
    }

    /// Validates and books a new mission, returning it joined with both parents.
    ///
    /// Field validators run against today's UTC date before the insert; a
    /// failed validator prevents the commit. Whether the referenced planet
    /// and scientist exist is enforced by the store's foreign keys at
    /// commit time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the duration is not positive or
    /// the date is not strictly in the future.
    /// Returns [`AppError::ForeignKey`] if either parent id does not exist.
    pub async fn create_mission(&self, new_mission: NewMission) -> Result<MissionDetail, AppError> {
        new_mission.validate(Utc::now().date_naive())?;

        let mission = self.mission_repository.create(new_mission).await?;

        self.mission_repository
            .find_detail(mission.id)
            .await?
            .ok_or_else(|| {
                AppError::internal("Booked mission vanished", json!({ "id": mission.id }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Mission, Planet, Scientist};
    use crate::domain::repositories::MockMissionRepository;
    use chrono::{Duration, NaiveDate, Utc};

    fn future_date() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(30)
    }

    fn test_detail(id: i64) -> MissionDetail {
        MissionDetail {
            mission: Mission {
                id,
                planet_id: 1,
                scientist_id: 1,
                mission_date: future_date(),
                duration_days: 14,
            },
            planet: Planet {
                id: 1,
                name: "Mars".to_string(),
                description: "The red planet".to_string(),
            },
            scientist: Scientist {
                id: 1,
                name: "Ada".to_string(),
                field_of_study: "Physics".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_mission_success() {
        let mut mission_repo = MockMissionRepository::new();

        mission_repo.expect_create().times(1).returning(|new| {
            Ok(Mission {
                id: 7,
                planet_id: new.planet_id,
                scientist_id: new.scientist_id,
                mission_date: new.mission_date,
                duration_days: new.duration_days,
            })
        });
        mission_repo
            .expect_find_detail()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(Some(test_detail(7))));

        let service = MissionService::new(Arc::new(mission_repo));

        let result = service
            .create_mission(NewMission {
                planet_id: 1,
                scientist_id: 1,
                mission_date: future_date(),
                duration_days: 14,
            })
            .await;

        assert!(result.is_ok());
        let detail = result.unwrap();
        assert_eq!(detail.mission.id, 7);
        assert_eq!(detail.planet.name, "Mars");
        assert_eq!(detail.scientist.name, "Ada");
    }

    #[tokio::test]
    async fn test_create_mission_zero_duration_skips_store() {
        let mut mission_repo = MockMissionRepository::new();
        mission_repo.expect_create().times(0);

        let service = MissionService::new(Arc::new(mission_repo));

        let result = service
            .create_mission(NewMission {
                planet_id: 1,
                scientist_id: 1,
                mission_date: future_date(),
                duration_days: 0,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_mission_today_skips_store() {
        let mut mission_repo = MockMissionRepository::new();
        mission_repo.expect_create().times(0);

        let service = MissionService::new(Arc::new(mission_repo));

        let result = service
            .create_mission(NewMission {
                planet_id: 1,
                scientist_id: 1,
                mission_date: Utc::now().date_naive(),
                duration_days: 14,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_mission_missing_parent_propagates_foreign_key() {
        let mut mission_repo = MockMissionRepository::new();

        mission_repo.expect_create().times(1).returning(|_| {
            Err(AppError::foreign_key(
                "Referenced row does not exist",
                json!({}),
            ))
        });
        mission_repo.expect_find_detail().times(0);

        let service = MissionService::new(Arc::new(mission_repo));

        let result = service
            .create_mission(NewMission {
                planet_id: 999,
                scientist_id: 1,
                mission_date: future_date(),
                duration_days: 14,
            })
            .await;

        assert!(matches!(result, Err(AppError::ForeignKey { .. })));
    }
}
