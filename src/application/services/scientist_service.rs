//! Scientist registration and lifecycle service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewScientist, Planet, Scientist, ScientistWithMissions};
use crate::domain::repositories::{MissionRepository, ScientistRepository};
use crate::error::AppError;

/// Service for registering scientists and listing them with their missions.
pub struct ScientistService<S: ScientistRepository, M: MissionRepository> {
    scientist_repository: Arc<S>,
    mission_repository: Arc<M>,
}

impl<S: ScientistRepository, M: MissionRepository> ScientistService<S, M> {
    /// Creates a new scientist service.
    pub fn new(scientist_repository: Arc<S>, mission_repository: Arc<M>) -> Self {
        Self {
            scientist_repository,
            mission_repository,
        }
    }

    /// Lists all scientists, each with their missions and destination planets.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_scientists(&self) -> Result<Vec<ScientistWithMissions>, AppError> {
        let scientists = self.scientist_repository.list().await?;

        let mut result = Vec::with_capacity(scientists.len());
        for scientist in scientists {
            let missions = self
                .mission_repository
                .list_for_scientist(scientist.id)
                .await?;
            result.push(ScientistWithMissions {
                scientist,
                missions,
            });
        }

        Ok(result)
    }

    /// Validates and persists a new scientist, returning them with their
    /// (empty) missions list.
    ///
    /// Field validators run before the insert; a failed validator prevents
    /// the commit. Name uniqueness is enforced by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a blank name or field of study.
    /// Returns [`AppError::Conflict`] if the name is already taken.
    pub async fn create_scientist(
        &self,
        new_scientist: NewScientist,
    ) -> Result<ScientistWithMissions, AppError> {
        new_scientist.validate()?;
        let scientist = self.scientist_repository.create(new_scientist).await?;
        Ok(ScientistWithMissions {
            scientist,
            missions: Vec::new(),
        })
    }

    /// Deletes a scientist; the store cascades deletion of their missions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no scientist has the given id.
    pub async fn delete_scientist(&self, id: i64) -> Result<(), AppError> {
        if !self.scientist_repository.delete(id).await? {
            return Err(AppError::not_found(
                "Scientist not found",
                json!({ "id": id }),
            ));
        }
        Ok(())
    }

    /// Planets this scientist is booked onto, derived through the join.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no scientist has the given id.
    pub async fn planets_for_scientist(&self, id: i64) -> Result<Vec<Planet>, AppError> {
        if self.scientist_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(
                "Scientist not found",
                json!({ "id": id }),
            ));
        }
        self.mission_repository.planets_for_scientist(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockMissionRepository, MockScientistRepository};
    use serde_json::json;

    fn test_scientist(id: i64, name: &str) -> Scientist {
        Scientist {
            id,
            name: name.to_string(),
            field_of_study: "Physics".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_scientist_success() {
        let mut scientist_repo = MockScientistRepository::new();
        let mission_repo = MockMissionRepository::new();

        let created = test_scientist(1, "Ada");
        scientist_repo
            .expect_create()
            .withf(|s| s.name == "Ada" && s.field_of_study == "Physics")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = ScientistService::new(Arc::new(scientist_repo), Arc::new(mission_repo));

        let result = service
            .create_scientist(NewScientist {
                name: "Ada".to_string(),
                field_of_study: "Physics".to_string(),
            })
            .await;

        assert!(result.is_ok());
        let with_missions = result.unwrap();
        assert_eq!(with_missions.scientist.name, "Ada");
        assert!(with_missions.missions.is_empty());
    }

    #[tokio::test]
    async fn test_create_scientist_blank_name_skips_store() {
        let mut scientist_repo = MockScientistRepository::new();
        let mission_repo = MockMissionRepository::new();

        scientist_repo.expect_create().times(0);

        let service = ScientistService::new(Arc::new(scientist_repo), Arc::new(mission_repo));

        let result = service
            .create_scientist(NewScientist {
                name: "".to_string(),
                field_of_study: "Physics".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_scientist_blank_field_of_study_skips_store() {
        let mut scientist_repo = MockScientistRepository::new();
        let mission_repo = MockMissionRepository::new();

        scientist_repo.expect_create().times(0);

        let service = ScientistService::new(Arc::new(scientist_repo), Arc::new(mission_repo));

        let result = service
            .create_scientist(NewScientist {
                name: "Ada".to_string(),
                field_of_study: "  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_scientist_duplicate_name_propagates_conflict() {
        let mut scientist_repo = MockScientistRepository::new();
        let mission_repo = MockMissionRepository::new();

        scientist_repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "uq_scientists_name" }),
            ))
        });

        let service = ScientistService::new(Arc::new(scientist_repo), Arc::new(mission_repo));

        let result = service
            .create_scientist(NewScientist {
                name: "Ada".to_string(),
                field_of_study: "Physics".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_scientists_joins_missions() {
        let mut scientist_repo = MockScientistRepository::new();
        let mut mission_repo = MockMissionRepository::new();

        scientist_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![test_scientist(1, "Ada")]));

        mission_repo
            .expect_list_for_scientist()
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ScientistService::new(Arc::new(scientist_repo), Arc::new(mission_repo));

        let scientists = service.list_scientists().await.unwrap();
        assert_eq!(scientists.len(), 1);
        assert!(scientists[0].missions.is_empty());
    }
}
