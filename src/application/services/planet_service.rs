//! Planet listing and lifecycle service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewPlanet, Planet, PlanetWithMissions, Scientist};
use crate::domain::repositories::{MissionRepository, PlanetRepository};
use crate::error::AppError;

/// Service for listing planets and managing their lifecycle.
///
/// Planet creation and deletion have no HTTP endpoints; they are reached
/// through the admin CLI and the repository layer.
pub struct PlanetService<P: PlanetRepository, M: MissionRepository> {
    planet_repository: Arc<P>,
    mission_repository: Arc<M>,
}

impl<P: PlanetRepository, M: MissionRepository> PlanetService<P, M> {
    /// Creates a new planet service.
    pub fn new(planet_repository: Arc<P>, mission_repository: Arc<M>) -> Self {
        Self {
            planet_repository,
            mission_repository,
        }
    }

    /// Lists all planets, each with its missions and their boarding scientists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_planets(&self) -> Result<Vec<PlanetWithMissions>, AppError> {
        let planets = self.planet_repository.list().await?;

        let mut result = Vec::with_capacity(planets.len());
        for planet in planets {
            let missions = self.mission_repository.list_for_planet(planet.id).await?;
            result.push(PlanetWithMissions { planet, missions });
        }

        Ok(result)
    }

    /// Validates and persists a new planet.
    ///
    /// Field validators run before the insert; a failed validator prevents
    /// the commit. Name uniqueness is enforced by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a blank name or description.
    /// Returns [`AppError::Conflict`] if the name is already taken.
    pub async fn create_planet(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        new_planet.validate()?;
        self.planet_repository.create(new_planet).await
    }

    /// Deletes a planet; the store cascades deletion of its missions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no planet has the given id.
    pub async fn delete_planet(&self, id: i64) -> Result<(), AppError> {
        if !self.planet_repository.delete(id).await? {
            return Err(AppError::not_found("Planet not found", json!({ "id": id })));
        }
        Ok(())
    }

    /// Scientists booked onto this planet's missions, derived through the join.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no planet has the given id.
    pub async fn scientists_for_planet(&self, id: i64) -> Result<Vec<Scientist>, AppError> {
        if self.planet_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Planet not found", json!({ "id": id })));
        }
        self.mission_repository.scientists_for_planet(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockMissionRepository, MockPlanetRepository};

    fn test_planet(id: i64, name: &str) -> Planet {
        Planet {
            id,
            name: name.to_string(),
            description: "A planet".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_planet_success() {
        let mut planet_repo = MockPlanetRepository::new();
        let mission_repo = MockMissionRepository::new();

        let created = test_planet(1, "Mars");
        planet_repo
            .expect_create()
            .withf(|p| p.name == "Mars")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = PlanetService::new(Arc::new(planet_repo), Arc::new(mission_repo));

        let result = service
            .create_planet(NewPlanet {
                name: "Mars".to_string(),
                description: "The red planet".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Mars");
    }

    #[tokio::test]
    async fn test_create_planet_blank_name_skips_store() {
        let mut planet_repo = MockPlanetRepository::new();
        let mission_repo = MockMissionRepository::new();

        planet_repo.expect_create().times(0);

        let service = PlanetService::new(Arc::new(planet_repo), Arc::new(mission_repo));

        let result = service
            .create_planet(NewPlanet {
                name: "   ".to_string(),
                description: "The red planet".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_list_planets_joins_missions() {
        let mut planet_repo = MockPlanetRepository::new();
        let mut mission_repo = MockMissionRepository::new();

        planet_repo
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![test_planet(1, "Mars"), test_planet(2, "Venus")]));

        mission_repo
            .expect_list_for_planet()
            .times(2)
            .returning(|_| Ok(vec![]));

        let service = PlanetService::new(Arc::new(planet_repo), Arc::new(mission_repo));

        let planets = service.list_planets().await.unwrap();
        assert_eq!(planets.len(), 2);
        assert!(planets.iter().all(|p| p.missions.is_empty()));
    }

    #[tokio::test]
    async fn test_delete_planet_not_found() {
        let mut planet_repo = MockPlanetRepository::new();
        let mission_repo = MockMissionRepository::new();

        planet_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = PlanetService::new(Arc::new(planet_repo), Arc::new(mission_repo));

        let result = service.delete_planet(42).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_scientists_for_planet_requires_planet() {
        let mut planet_repo = MockPlanetRepository::new();
        let mut mission_repo = MockMissionRepository::new();

        planet_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));
        mission_repo.expect_scientists_for_planet().times(0);

        let service = PlanetService::new(Arc::new(planet_repo), Arc::new(mission_repo));

        let result = service.scientists_for_planet(42).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
