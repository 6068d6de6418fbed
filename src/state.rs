//! Shared application state injected into HTTP handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{MissionService, PlanetService, ScientistService};
use crate::infrastructure::persistence::{
    SqliteMissionRepository, SqlitePlanetRepository, SqliteScientistRepository,
};

/// Planet service over the SQLite repositories.
pub type AppPlanetService = PlanetService<SqlitePlanetRepository, SqliteMissionRepository>;
/// Scientist service over the SQLite repositories.
pub type AppScientistService = ScientistService<SqliteScientistRepository, SqliteMissionRepository>;
/// Mission service over the SQLite repository.
pub type AppMissionService = MissionService<SqliteMissionRepository>;

/// Shared handles to the application services.
#[derive(Clone)]
pub struct AppState {
    pub planet_service: Arc<AppPlanetService>,
    pub scientist_service: Arc<AppScientistService>,
    pub mission_service: Arc<AppMissionService>,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let planet_repository = Arc::new(SqlitePlanetRepository::new(pool.clone()));
        let scientist_repository = Arc::new(SqliteScientistRepository::new(pool.clone()));
        let mission_repository = Arc::new(SqliteMissionRepository::new(pool));

        Self {
            planet_service: Arc::new(PlanetService::new(
                planet_repository,
                mission_repository.clone(),
            )),
            scientist_service: Arc::new(ScientistService::new(
                scientist_repository,
                mission_repository.clone(),
            )),
            mission_service: Arc::new(MissionService::new(mission_repository)),
        }
    }
}
