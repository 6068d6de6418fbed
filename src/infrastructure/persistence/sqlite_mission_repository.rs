//! SQLite implementation of mission repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Mission, MissionDetail, NewMission, Planet, Scientist};
use crate::domain::repositories::MissionRepository;
use crate::error::AppError;

/// SQLite repository for mission storage and join projections.
pub struct SqliteMissionRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMissionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Mission row joined with both parent rows.
#[derive(sqlx::FromRow)]
struct MissionDetailRow {
    id: i64,
    planet_id: i64,
    scientist_id: i64,
    mission_date: NaiveDate,
    duration_days: i64,
    planet_name: String,
    planet_description: String,
    scientist_name: String,
    scientist_field_of_study: String,
}

impl From<MissionDetailRow> for MissionDetail {
    fn from(row: MissionDetailRow) -> Self {
        MissionDetail {
            mission: Mission {
                id: row.id,
                planet_id: row.planet_id,
                scientist_id: row.scientist_id,
                mission_date: row.mission_date,
                duration_days: row.duration_days,
            },
            planet: Planet {
                id: row.planet_id,
                name: row.planet_name,
                description: row.planet_description,
            },
            scientist: Scientist {
                id: row.scientist_id,
                name: row.scientist_name,
                field_of_study: row.scientist_field_of_study,
            },
        }
    }
}

/// Mission row joined with the boarding scientist.
#[derive(sqlx::FromRow)]
struct MissionScientistRow {
    id: i64,
    planet_id: i64,
    scientist_id: i64,
    mission_date: NaiveDate,
    duration_days: i64,
    scientist_name: String,
    scientist_field_of_study: String,
}

impl From<MissionScientistRow> for (Mission, Scientist) {
    fn from(row: MissionScientistRow) -> Self {
        (
            Mission {
                id: row.id,
                planet_id: row.planet_id,
                scientist_id: row.scientist_id,
                mission_date: row.mission_date,
                duration_days: row.duration_days,
            },
            Scientist {
                id: row.scientist_id,
                name: row.scientist_name,
                field_of_study: row.scientist_field_of_study,
            },
        )
    }
}

/// Mission row joined with the destination planet.
#[derive(sqlx::FromRow)]
struct MissionPlanetRow {
    id: i64,
    planet_id: i64,
    scientist_id: i64,
    mission_date: NaiveDate,
    duration_days: i64,
    planet_name: String,
    planet_description: String,
}

impl From<MissionPlanetRow> for (Mission, Planet) {
    fn from(row: MissionPlanetRow) -> Self {
        (
            Mission {
                id: row.id,
                planet_id: row.planet_id,
                scientist_id: row.scientist_id,
                mission_date: row.mission_date,
                duration_days: row.duration_days,
            },
            Planet {
                id: row.planet_id,
                name: row.planet_name,
                description: row.planet_description,
            },
        )
    }
}

#[async_trait]
impl MissionRepository for SqliteMissionRepository {
    async fn create(&self, new_mission: NewMission) -> Result<Mission, AppError> {
        let mission = sqlx::query_as::<_, Mission>(
            r#"
            INSERT INTO missions (planet_id, scientist_id, mission_date, duration_days)
            VALUES (?, ?, ?, ?)
            RETURNING id, planet_id, scientist_id, mission_date, duration_days
            "#,
        )
        .bind(new_mission.planet_id)
        .bind(new_mission.scientist_id)
        .bind(new_mission.mission_date)
        .bind(new_mission.duration_days)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mission)
    }

    async fn find_detail(&self, id: i64) -> Result<Option<MissionDetail>, AppError> {
        let row = sqlx::query_as::<_, MissionDetailRow>(
            r#"
            SELECT m.id, m.planet_id, m.scientist_id, m.mission_date, m.duration_days,
                   p.name AS planet_name, p.description AS planet_description,
                   s.name AS scientist_name, s.field_of_study AS scientist_field_of_study
            FROM missions m
            JOIN planets p ON p.id = m.planet_id
            JOIN scientists s ON s.id = m.scientist_id
            WHERE m.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MissionDetail::from))
    }

    async fn list_detailed(&self) -> Result<Vec<MissionDetail>, AppError> {
        let rows = sqlx::query_as::<_, MissionDetailRow>(
            r#"
            SELECT m.id, m.planet_id, m.scientist_id, m.mission_date, m.duration_days,
                   p.name AS planet_name, p.description AS planet_description,
                   s.name AS scientist_name, s.field_of_study AS scientist_field_of_study
            FROM missions m
            JOIN planets p ON p.id = m.planet_id
            JOIN scientists s ON s.id = m.scientist_id
            ORDER BY m.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MissionDetail::from).collect())
    }

    async fn list_for_planet(
        &self,
        planet_id: i64,
    ) -> Result<Vec<(Mission, Scientist)>, AppError> {
        let rows = sqlx::query_as::<_, MissionScientistRow>(
            r#"
            SELECT m.id, m.planet_id, m.scientist_id, m.mission_date, m.duration_days,
                   s.name AS scientist_name, s.field_of_study AS scientist_field_of_study
            FROM missions m
            JOIN scientists s ON s.id = m.scientist_id
            WHERE m.planet_id = ?
            ORDER BY m.id
            "#,
        )
        .bind(planet_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_scientist(
        &self,
        scientist_id: i64,
    ) -> Result<Vec<(Mission, Planet)>, AppError> {
        let rows = sqlx::query_as::<_, MissionPlanetRow>(
            r#"
            SELECT m.id, m.planet_id, m.scientist_id, m.mission_date, m.duration_days,
                   p.name AS planet_name, p.description AS planet_description
            FROM missions m
            JOIN planets p ON p.id = m.planet_id
            WHERE m.scientist_id = ?
            ORDER BY m.id
            "#,
        )
        .bind(scientist_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn scientists_for_planet(&self, planet_id: i64) -> Result<Vec<Scientist>, AppError> {
        let scientists = sqlx::query_as::<_, Scientist>(
            r#"
            SELECT DISTINCT s.id, s.name, s.field_of_study
            FROM scientists s
            JOIN missions m ON m.scientist_id = s.id
            WHERE m.planet_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(planet_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(scientists)
    }

    async fn planets_for_scientist(&self, scientist_id: i64) -> Result<Vec<Planet>, AppError> {
        let planets = sqlx::query_as::<_, Planet>(
            r#"
            SELECT DISTINCT p.id, p.name, p.description
            FROM planets p
            JOIN missions m ON m.planet_id = p.id
            WHERE m.scientist_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(scientist_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(planets)
    }
}
