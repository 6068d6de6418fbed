//! SQLite implementation of planet repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewPlanet, Planet};
use crate::domain::repositories::PlanetRepository;
use crate::error::AppError;

/// SQLite repository for planet storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct SqlitePlanetRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePlanetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetRepository for SqlitePlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        let planets = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description FROM planets ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(planets)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Planet>, AppError> {
        let planet = sqlx::query_as::<_, Planet>(
            "SELECT id, name, description FROM planets WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn create(&self, new_planet: NewPlanet) -> Result<Planet, AppError> {
        let planet = sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(new_planet.name)
        .bind(new_planet.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(planet)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM planets WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
