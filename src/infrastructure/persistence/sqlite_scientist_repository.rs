//! SQLite implementation of scientist repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewScientist, Scientist};
use crate::domain::repositories::ScientistRepository;
use crate::error::AppError;

/// SQLite repository for scientist storage and retrieval.
pub struct SqliteScientistRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteScientistRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScientistRepository for SqliteScientistRepository {
    async fn list(&self) -> Result<Vec<Scientist>, AppError> {
        let scientists = sqlx::query_as::<_, Scientist>(
            "SELECT id, name, field_of_study FROM scientists ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(scientists)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Scientist>, AppError> {
        let scientist = sqlx::query_as::<_, Scientist>(
            "SELECT id, name, field_of_study FROM scientists WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(scientist)
    }

    async fn create(&self, new_scientist: NewScientist) -> Result<Scientist, AppError> {
        let scientist = sqlx::query_as::<_, Scientist>(
            r#"
            INSERT INTO scientists (name, field_of_study)
            VALUES (?, ?)
            RETURNING id, name, field_of_study
            "#,
        )
        .bind(new_scientist.name)
        .bind(new_scientist.field_of_study)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(scientist)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM scientists WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
