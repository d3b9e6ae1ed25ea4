//! PostgreSQL implementation of the star repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Star;
use crate::domain::repositories::StarRepository;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for stars.
///
/// Rows live in the `stars` table; ids come from its `BIGSERIAL` sequence.
pub struct PgStarRepository {
    pool: Arc<PgPool>,
}

impl PgStarRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn insert(&self, star: &Star) -> Result<Star, AppError> {
        let row = sqlx::query_as::<_, Star>(
            r#"
            INSERT INTO stars (name, distance)
            VALUES ($1, $2)
            RETURNING id, name, distance
            "#,
        )
        .bind(&star.name)
        .bind(star.distance)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl StarRepository for PgStarRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Star>, AppError> {
        let row = sqlx::query_as::<_, Star>(
            r#"
            SELECT id, name, distance
            FROM stars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn save(&self, star: Star) -> Result<Star, AppError> {
        let Some(id) = star.id else {
            return self.insert(&star).await;
        };

        let row = sqlx::query_as::<_, Star>(
            r#"
            UPDATE stars SET
                name     = $2,
                distance = $3
            WHERE id = $1
            RETURNING id, name, distance
            "#,
        )
        .bind(id)
        .bind(&star.name)
        .bind(star.distance)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| {
            AppError::not_found(format!("Star not found with id: {}", id), json!({"id": id}))
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM stars WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
