use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List one page of training centers in insertion order, with the total row count
    pub async fn list(&self, params: &PaginationParams) -> Result<(Vec<TrainingCenter>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training_centers")
            .fetch_one(self.pool)
            .await?;

        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT pk_id, id, name
            FROM training_centers
            ORDER BY pk_id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(self.pool)
        .await?;

        Ok((centers, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TrainingCenter> {
        sqlx::query_as::<_, TrainingCenter>(
            "SELECT pk_id, id, name FROM training_centers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT pk_id, id, name FROM training_centers WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(center)
    }

    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO training_centers (id, name)
            VALUES (?, ?)
            RETURNING pk_id, id, name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(center)
    }
}
