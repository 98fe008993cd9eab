use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::category::CreateCategoryRequest;
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Category;

pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List one page of categories in insertion order, with the total row count
    pub async fn list(&self, params: &PaginationParams) -> Result<(Vec<Category>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(self.pool)
            .await?;

        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT pk_id, id, name
            FROM categories
            ORDER BY pk_id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(self.pool)
        .await?;

        Ok((categories, total))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Category> {
        sqlx::query_as::<_, Category>("SELECT pk_id, id, name FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Exact, case-sensitive name lookup
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT pk_id, id, name FROM categories WHERE name = ?")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(category)
    }

    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (id, name)
            VALUES (?, ?)
            RETURNING pk_id, id, name
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}
