use sqlx::SqlitePool;
use storage::{
    dto::{category::CreateCategoryRequest, common::PaginationParams},
    error::Result,
    models::Category,
    repository::category::CategoryRepository,
};
use uuid::Uuid;

/// List one page of categories
pub async fn list_categories(
    pool: &SqlitePool,
    params: &PaginationParams,
) -> Result<(Vec<Category>, i64)> {
    let repo = CategoryRepository::new(pool);
    repo.list(params).await
}

/// Get category by external id
pub async fn get_category(pool: &SqlitePool, id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new category
pub async fn create_category(pool: &SqlitePool, request: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    let category = repo.create(request).await?;
    tracing::info!(id = %category.id, name = %category.name, "Category created");
    Ok(category)
}
