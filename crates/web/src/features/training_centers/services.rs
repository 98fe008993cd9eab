use sqlx::SqlitePool;
use storage::{
    dto::{common::PaginationParams, training_center::CreateTrainingCenterRequest},
    error::Result,
    models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

/// List one page of training centers
pub async fn list_training_centers(
    pool: &SqlitePool,
    params: &PaginationParams,
) -> Result<(Vec<TrainingCenter>, i64)> {
    let repo = TrainingCenterRepository::new(pool);
    repo.list(params).await
}

/// Get training center by external id
pub async fn get_training_center(pool: &SqlitePool, id: Uuid) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a training center
pub async fn create_training_center(
    pool: &SqlitePool,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    let center = repo.create(request).await?;
    tracing::info!(id = %center.id, name = %center.name, "Training center created");
    Ok(center)
}
