use sqlx::SqlitePool;
use storage::{
    dto::{
        athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest},
        common::PaginationParams,
    },
    error::Result,
    models::Athlete,
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

use crate::error::{ApiResult, WebError};

/// How a listing should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AthleteView {
    Full,
    Summary,
}

/// List athletes.
///
/// A `nome` filter only succeeds when the first athlete registered under that
/// name has exactly the supplied `cpf`; the page then holds every athlete with
/// that name. A lone `cpf` filters by cpf. Without filters every athlete is
/// listed in the summary view.
pub async fn list_athletes(
    pool: &SqlitePool,
    filter: &AthleteFilter,
    params: &PaginationParams,
) -> ApiResult<(Vec<Athlete>, i64, AthleteView)> {
    let repo = AthleteRepository::new(pool);

    if let Some(ref name) = filter.name {
        let first_cpf = repo.first_cpf_by_name(name).await?;
        if first_cpf.is_none() || first_cpf != filter.cpf {
            return Err(WebError::BadRequest(format!(
                "No athlete named {} with cpf {}",
                name,
                filter.cpf.as_deref().unwrap_or("")
            )));
        }

        let by_name = AthleteFilter {
            name: Some(name.clone()),
            cpf: None,
        };
        let (athletes, total) = repo.list(&by_name, params).await?;
        return Ok((athletes, total, AthleteView::Full));
    }

    if filter.cpf.is_some() {
        let (athletes, total) = repo.list(filter, params).await?;
        return Ok((athletes, total, AthleteView::Full));
    }

    let (athletes, total) = repo.list(&AthleteFilter::default(), params).await?;
    Ok((athletes, total, AthleteView::Summary))
}

/// Get athlete by external id
pub async fn get_athlete(pool: &SqlitePool, id: Uuid) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete, resolving its category and training center by name
pub async fn create_athlete(pool: &SqlitePool, request: &CreateAthleteRequest) -> ApiResult<Athlete> {
    let category = CategoryRepository::new(pool)
        .find_by_name(&request.category.name)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!("Category {} not found", request.category.name))
        })?;

    let training_center = TrainingCenterRepository::new(pool)
        .find_by_name(&request.training_center.name)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!(
                "Training center {} not found",
                request.training_center.name
            ))
        })?;

    let repo = AthleteRepository::new(pool);
    let athlete = repo
        .create(request, category.pk_id, training_center.pk_id)
        .await?;

    tracing::info!(id = %athlete.id, "Athlete created");

    Ok(athlete)
}

/// Update an athlete
pub async fn update_athlete(
    pool: &SqlitePool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &SqlitePool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await?;
    tracing::info!(%id, "Athlete deleted");
    Ok(())
}
