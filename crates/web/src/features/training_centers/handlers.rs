use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{PaginatedResponse, PaginationParams},
        training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    post,
    path = "/centros_treinamentos/",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Training center could not be stored")
    ),
    tag = "centros_treinamentos"
)]
pub async fn create_training_center(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = services::create_training_center(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(TrainingCenterResponse::from(center))).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamentos/",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of training centers", body = PaginatedResponse<TrainingCenterResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "centros_treinamentos"
)]
pub async fn list_training_centers(
    State(db): State<Database>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (centers, total) = services::list_training_centers(db.pool(), &params).await?;

    let response = PaginatedResponse::new(centers, params, total).map(TrainingCenterResponse::from);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/centros_treinamentos/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "centros_treinamentos"
)]
pub async fn get_training_center(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let center = services::get_training_center(db.pool(), id).await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}
