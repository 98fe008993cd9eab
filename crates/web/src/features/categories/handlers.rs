use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        category::{CategoryResponse, CreateCategoryRequest},
        common::{PaginatedResponse, PaginationParams},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

use super::services;

#[utoipa::path(
    post,
    path = "/categorias/",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Category could not be stored")
    ),
    tag = "categorias"
)]
pub async fn create_category(
    State(db): State<Database>,
    ApiJson(req): ApiJson<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias/",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of categories", body = PaginatedResponse<CategoryResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "categorias"
)]
pub async fn list_categories(
    State(db): State<Database>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (categories, total) = services::list_categories(db.pool(), &params).await?;

    let response = PaginatedResponse::new(categories, params, total).map(CategoryResponse::from);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/categorias/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categorias"
)]
pub async fn get_category(
    State(db): State<Database>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}
