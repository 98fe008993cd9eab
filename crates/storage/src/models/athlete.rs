use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An athlete row joined with the names of its category and training center.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub pk_id: i64,
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub created_at: NaiveDateTime,
    pub category_id: i64,
    pub category_name: String,
    pub training_center_id: i64,
    pub training_center_name: String,
}
