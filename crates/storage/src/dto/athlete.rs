use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::NameRef;

/// Full athlete representation returned by create, get, update and filtered listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "idade")]
    pub age: i32,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "categoria")]
    pub category: NameRef,
    #[serde(rename = "centros_treinamentos")]
    pub training_center: NameRef,
}

/// Reduced view used when listing athletes without filters
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: NameRef,
    #[serde(rename = "centros_treinamentos")]
    pub training_center: NameRef,
}

/// Item of an athlete listing: full records for filtered listings, the
/// reduced view otherwise
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AthleteListItem {
    Full(AthleteResponse),
    Summary(AthleteSummary),
}

/// Request payload for registering an athlete.
///
/// Category and training center are referenced by name and resolved before insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Joao")]
    pub name: String,

    #[validate(length(equal = 11, message = "CPF must have exactly 11 characters"))]
    #[schema(example = "12345678900")]
    pub cpf: String,

    #[serde(rename = "idade")]
    #[schema(example = 25)]
    pub age: i32,

    #[serde(rename = "peso")]
    #[validate(range(exclusive_min = 0.0, message = "Weight must be positive"))]
    #[schema(example = 75.5)]
    pub weight: f64,

    #[serde(rename = "altura")]
    #[validate(range(exclusive_min = 0.0, message = "Height must be positive"))]
    #[schema(example = 1.70)]
    pub height: f64,

    #[serde(rename = "sexo")]
    #[validate(length(equal = 1, message = "Sex must be a single character"))]
    #[schema(example = "M")]
    pub sex: String,

    #[serde(rename = "categoria")]
    #[validate(nested)]
    pub category: NameRef,

    #[serde(rename = "centros_treinamentos")]
    #[validate(nested)]
    pub training_center: NameRef,
}

/// Request payload for a partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

/// Query filters accepted by the athlete listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteFilter {
    /// Exact athlete name; requires `cpf` to match the first athlete with that name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Exact CPF
    pub cpf: Option<String>,
}

impl From<crate::models::Athlete> for AthleteResponse {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: NameRef::new(athlete.category_name),
            training_center: NameRef::new(athlete.training_center_name),
        }
    }
}

impl From<crate::models::Athlete> for AthleteSummary {
    fn from(athlete: crate::models::Athlete) -> Self {
        Self {
            name: athlete.name,
            category: NameRef::new(athlete.category_name),
            training_center: NameRef::new(athlete.training_center_name),
        }
    }
}
