use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_training_center, get_training_center, list_training_centers};

pub fn routes() -> Router<Database> {
    let collection = get(list_training_centers).post(create_training_center);

    Router::new()
        .route("/centros_treinamentos", collection.clone())
        .route("/centros_treinamentos/", collection)
        .route("/centros_treinamentos/:id", get(get_training_center))
}
