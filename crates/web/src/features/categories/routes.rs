use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_category, get_category, list_categories};

pub fn routes() -> Router<Database> {
    let collection = get(list_categories).post(create_category);

    Router::new()
        .route("/categorias", collection.clone())
        .route("/categorias/", collection)
        .route("/categorias/:id", get(get_category))
}
