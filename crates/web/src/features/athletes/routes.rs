use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete};

pub fn routes() -> Router<Database> {
    let collection = get(list_athletes).post(create_athlete);

    Router::new()
        .route("/atletas", collection.clone())
        .route("/atletas/", collection)
        .route(
            "/atletas/:id",
            get(get_athlete).patch(update_athlete).delete(delete_athlete),
        )
}
