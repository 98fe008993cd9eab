use axum::Router;
use storage::Database;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{athletes, categories, training_centers};

pub fn api_routes() -> Router<Database> {
    Router::new()
        .merge(athletes::routes::routes())
        .merge(categories::routes::routes())
        .merge(training_centers::routes::routes())
}

/// Full application: API, Swagger UI, CORS and request tracing.
pub fn create_app(db: Database, openapi: utoipa::openapi::OpenApi) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(api_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use utoipa::OpenApi;

    async fn app() -> Router {
        let db = Database::in_memory().await.unwrap();
        create_app(db, crate::ApiDoc::openapi())
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    fn athlete_payload(name: &str, cpf: &str) -> Value {
        json!({
            "nome": name,
            "cpf": cpf,
            "idade": 25,
            "peso": 75.5,
            "altura": 1.70,
            "sexo": "M",
            "categoria": {"nome": "Scale"},
            "centros_treinamentos": {"nome": "CT King"}
        })
    }

    async fn app_with_references() -> Router {
        let app = app().await;
        let (status, _) = send(&app, "POST", "/categorias/", Some(json!({"nome": "Scale"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(
            &app,
            "POST",
            "/centros_treinamentos/",
            Some(json!({"nome": "CT King"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        app
    }

    #[tokio::test]
    async fn test_create_and_get_category() {
        let app = app().await;

        let (status, created) =
            send(&app, "POST", "/categorias/", Some(json!({"nome": "Scale"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["nome"], "Scale");

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/categorias/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["nome"], "Scale");
        assert_eq!(fetched["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_unknown_ids_return_404() {
        let app = app().await;
        let id = uuid::Uuid::new_v4();

        for prefix in ["categorias", "centros_treinamentos", "atletas"] {
            let (status, body) = send(&app, "GET", &format!("/{prefix}/{id}"), None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{prefix}");
            assert_eq!(body["error"], "Resource not found");
        }
    }

    #[tokio::test]
    async fn test_duplicate_category_is_a_server_error() {
        let app = app().await;
        send(&app, "POST", "/categorias/", Some(json!({"nome": "Scale"}))).await;

        let (status, _) = send(&app, "POST", "/categorias/", Some(json!({"nome": "Scale"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_collection_path_with_and_without_slash() {
        let app = app().await;
        send(
            &app,
            "POST",
            "/centros_treinamentos",
            Some(json!({"nome": "CT King"})),
        )
        .await;

        let (status, page) = send(&app, "GET", "/centros_treinamentos/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["nome"], "CT King");
    }

    #[tokio::test]
    async fn test_category_pagination() {
        let app = app().await;
        for name in ["RX", "Scale", "Master", "Teen"] {
            send(&app, "POST", "/categorias/", Some(json!({"nome": name}))).await;
        }

        let (status, page) = send(&app, "GET", "/categorias/?limit=2&offset=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 4);
        assert_eq!(page["limit"], 2);
        assert_eq!(page["offset"], 1);
        let names: Vec<_> = page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["nome"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Scale", "Master"]);

        let (status, _) = send(&app, "GET", "/categorias/?limit=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, "GET", "/categorias/?limit=101", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_athlete_with_unknown_category_is_rejected() {
        let app = app().await;
        send(
            &app,
            "POST",
            "/centros_treinamentos/",
            Some(json!({"nome": "CT King"})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Scale"));

        let (_, page) = send(&app, "GET", "/atletas/", None).await;
        assert_eq!(page["total"], 0);
    }

    #[tokio::test]
    async fn test_athlete_with_unknown_training_center_is_rejected() {
        let app = app().await;
        send(&app, "POST", "/categorias/", Some(json!({"nome": "Scale"}))).await;

        let (status, body) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("CT King"));

        let (_, page) = send(&app, "GET", "/atletas/", None).await;
        assert_eq!(page["total"], 0);
    }

    #[tokio::test]
    async fn test_invalid_athlete_payload() {
        let app = app_with_references().await;

        let mut payload = athlete_payload("Joao", "123");
        payload["peso"] = json!(-3.0);
        let (status, body) = send(&app, "POST", "/atletas/", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
        let details = body["details"].as_array().unwrap();
        assert_eq!(details.len(), 2, "{details:?}");
        assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("cpf: ")));
        assert!(details.iter().any(|d| d.as_str().unwrap().starts_with("peso: ")));
    }

    #[tokio::test]
    async fn test_validation_details_name_payload_keys() {
        let app = app_with_references().await;

        let mut payload = athlete_payload("", "12345678900");
        payload["peso"] = json!(-1.0);
        payload["sexo"] = json!("MM");
        payload["centros_treinamentos"] = json!({"nome": ""});
        let (status, body) = send(&app, "POST", "/atletas/", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let details: Vec<&str> = body["details"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d.as_str().unwrap())
            .collect();
        assert_eq!(details.len(), 4, "{details:?}");
        for key in ["nome: ", "peso: ", "sexo: ", "centros_treinamentos.nome: "] {
            assert!(details.iter().any(|d| d.starts_with(key)), "{key} in {details:?}");
        }
        let keys: Vec<&str> = details.iter().filter_map(|d| d.split(':').next()).collect();
        for rust_name in ["name", "weight", "sex", "training_center"] {
            assert!(!keys.iter().any(|k| k.contains(rust_name)), "{keys:?}");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_json_bad_request() {
        let app = app_with_references().await;

        let mut payload = athlete_payload("Joao", "12345678900");
        payload.as_object_mut().unwrap().remove("cpf");
        let (status, body) = send(&app, "POST", "/atletas/", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("cpf"), "{body}");

        let (_, created) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        let id = created["id"].as_str().unwrap();
        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/atletas/{id}"),
            Some(json!({"idade": "abc"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");

        let (_, unchanged) = send(&app, "GET", &format!("/atletas/{id}"), None).await;
        assert_eq!(unchanged["idade"], 25);
    }

    #[tokio::test]
    async fn test_malformed_query_and_path_are_json_bad_requests() {
        let app = app().await;

        let (status, body) = send(&app, "GET", "/categorias/?limit=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");

        let (status, body) = send(&app, "GET", "/atletas/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");

        let (status, body) = send(&app, "GET", "/centros_treinamentos/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string(), "{body}");
    }

    #[tokio::test]
    async fn test_duplicate_cpf_conflicts_and_keeps_first() {
        let app = app_with_references().await;

        let (status, first) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Maria", "12345678900")),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let id = first["id"].as_str().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/atletas/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["nome"], "Joao");
    }

    #[tokio::test]
    async fn test_unfiltered_listing_uses_summary_view() {
        let app = app_with_references().await;
        send(&app, "POST", "/atletas/", Some(athlete_payload("Joao", "11111111111"))).await;
        send(&app, "POST", "/atletas/", Some(athlete_payload("Maria", "22222222222"))).await;

        let (status, page) = send(&app, "GET", "/atletas/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 2);

        let items = page["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            let keys: Vec<_> = item.as_object().unwrap().keys().cloned().collect();
            assert_eq!(keys.len(), 3, "{keys:?}");
            assert_eq!(item["categoria"]["nome"], "Scale");
            assert_eq!(item["centros_treinamentos"]["nome"], "CT King");
            assert!(item.get("peso").is_none());
            assert!(item.get("cpf").is_none());
        }
    }

    #[tokio::test]
    async fn test_name_and_cpf_filters() {
        let app = app_with_references().await;
        send(&app, "POST", "/atletas/", Some(athlete_payload("Joao", "11111111111"))).await;
        send(&app, "POST", "/atletas/", Some(athlete_payload("Maria", "22222222222"))).await;

        let (status, page) = send(&app, "GET", "/atletas/?nome=Joao&cpf=11111111111", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["cpf"], "11111111111");
        assert_eq!(page["items"][0]["peso"], 75.5);

        let (status, body) =
            send(&app, "GET", "/atletas/?nome=Joao&cpf=22222222222", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Joao"));

        let (status, _) = send(&app, "GET", "/atletas/?nome=Joao", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/atletas/?nome=Pedro&cpf=11111111111", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, page) = send(&app, "GET", "/atletas/?cpf=22222222222", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 1);
        assert_eq!(page["items"][0]["nome"], "Maria");
    }

    #[tokio::test]
    async fn test_partial_update_only_changes_name() {
        let app = app_with_references().await;
        let (_, created) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, updated) = send(
            &app,
            "PATCH",
            &format!("/atletas/{id}"),
            Some(json!({"nome": "Joao Silva"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["nome"], "Joao Silva");

        for field in [
            "id",
            "created_at",
            "cpf",
            "idade",
            "peso",
            "altura",
            "sexo",
            "categoria",
            "centros_treinamentos",
        ] {
            assert_eq!(updated[field], created[field], "{field}");
        }

        let (status, updated) = send(
            &app,
            "PATCH",
            &format!("/atletas/{id}"),
            Some(json!({"idade": 30})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["idade"], 30);
        assert_eq!(updated["nome"], "Joao Silva");
    }

    #[tokio::test]
    async fn test_update_missing_athlete() {
        let app = app().await;
        let id = uuid::Uuid::new_v4();

        let (status, _) = send(
            &app,
            "PATCH",
            &format!("/atletas/{id}"),
            Some(json!({"idade": 30})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", &format!("/atletas/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_end_to_end_athlete_lifecycle() {
        let app = app_with_references().await;

        let (status, created) = send(
            &app,
            "POST",
            "/atletas/",
            Some(athlete_payload("Joao", "12345678900")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(uuid::Uuid::parse_str(created["id"].as_str().unwrap()).is_ok());
        assert!(created["created_at"].is_string());

        let id = created["id"].as_str().unwrap();
        let (status, fetched) = send(&app, "GET", &format!("/atletas/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, body) = send(&app, "DELETE", &format!("/atletas/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, _) = send(&app, "GET", &format!("/atletas/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = app().await;

        let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/atletas/{id}").is_some());
    }
}
