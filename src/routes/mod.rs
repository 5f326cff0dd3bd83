use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use roster_core::controller::Controller;

use crate::app::controller::EmployeeController;
use crate::app::middleware;
use crate::app::state::AppState;

pub fn routes(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let api = EmployeeController::router().route("/openapi.json", get(crate::docs::openapi_json));

    Ok(Router::new()
        .route("/", get(hello))
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::request_log())
        .layer(middleware::cors(cors_origin)?)
        .with_state(state))
}

async fn hello() -> &'static str {
    "Hello World!"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Sorry, can't find that!")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use roster_core::{DataSource, Employee, SchemaInitializer};
    use sea_orm::{ConnectOptions, Database};
    use tower::ServiceExt;

    use super::*;

    const ORIGIN: &str = "http://localhost:5173";

    async fn source(with_schema: bool) -> DataSource {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options).await.unwrap();
        let source = DataSource::from_connection(conn, Duration::from_secs(5));

        if with_schema {
            SchemaInitializer::new(source.clone()).ensure_schema().await.unwrap();
        }

        source
    }

    async fn app(with_schema: bool) -> Router {
        routes(AppState::new(source(with_schema).await), ORIGIN).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn root_says_hello() {
        let response = app(true)
            .await
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"Hello World!");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app(true)
            .await
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await, b"Sorry, can't find that!");
    }

    #[tokio::test]
    async fn created_employee_is_listed() {
        let app = app(true).await;

        let created = app
            .clone()
            .oneshot(post_json("/api/employees", r#"{"name":"Ana","phone":"555-0100"}"#))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let bytes = body_bytes(created).await;
        let created: Employee = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created.name, "Ana");
        assert!(!created.is_admin);

        let listed = app
            .oneshot(Request::get("/api/employees").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(listed.status(), StatusCode::OK);
        let bytes = body_bytes(listed).await;
        let listed: Vec<Employee> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn invalid_input_is_400() {
        let response = app(true)
            .await
            .oneshot(post_json("/api/employees", r#"{"name":"","phone":"555-0100"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = body_bytes(response).await;
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "`name` is required");
    }

    #[tokio::test]
    async fn database_errors_are_500() {
        let response = app(false)
            .await
            .oneshot(Request::get("/api/employees").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = body_bytes(response).await;
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("employee access failed"));
    }

    #[tokio::test]
    async fn cors_allows_the_configured_origin() {
        let response = app(true)
            .await
            .oneshot(
                Request::get("/api/employees")
                    .header(header::ORIGIN, ORIGIN)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            ORIGIN
        );
    }

    #[tokio::test]
    async fn openapi_document_lists_employee_routes() {
        let response = app(true)
            .await
            .oneshot(Request::get("/api/openapi.json").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body_bytes(response).await;
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["paths"]["/api/employees"]["get"].is_object());
        assert!(body["paths"]["/api/employees"]["post"].is_object());
    }

    #[test]
    fn bad_cors_origin_is_rejected() {
        assert!(middleware::cors("bad\norigin").is_err());
    }
}
