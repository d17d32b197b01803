pub mod billboards;
pub mod health;
pub mod stores;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full application router: store and billboard routes scoped by
/// `:userId`, health, and the Swagger UI.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/user/:userId/store", get(stores::get_by_user).post(stores::create))
        .route("/api/user/:userId/stores", get(stores::list))
        .route(
            "/api/user/:userId/store/:storeId",
            get(stores::get).patch(stores::update).delete(stores::delete),
        )
        .route(
            "/api/user/:userId/store/:storeId/billboard",
            get(billboards::list).post(billboards::create),
        )
        .route(
            "/api/user/:userId/store/:storeId/billboard/:id",
            get(billboards::get).patch(billboards::update).delete(billboards::delete),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use service::billboard::repository::memory::InMemoryBillboardRepository;
    use service::errors::ServiceError;
    use service::health::DatabaseProbe;
    use service::store::repository::memory::InMemoryStoreRepository;

    fn app() -> Router { build_router(AppState::in_memory(), CorsLayer::very_permissive()) }

    async fn call(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if body.is_some() {
            req = req.header("content-type", "application/json");
        }
        let req = req.body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty)).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn health_is_up_in_memory() {
        let (status, body) = call(app(), "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["details"]["db"]["status"], "up");
    }

    #[tokio::test]
    async fn create_store_returns_201_envelope() {
        let (status, body) = call(app(), "POST", "/api/user/user_1/store", Some(r#"{"name":"store1"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["store"]["name"], "store1");
        assert_eq!(body["store"]["userId"], "user_1");
    }

    #[tokio::test]
    async fn billboard_create_on_missing_store_is_401() {
        let uri = format!("/api/user/user_1/store/{}/billboard", uuid::Uuid::new_v4());
        let (status, body) = call(app(), "POST", &uri, Some(r#"{"label":"a","imageUrl":"https://example.com/a.png"}"#)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "statusCode": 401, "message": "Unauthorized" }));
    }

    #[tokio::test]
    async fn malformed_store_id_is_400() {
        let (status, body) = call(app(), "GET", "/api/user/user_1/store/123", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["statusCode"], 400);
    }

    struct DownProbe;

    #[async_trait::async_trait]
    impl DatabaseProbe for DownProbe {
        async fn ping(&self) -> Result<(), ServiceError> { Err(ServiceError::Db("connection refused".into())) }
    }

    #[tokio::test]
    async fn health_reports_503_when_db_down() {
        let state = AppState::new(
            Arc::new(InMemoryStoreRepository::new()),
            Arc::new(InMemoryBillboardRepository::new()),
            Arc::new(DownProbe),
        );
        let app = build_router(state, CorsLayer::very_permissive());
        let (status, body) = call(app, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            serde_json::json!({ "status": "error", "details": { "db": { "status": "down", "error": "connection refused" } } })
        );
    }
}
