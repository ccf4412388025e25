use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use exedra_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    database: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { database } = service.get_status().await;

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        database,
    };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use exedra_core_health_contracts::MockHealthFeatureService;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn request(service: MockHealthFeatureService) -> (StatusCode, Value) {
        let router = router(Arc::new(service));
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service =
            MockHealthFeatureService::new().with_get_status(HealthStatus { database: true });

        // Act
        let (status, body) = request(service).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "http": true, "database": true }));
    }

    #[tokio::test]
    async fn database_unreachable() {
        // Arrange
        let service =
            MockHealthFeatureService::new().with_get_status(HealthStatus { database: false });

        // Act
        let (status, body) = request(service).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "http": true, "database": false }));
    }
}
