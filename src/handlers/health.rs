use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The catalog lives in memory, so a running process is a healthy one.
/// Reports the number of routes currently held.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let routes = state.catalog.route_count().await;
    tracing::debug!("Health check passed ({} routes)", routes);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            routes,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, setup_test_app};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let response_json: HealthResponse = read_json(response).await;
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.routes, 3);
    }
}
