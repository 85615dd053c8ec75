use crate::error::{ApiError, ErrorResponse};
use crate::handlers::user_id;
use crate::models::Route;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};

/// GET /api/favorites handler - Full records of the caller's favorite routes
///
/// Routes come back in catalog order, not in the order they were marked.
/// A user with no favorites gets an empty list.
#[utoipa::path(
    get,
    path = routes::FAVORITES,
    params(
        ("x-user-id" = String, Header, description = "Caller's user id (not authenticated)")
    ),
    responses(
        (status = 200, description = "Favorite routes", body = [Route]),
        (status = 400, description = "Missing x-user-id header", body = ErrorResponse)
    ),
    tag = "favorites"
)]
pub async fn list_favorites_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<Vec<Route>>), ApiError> {
    let user_id = user_id(&headers)
        .ok_or(ApiError::MissingUserId("Falta el identificador del usuario"))?;

    let routes = state.catalog.favorite_routes(user_id).await;

    tracing::info!("Listed {} favorite routes for user {}", routes.len(), user_id);
    Ok((StatusCode::OK, Json(routes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, setup_test_app};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn favorites_request(user: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/api/favorites");
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn toggle_request(id: i64, user: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/routes/{}/favorite", id))
            .header("x-user-id", user)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_favorites_missing_user_id() {
        let app = setup_test_app();

        let response = app.oneshot(favorites_request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = read_json(response).await;
        assert_eq!(error_response.error, "Falta el identificador del usuario");
    }

    #[tokio::test]
    async fn test_favorites_unknown_user_is_empty() {
        let app = setup_test_app();

        let response = app.oneshot(favorites_request(Some("nobody"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let routes: Vec<Route> = read_json(response).await;
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn test_favorites_full_records_in_catalog_order() {
        let app = setup_test_app();

        for id in [3, 1] {
            let response = app.clone().oneshot(toggle_request(id, "u1")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
        // Another user's favorites stay separate
        app.clone().oneshot(toggle_request(2, "u2")).await.unwrap();

        let response = app.oneshot(favorites_request(Some("u1"))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let routes: Vec<Route> = read_json(response).await;
        let ids: Vec<i64> = routes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(routes[1].title, "Cerro Tusa");
        assert_eq!(routes[1].comments.len(), 1);
    }
}
