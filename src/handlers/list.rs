use crate::models::Route;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/routes handler - List every route
///
/// Returns the full catalog in its stored order. No pagination, filtering
/// or sorting.
#[utoipa::path(
    get,
    path = routes::ROUTES,
    responses(
        (status = 200, description = "All routes", body = [Route])
    ),
    tag = "routes"
)]
pub async fn list_routes_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Route>>) {
    let routes = state.catalog.list_routes().await;

    tracing::info!("Listed {} routes", routes.len());
    (StatusCode::OK, Json(routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{read_json, setup_test_app};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn list_request() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/api/routes")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_endpoint_returns_catalog() {
        let app = setup_test_app();

        let response = app.oneshot(list_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let routes: Vec<Route> = read_json(response).await;
        let ids: Vec<i64> = routes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(routes[0].likes, 124);
        assert_eq!(routes[0].comments[0].author, "Juan Perez");
    }

    #[tokio::test]
    async fn test_list_endpoint_json_shape() {
        let app = setup_test_app();

        let response = app.oneshot(list_request()).await.unwrap();
        let body: serde_json::Value = read_json(response).await;

        let first = &body[0];
        assert_eq!(first["id"], 1);
        assert_eq!(first["title"], "Buena Vista");
        assert_eq!(first["imageThumb"], "./assets/images/landscape-1-thumb.webp");
        assert_eq!(first["distance"], "3.5 km");
        assert_eq!(first["difficulty"], "Fácil");
        assert_eq!(first["time"], "3 hrs");
        assert_eq!(first["comments"][0]["date"], "12/02/2026");
    }

    #[tokio::test]
    async fn test_list_endpoint_allows_any_origin() {
        let app = setup_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/routes")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
