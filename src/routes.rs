use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

// Path constants - single source of truth for all API paths
pub const HEALTH: &str = "/health";
pub const ROUTES: &str = "/api/routes";
pub const ROUTE_ITEM: &str = "/api/routes/{id}";
pub const ROUTE_FAVORITE: &str = "/api/routes/{id}/favorite";
pub const GALLERY: &str = "/api/gallery";
pub const FAVORITES: &str = "/api/favorites";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the application router
///
/// Cross-origin requests are allowed from anywhere.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(ROUTES, get(handlers::list_routes_handler))
        .route(ROUTE_ITEM, patch(handlers::update_route_handler))
        .route(ROUTE_FAVORITE, post(handlers::toggle_favorite_handler))
        .route(GALLERY, get(handlers::gallery_handler))
        .route(FAVORITES, get(handlers::list_favorites_handler))
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
