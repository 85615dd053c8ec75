use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    Comment, FavoriteResponse, GalleryItem, NewComment, Route, UpdateRouteRequest,
    UpdateRouteResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "route-catalog API",
        version = "1.0.0",
        description = "An in-memory catalog of hiking routes with comments, likes and per-user favorites"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_routes_handler,
        handlers::gallery::gallery_handler,
        handlers::update::update_route_handler,
        handlers::favorite::toggle_favorite_handler,
        handlers::favorites::list_favorites_handler
    ),
    components(
        schemas(
            Route,
            Comment,
            GalleryItem,
            UpdateRouteRequest,
            NewComment,
            UpdateRouteResponse,
            FavoriteResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "routes", description = "Route catalog operations"),
        (name = "favorites", description = "Per-user favorite routes")
    )
)]
pub struct ApiDoc;
