use crate::catalog::FavoriteToggle;
use crate::error::{ApiError, ErrorResponse};
use crate::handlers::{parse_route_id, user_id};
use crate::models::FavoriteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

/// POST /api/routes/:id/favorite handler - Toggle a route in the caller's favorites
///
/// Adds the route if it is not a favorite yet, removes it otherwise. The
/// caller is identified by the `x-user-id` header, which is checked before
/// the route id.
#[utoipa::path(
    post,
    path = routes::ROUTE_FAVORITE,
    params(
        ("id" = i64, Path, description = "Route id"),
        ("x-user-id" = String, Header, description = "Caller's user id (not authenticated)")
    ),
    responses(
        (status = 200, description = "Favorite toggled", body = FavoriteResponse),
        (status = 400, description = "Missing x-user-id header", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    tag = "favorites"
)]
pub async fn toggle_favorite_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    let user_id = user_id(&headers).ok_or(ApiError::MissingUserId(
        "Falta el identificador del usuario (x-user-id en headers)",
    ))?;
    let id = parse_route_id(&id_str).ok_or_else(|| ApiError::RouteNotFound(id_str.clone()))?;

    let toggle = state
        .catalog
        .toggle_favorite(user_id, id)
        .await
        .ok_or(ApiError::RouteNotFound(id_str))?;

    let message = match &toggle {
        FavoriteToggle::Added(_) => {
            tracing::info!("User {} added route {} to favorites", user_id, id);
            "Ruta agregada a favoritos"
        }
        FavoriteToggle::Removed(_) => {
            tracing::info!("User {} removed route {} from favorites", user_id, id);
            "Ruta removida de favoritos"
        }
    };

    Ok((
        StatusCode::OK,
        Json(FavoriteResponse {
            message: message.to_string(),
            favorite_ids: toggle.favorite_ids().to_vec(),
        }),
    ))
}
