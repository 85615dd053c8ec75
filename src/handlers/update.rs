use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_route_id;
use crate::models::{UpdateRouteRequest, UpdateRouteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// PATCH /api/routes/:id handler - Set likes and/or add a comment
///
/// Both fields are optional. `likes` overwrites the stored counter as sent.
/// `newComment` is appended only when it carries a non-empty author and
/// text, and is silently ignored otherwise. A request without a body, or
/// with a non-JSON content type, is an empty update. The route is returned
/// whether or not anything changed.
#[utoipa::path(
    patch,
    path = routes::ROUTE_ITEM,
    params(
        ("id" = i64, Path, description = "Route id")
    ),
    request_body = UpdateRouteRequest,
    responses(
        (status = 200, description = "Route updated", body = UpdateRouteResponse),
        (status = 400, description = "Body is not valid JSON", body = String),
        (status = 422, description = "`likes` is not an integer", body = String),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    tag = "routes"
)]
pub async fn update_route_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Option<Json<UpdateRouteRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<UpdateRouteResponse>), ApiError> {
    let request = match payload {
        Ok(Some(Json(request))) => request,
        Ok(None) | Err(JsonRejection::MissingJsonContentType(_)) => UpdateRouteRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let id = parse_route_id(&id_str).ok_or_else(|| ApiError::RouteNotFound(id_str.clone()))?;

    let route = state
        .catalog
        .update_route(id, request.likes, request.new_comment)
        .await
        .ok_or(ApiError::RouteNotFound(id_str))?;

    tracing::info!(
        "Updated route {} (likes: {}, comments: {})",
        route.id,
        route.likes,
        route.comments.len()
    );
    Ok((
        StatusCode::OK,
        Json(UpdateRouteResponse {
            message: "Ruta actualizada con éxito".to_string(),
            route,
        }),
    ))
}
