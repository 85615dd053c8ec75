use crate::models::GalleryItem;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/gallery handler - Thumbnail view of the catalog
#[utoipa::path(
    get,
    path = routes::GALLERY,
    responses(
        (status = 200, description = "Gallery items", body = [GalleryItem])
    ),
    tag = "routes"
)]
pub async fn gallery_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<GalleryItem>>) {
    (StatusCode::OK, Json(state.catalog.gallery()))
}
