use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub routes: usize,
}

/// Custom error type for API endpoints
///
/// Catalog errors map to an HTTP status code and a JSON body of the form
/// `{"error": "..."}`. Messages are the ones clients of the catalog
/// already match on, so they are kept in Spanish. A JSON body axum could
/// not read keeps axum's own rejection response.
#[derive(Debug)]
pub enum ApiError {
    /// No route has the requested id (or the id has no leading integer)
    RouteNotFound(String),
    /// The `x-user-id` header is absent or empty
    MissingUserId(&'static str),
    /// The request body is not valid JSON, or `likes` is not an integer
    InvalidPayload(JsonRejection),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound(id) => {
                tracing::info!("Route not found: {}", id);
                (StatusCode::NOT_FOUND, "Ruta no encontrada".to_string())
            }
            ApiError::MissingUserId(message) => {
                tracing::warn!("Request rejected, missing x-user-id header");
                (StatusCode::BAD_REQUEST, message.to_string())
            }
            ApiError::InvalidPayload(rejection) => {
                tracing::info!("Request body rejected: {}", rejection.body_text());
                return rejection.into_response();
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
