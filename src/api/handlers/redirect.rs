//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /a/{short_id}`
///
/// # Response Codes
///
/// - **301 Moved Permanently**: `Location` set to the stored URL, empty body
/// - **400 Bad Request**: identifier is not 7 URL-safe characters
/// - **404 Not Found**: body `Not Found`
/// - **500 Internal Server Error**: body `Internal Server Error`
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.resolver.resolve(&short_id).await?;

    let location = HeaderValue::from_str(&original_url).map_err(|e| {
        error!(short_id = %short_id, error = %e, "Stored URL is not a valid Location header");
        AppError::internal(format!("invalid Location value: {e}"))
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
