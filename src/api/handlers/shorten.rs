//! Handler for link shortening endpoint.

use axum::{body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates the short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/conv`
///
/// # Request Body
///
/// ```json
/// { "params": { "url": "https://example.com/very/long/path" } }
/// ```
///
/// The same object may also be sent as a JSON string containing its
/// serialized form. `Content-Type` is not inspected.
///
/// # Response
///
/// `200 OK`, `text/plain` body:
///
/// ```text
/// https://url.omoknooni.link/a/HkTRTCT
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `params.url` is missing or empty.
/// Returns 500 Internal Server Error if the store write fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, AppError> {
    let request = ShortenRequest::from_body(&body)?;
    request.validate()?;

    let link = state.shortener.shorten(&request.params.url).await?;

    Ok(link.short_url)
}
