//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /conv` - Shorten a URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/conv", post(shorten_handler))
}
