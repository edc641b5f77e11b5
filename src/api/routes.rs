//! API route configuration.

use crate::api::handlers::save_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /` - Store a URL under an alias
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(save_handler))
}
