//! Handler for the save endpoint.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use tracing::Instrument;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::api::middleware::request_id::request_id;
use crate::error::AppError;
use crate::state::AppState;

const OP: &str = "http.handlers.save";

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "ex1"
/// }
/// ```
///
/// `alias` is optional; when missing or empty a random alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "ok", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// Every failure is rendered as `{"status":"error","error":"..."}`:
///
/// - 400 `empty request` / `failed to decode request` / validation message
/// - 409 `URL already exists` when the alias is taken
/// - 500 `failed to add URL` on storage failures
pub async fn save_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let span = tracing::info_span!("save", op = OP, request_id = %request_id(&headers));

    async move {
        let request = decode_request(&body)?;
        tracing::info!(?request, "Request body decoded");

        if let Err(e) = request.check() {
            tracing::info!(error = %e, "Invalid request");
            return Err(e);
        }

        let url = request.url.as_deref().unwrap_or_default();
        let record = state
            .url_service
            .save_url(url, request.alias.as_deref())
            .await?;

        Ok(Json(SaveResponse::new(record.alias)))
    }
    .instrument(span)
    .await
}

/// Parses the raw body, telling an empty body apart from a malformed one.
///
/// A JSON `null` decodes to an empty request and fails validation later.
fn decode_request(body: &[u8]) -> Result<SaveRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        tracing::info!("Request body is empty");
        return Err(AppError::bad_request("empty request"));
    }

    serde_json::from_slice::<Option<SaveRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            tracing::info!(error = %e, "Failed to decode request body");
            AppError::bad_request("failed to decode request")
        })
}
