//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /` - Save a URL under an alias
//!
//! # Middleware (outermost first)
//!
//! - **Request id** - Assigns `x-request-id` when missing
//! - **Tracing** - Structured request/response logging with the request id
//! - **Request id propagation** - Echoes `x-request-id` on the response
//! - **Timeout** - Aborts requests running past the configured limit

use std::time::Duration;

use crate::api;
use crate::api::middleware::{request_id, tracing as trace};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `timeout` - upper bound on the time spent handling one request
pub fn app_router(state: AppState, timeout: Duration) -> Router {
    api::routes::routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(request_id::set_layer())
            .layer(trace::layer())
            .layer(request_id::propagate_layer())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                timeout,
            )),
    )
}
