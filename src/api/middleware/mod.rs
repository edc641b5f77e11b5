//! HTTP middleware for request processing.
//!
//! Provides request identification and observability middleware.

pub mod request_id;
pub mod tracing;
