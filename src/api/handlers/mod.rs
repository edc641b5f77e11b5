//! HTTP request handlers for API endpoints.

pub mod save;

pub use save::save_handler;
