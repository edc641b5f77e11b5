//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one place for alias resolution and error classification.
//!
//! - [`services::url_service::UrlService`] - Save, lookup and delete of alias mappings

pub mod services;
