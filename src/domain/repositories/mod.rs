//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. The save
//! path only needs [`UrlSaver`]; lookup, delete and shutdown need the full
//! [`UrlRepository`].

pub mod url_repository;

pub use url_repository::{UrlRepository, UrlSaver};

#[cfg(test)]
pub use url_repository::MockUrlSaver;
