//! Domain layer: entities and storage contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or persistence layers.

pub mod entities;
pub mod repositories;
