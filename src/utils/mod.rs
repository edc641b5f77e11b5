//! Helper functions shared across layers.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`db_error`] - Driver error classification

pub mod alias_generator;
pub mod db_error;
