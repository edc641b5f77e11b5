//! Infrastructure layer: concrete implementations of the domain's
//! repository traits.
//!
//! - [`persistence`] - SQLite and in-memory URL stores

pub mod persistence;
