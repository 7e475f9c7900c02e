//! Scenario persistence.
//!
//! This crate provides:
//! - The [`ScenarioStore`] contract used by the API layer
//! - A PostgreSQL implementation backed by `sqlx`
//! - An in-memory implementation for development and tests

/// Error types.
pub mod error;
/// In-memory scenario store.
pub mod memory;
/// Repository implementations for database persistence.
pub mod repositories;
/// Storage contract.
pub mod store;

pub use error::DataError;
pub use memory::InMemoryScenarioStore;
pub use repositories::{Database, DatabaseStatus, ScenarioRecord, ScenarioRepository};
pub use store::ScenarioStore;
