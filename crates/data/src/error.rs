//! Storage error types.

use roi_calc_domain::ScenarioId;
use thiserror::Error;

/// Errors raised by scenario stores.
#[derive(Debug, Error)]
pub enum DataError {
    /// A scenario with the same name is already stored.
    #[error("A scenario with this name already exists")]
    DuplicateName(String),
    /// No scenario has the requested id.
    #[error("Scenario not found")]
    NotFound(ScenarioId),
    /// A stored row no longer satisfies the domain rules.
    #[error("stored scenario {id} is invalid: {reason}")]
    Corrupt {
        /// Offending row.
        id: ScenarioId,
        /// Validation failure.
        reason: String,
    },
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
