//! Storage contract for scenarios.

use crate::error::DataError;
use async_trait::async_trait;
use roi_calc_domain::{NewScenario, Scenario, ScenarioId};

/// Persists and retrieves scenarios keyed by id, with unique names.
#[async_trait]
pub trait ScenarioStore: Send + Sync {
    /// Stores a new scenario.
    ///
    /// # Errors
    /// Returns [`DataError::DuplicateName`] if the name is taken.
    async fn insert(&self, scenario: NewScenario) -> Result<Scenario, DataError>;

    /// Lists all scenarios, newest first.
    ///
    /// # Errors
    /// Returns an error if the backend fails.
    async fn list(&self) -> Result<Vec<Scenario>, DataError>;

    /// Fetches one scenario.
    ///
    /// # Errors
    /// Returns [`DataError::NotFound`] if no scenario has this id.
    async fn get(&self, id: ScenarioId) -> Result<Scenario, DataError>;

    /// Deletes one scenario.
    ///
    /// # Errors
    /// Returns [`DataError::NotFound`] if no scenario has this id.
    async fn delete(&self, id: ScenarioId) -> Result<(), DataError>;
}
