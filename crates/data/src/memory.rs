//! In-memory scenario store.

use crate::error::DataError;
use crate::store::ScenarioStore;
use async_trait::async_trait;
use chrono::Utc;
use roi_calc_domain::{NewScenario, Scenario, ScenarioId};
use tokio::sync::RwLock;
use tracing::info;

/// Scenario store that keeps everything in process memory.
///
/// Scenarios are kept in insertion order, which is also `created_at` order.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    scenarios: RwLock<Vec<Scenario>>,
}

impl InMemoryScenarioStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scenarios.
    pub async fn len(&self) -> usize {
        self.scenarios.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.scenarios.read().await.is_empty()
    }
}

#[async_trait]
impl ScenarioStore for InMemoryScenarioStore {
    async fn insert(&self, scenario: NewScenario) -> Result<Scenario, DataError> {
        let mut scenarios = self.scenarios.write().await;
        if scenarios.iter().any(|s| s.name == scenario.name) {
            return Err(DataError::DuplicateName(scenario.name.to_string()));
        }

        let stored = Scenario::from_new(ScenarioId::generate(), scenario, Utc::now());
        info!(id = %stored.id, name = %stored.name, "scenario stored in memory");
        scenarios.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Scenario>, DataError> {
        Ok(self.scenarios.read().await.iter().rev().cloned().collect())
    }

    async fn get(&self, id: ScenarioId) -> Result<Scenario, DataError> {
        self.scenarios
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(DataError::NotFound(id))
    }

    async fn delete(&self, id: ScenarioId) -> Result<(), DataError> {
        let mut scenarios = self.scenarios.write().await;
        let position = scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or(DataError::NotFound(id))?;
        scenarios.remove(position);
        info!(%id, "scenario deleted from memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roi_calc_domain::{ScenarioInput, ScenarioName, calculate_roi};
    use rust_decimal_macros::dec;

    fn new_scenario(name: &str) -> NewScenario {
        let input = ScenarioInput::new(dec!(50000), dec!(10000), dec!(75000), 5).unwrap();
        let result = calculate_roi(&input);
        NewScenario::new(ScenarioName::parse(name).unwrap(), input, &result)
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryScenarioStore::new();
        let stored = store.insert(new_scenario("Robots")).await.unwrap();

        let fetched = store.get(stored.id).await.unwrap();
        assert_eq!(fetched, stored);
        assert_eq!(fetched.summary.roi_percentage, dec!(398.75));
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let store = InMemoryScenarioStore::new();
        store.insert(new_scenario("Robots")).await.unwrap();

        let err = store.insert(new_scenario("Robots")).await.unwrap_err();
        assert!(matches!(err, DataError::DuplicateName(name) if name == "Robots"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = InMemoryScenarioStore::new();
        store.insert(new_scenario("first")).await.unwrap();
        store.insert(new_scenario("second")).await.unwrap();
        store.insert(new_scenario("third")).await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name.to_string())
            .collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let store = InMemoryScenarioStore::new();
        let id = ScenarioId::generate();

        assert!(matches!(store.get(id).await, Err(DataError::NotFound(missing)) if missing == id));
        assert!(matches!(store.delete(id).await, Err(DataError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryScenarioStore::new();
        let stored = store.insert(new_scenario("Robots")).await.unwrap();

        store.delete(stored.id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(store.get(stored.id).await, Err(DataError::NotFound(_))));

        // The name is free again once deleted.
        assert!(store.insert(new_scenario("Robots")).await.is_ok());
    }
}
