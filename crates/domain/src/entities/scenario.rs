use crate::value_objects::{RoiResult, RoiSummary, ScenarioInput, ScenarioName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub Uuid);

impl ScenarioId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Uuid> for ScenarioId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A scenario that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScenario {
    pub name: ScenarioName,
    pub input: ScenarioInput,
    pub summary: RoiSummary,
}

impl NewScenario {
    /// Pairs a named input with the metrics computed for it.
    #[must_use]
    pub fn new(name: ScenarioName, input: ScenarioInput, result: &RoiResult) -> Self {
        Self {
            name,
            input,
            summary: result.summary(),
        }
    }
}

/// A stored scenario: inputs, their computed metrics, and bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: ScenarioName,
    pub input: ScenarioInput,
    pub summary: RoiSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scenario {
    /// Materialises a new scenario with the given id and timestamp.
    #[must_use]
    pub fn from_new(id: ScenarioId, new: NewScenario, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            input: new.input,
            summary: new.summary,
            created_at: now,
            updated_at: now,
        }
    }
}
