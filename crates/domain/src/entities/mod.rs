pub mod scenario;

// Re-export for easier access
pub use scenario::{NewScenario, Scenario, ScenarioId};
