//! Application state shared across handlers.

use crate::services::ScenarioService;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Scenario operations.
    pub scenarios: ScenarioService,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(scenarios: ScenarioService) -> Self {
        Self { scenarios }
    }
}
