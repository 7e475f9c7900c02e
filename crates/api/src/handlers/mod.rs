//! HTTP request handlers.

pub mod health;
pub mod reports;
pub mod scenarios;
pub mod simulation;

pub use health::{health_check, openapi_spec};
pub use reports::generate_report;
pub use scenarios::{delete_scenario, get_scenario, list_scenarios, save_scenario};
pub use simulation::simulate;

use crate::error::ApiError;
use roi_calc_domain::ScenarioId;

/// Parses a scenario id from a path segment.
///
/// A malformed id can never match a stored scenario, so it is reported the
/// same way as an unknown one.
pub(crate) fn parse_scenario_id(raw: &str) -> Result<ScenarioId, ApiError> {
    raw.parse::<uuid::Uuid>()
        .map(ScenarioId::from)
        .map_err(|_| ApiError::NotFound("Scenario not found".to_string()))
}
