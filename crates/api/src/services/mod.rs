//! Application services.

pub mod scenario_service;

pub use scenario_service::ScenarioService;
