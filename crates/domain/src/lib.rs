//! Domain model and ROI projection engine.
//!
//! This crate contains everything that does not touch I/O:
//! - Validated scenario inputs and the value objects around them
//! - The ROI engine with its hidden-benefit factors
//! - The persisted `Scenario` entity
//! - Domain error types

/// Prelude module for convenient imports.
pub mod prelude;

/// ROI projection engine.
pub mod engine;
/// Persisted entities.
pub mod entities;
/// Error types.
pub mod error;
/// Immutable value objects.
pub mod value_objects;

pub use engine::{HiddenBenefitFactors, RoiCalculator, STANDARD_FACTORS, calculate_roi};
pub use entities::{NewScenario, Scenario, ScenarioId};
pub use error::RoiError;
pub use value_objects::{
    EmailAddress, HiddenBenefits, RawScenarioInput, RoiResult, RoiSummary, ScenarioInput,
    ScenarioName, YearRecord,
};
