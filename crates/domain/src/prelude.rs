//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use roi_calc_domain::prelude::*;
//! ```

// Engine
pub use crate::engine::{HiddenBenefitFactors, RoiCalculator, STANDARD_FACTORS, calculate_roi};

// Entities
pub use crate::entities::{NewScenario, Scenario, ScenarioId};

// Errors
pub use crate::error::RoiError;

// Value objects
pub use crate::value_objects::{
    EmailAddress, HiddenBenefits, RawScenarioInput, RoiResult, RoiSummary, ScenarioInput,
    ScenarioName, YearRecord,
};
