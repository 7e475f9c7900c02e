//! ROI projection engine.
//!
//! The engine is a pure transformation from a validated [`ScenarioInput`]
//! to an [`RoiResult`]. It holds no state between calls and is safe to use
//! from any number of concurrent requests.
//!
//! [`ScenarioInput`]: crate::value_objects::ScenarioInput
//! [`RoiResult`]: crate::value_objects::RoiResult

mod breakdown;
mod calculator;
mod factors;

pub use breakdown::yearly_breakdown;
pub use calculator::{RoiCalculator, calculate_roi};
pub use factors::{HiddenBenefitFactors, STANDARD_FACTORS};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary or percentage figure to two decimal places.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
