use rust_decimal::Decimal;
use serde::Serialize;

/// One year of the projection.
///
/// Every monetary field is rounded to cents when the row is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRecord {
    /// 1-indexed year.
    pub year: u32,
    /// Operating costs incurred this year.
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_costs: Decimal,
    /// Adjusted savings realised this year.
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_savings: Decimal,
    /// Initial investment plus all costs up to and including this year.
    #[serde(with = "rust_decimal::serde::float")]
    pub cumulative_costs: Decimal,
    /// All adjusted savings up to and including this year.
    #[serde(with = "rust_decimal::serde::float")]
    pub cumulative_savings: Decimal,
    /// `cumulative_savings - cumulative_costs`.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_position: Decimal,
}

/// Hidden-benefit factors rendered as whole percentages (e.g. `"15%"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenBenefits {
    /// Savings uplift from fewer defects and less rework.
    pub quality_improvement: String,
    /// Savings uplift from fewer manual mistakes.
    pub error_reduction: String,
    /// Savings uplift from faster throughput.
    pub productivity_boost: String,
    /// Combined uplift above baseline savings.
    pub total_multiplier: String,
}

/// Output of the ROI engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiResult {
    /// `(total_savings - total_costs) / total_costs * 100`, on unrounded totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub roi_percentage: Decimal,
    /// Years until the initial investment is recovered.
    #[serde(with = "rust_decimal::serde::float")]
    pub payback_period: Decimal,
    /// `total_savings - total_costs`, taken after both are rounded.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_benefit: Decimal,
    /// Adjusted annual savings over the whole horizon.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    /// Initial investment plus operating costs over the whole horizon.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_costs: Decimal,
    /// Base annual savings with the hidden-benefit multiplier applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub adjusted_annual_savings: Decimal,
    /// One row per projection year.
    pub yearly_breakdown: Vec<YearRecord>,
    pub hidden_benefits: HiddenBenefits,
}

impl RoiResult {
    /// Returns the scalar metrics that are persisted with a scenario.
    #[must_use]
    pub fn summary(&self) -> RoiSummary {
        RoiSummary {
            roi_percentage: self.roi_percentage,
            payback_period: self.payback_period,
            net_benefit: self.net_benefit,
            total_savings: self.total_savings,
            total_costs: self.total_costs,
        }
    }
}

/// Scalar ROI metrics stored alongside a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoiSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub roi_percentage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payback_period: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_benefit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_savings: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_costs: Decimal,
}
