use crate::value_objects::HiddenBenefits;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Fixed uplift factors applied to raw annual savings.
///
/// Only `combined_multiplier` enters the arithmetic; the three individual
/// factors are reported for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HiddenBenefitFactors {
    /// Savings attributed to improved output quality.
    pub quality_improvement: Decimal,
    /// Savings attributed to fewer errors.
    pub error_reduction: Decimal,
    /// Savings attributed to higher throughput.
    pub productivity_boost: Decimal,
    /// Multiplier applied to annual savings before any other computation.
    pub combined_multiplier: Decimal,
}

/// Factors used by every calculation unless a caller supplies its own.
pub const STANDARD_FACTORS: HiddenBenefitFactors = HiddenBenefitFactors {
    quality_improvement: dec!(0.15),
    error_reduction: dec!(0.10),
    productivity_boost: dec!(0.08),
    combined_multiplier: dec!(1.33),
};

impl Default for HiddenBenefitFactors {
    fn default() -> Self {
        STANDARD_FACTORS
    }
}

impl HiddenBenefitFactors {
    /// Applies the combined multiplier to a yearly savings figure.
    #[must_use]
    pub fn adjust(&self, annual_savings: Decimal) -> Decimal {
        annual_savings * self.combined_multiplier
    }

    /// Renders the factors as whole percentages.
    #[must_use]
    pub fn describe(&self) -> HiddenBenefits {
        HiddenBenefits {
            quality_improvement: as_percentage(self.quality_improvement),
            error_reduction: as_percentage(self.error_reduction),
            productivity_boost: as_percentage(self.productivity_boost),
            total_multiplier: as_percentage(self.combined_multiplier - Decimal::ONE),
        }
    }
}

fn as_percentage(factor: Decimal) -> String {
    let whole = (factor * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{whole}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_standard_factors() {
        let benefits = STANDARD_FACTORS.describe();
        assert_eq!(benefits.quality_improvement, "15%");
        assert_eq!(benefits.error_reduction, "10%");
        assert_eq!(benefits.productivity_boost, "8%");
        assert_eq!(benefits.total_multiplier, "33%");
    }

    #[test]
    fn test_adjust() {
        assert_eq!(STANDARD_FACTORS.adjust(dec!(75000)), dec!(99750));
    }

    #[test]
    fn test_custom_factors() {
        let factors = HiddenBenefitFactors {
            combined_multiplier: Decimal::ONE,
            ..STANDARD_FACTORS
        };
        assert_eq!(factors.adjust(dec!(100)), dec!(100));
        assert_eq!(factors.describe().total_multiplier, "0%");
    }
}
