use super::breakdown::yearly_breakdown;
use super::factors::HiddenBenefitFactors;
use super::round_money;
use crate::error::RoiError;
use crate::value_objects::{RawScenarioInput, RoiResult, ScenarioInput};
use rust_decimal::Decimal;
use tracing::debug;

/// Computes ROI projections with a fixed set of hidden-benefit factors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoiCalculator {
    factors: HiddenBenefitFactors,
}

impl RoiCalculator {
    /// Creates a calculator with the given factors.
    #[must_use]
    pub const fn new(factors: HiddenBenefitFactors) -> Self {
        Self { factors }
    }

    /// Returns the factors applied by this calculator.
    #[must_use]
    pub fn factors(&self) -> &HiddenBenefitFactors {
        &self.factors
    }

    /// Computes the projection for a validated input.
    ///
    /// Aggregates are rounded to two decimals at the end; intermediate values
    /// keep full precision. `net_benefit` is the difference of the rounded
    /// totals so the three figures always reconcile.
    #[must_use]
    pub fn calculate(&self, input: &ScenarioInput) -> RoiResult {
        debug!(
            initial_investment = %input.initial_investment(),
            annual_costs = %input.annual_costs(),
            annual_savings = %input.annual_savings(),
            time_period = input.time_period(),
            "calculating ROI"
        );

        let years = Decimal::from(input.time_period());
        let initial_investment = input.initial_investment();
        let annual_costs = input.annual_costs();

        let adjusted_annual_savings = self.factors.adjust(input.annual_savings());
        let total_costs = initial_investment + annual_costs * years;
        let total_savings = adjusted_annual_savings * years;
        let net_benefit = total_savings - total_costs;

        let roi_percentage = if total_costs > Decimal::ZERO {
            net_benefit / total_costs * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };

        // Savings that never outrun costs saturate at the full horizon.
        let annual_net_savings = adjusted_annual_savings - annual_costs;
        let payback_period = if annual_net_savings > Decimal::ZERO {
            initial_investment / annual_net_savings
        } else {
            years
        };

        let total_savings = round_money(total_savings);
        let total_costs = round_money(total_costs);

        RoiResult {
            roi_percentage: round_money(roi_percentage),
            payback_period: round_money(payback_period),
            net_benefit: total_savings - total_costs,
            total_savings,
            total_costs,
            adjusted_annual_savings: round_money(adjusted_annual_savings),
            yearly_breakdown: yearly_breakdown(
                initial_investment,
                annual_costs,
                adjusted_annual_savings,
                input.time_period(),
            ),
            hidden_benefits: self.factors.describe(),
        }
    }

    /// Validates raw figures and computes the projection.
    ///
    /// # Errors
    /// Returns [`RoiError::InvalidInput`] if validation fails; no partial
    /// result is produced.
    pub fn calculate_raw(&self, raw: &RawScenarioInput) -> Result<RoiResult, RoiError> {
        let input = raw.validate()?;
        Ok(self.calculate(&input))
    }
}

/// Computes the projection with the standard factors.
#[must_use]
pub fn calculate_roi(input: &ScenarioInput) -> RoiResult {
    RoiCalculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::STANDARD_FACTORS;
    use rust_decimal_macros::dec;

    fn input(ii: Decimal, ac: Decimal, sav: Decimal, years: i64) -> ScenarioInput {
        ScenarioInput::new(ii, ac, sav, years).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate_roi(&input(dec!(50000), dec!(10000), dec!(75000), 5));

        assert_eq!(result.adjusted_annual_savings, dec!(99750));
        assert_eq!(result.total_costs, dec!(100000));
        assert_eq!(result.total_savings, dec!(498750));
        assert_eq!(result.net_benefit, dec!(398750));
        assert_eq!(result.roi_percentage, dec!(398.75));
        assert_eq!(result.payback_period, dec!(0.56));
        assert_eq!(result.yearly_breakdown.len(), 5);
        assert_eq!(result.hidden_benefits, STANDARD_FACTORS.describe());
    }

    #[test]
    fn test_net_benefit_reconciles() {
        let cases = [
            (dec!(12345.67), dec!(890.12), dec!(3456.78), 7),
            (dec!(0.01), Decimal::ZERO, dec!(0.01), 1),
            (dec!(99999.99), dec!(123456.78), dec!(1000.01), 50),
            (dec!(1.11), dec!(2.22), dec!(3.33), 13),
        ];
        for (ii, ac, sav, years) in cases {
            let result = calculate_roi(&input(ii, ac, sav, years));
            assert_eq!(
                result.total_savings - result.total_costs,
                result.net_benefit
            );
        }
    }

    #[test]
    fn test_breakdown_is_one_indexed_and_complete() {
        for years in [1, 2, 17, 50] {
            let result = calculate_roi(&input(dec!(1000), dec!(100), dec!(500), years));
            assert_eq!(result.yearly_breakdown.len(), years as usize);
            for (i, row) in result.yearly_breakdown.iter().enumerate() {
                assert_eq!(row.year as usize, i + 1);
            }
        }
    }

    #[test]
    fn test_single_year_matches_totals() {
        let result = calculate_roi(&input(dec!(50000), dec!(10000), dec!(75000), 1));
        let row = &result.yearly_breakdown[0];

        assert_eq!(row.year, 1);
        assert_eq!(row.cumulative_costs, result.total_costs);
        assert_eq!(row.cumulative_savings, result.total_savings);
        assert_eq!(row.net_position, result.net_benefit);
    }

    #[test]
    fn test_last_row_matches_totals() {
        let result = calculate_roi(&input(dec!(50000), dec!(10000), dec!(75000), 5));
        let last = result.yearly_breakdown.last().unwrap();
        assert_eq!(last.cumulative_costs, result.total_costs);
        assert_eq!(last.cumulative_savings, result.total_savings);
        assert_eq!(last.net_position, result.net_benefit);
    }

    #[test]
    fn test_idempotent() {
        let scenario = input(dec!(42000.42), dec!(1234.56), dec!(20000), 12);
        let calculator = RoiCalculator::default();
        assert_eq!(calculator.calculate(&scenario), calculator.calculate(&scenario));
    }

    #[test]
    fn test_payback_saturates_when_costs_dominate() {
        // 10000 * 1.33 = 13300 <= 20000
        let result = calculate_roi(&input(dec!(50000), dec!(20000), dec!(10000), 8));
        assert_eq!(result.payback_period, dec!(8));

        // Break-even exactly: 10000 * 1.33 == 13300
        let result = calculate_roi(&input(dec!(50000), dec!(13300), dec!(10000), 3));
        assert_eq!(result.payback_period, dec!(3));
    }

    #[test]
    fn test_negative_roi() {
        let result = calculate_roi(&input(dec!(100000), dec!(5000), dec!(1000), 2));
        assert!(result.roi_percentage < Decimal::ZERO);
        assert!(result.net_benefit < Decimal::ZERO);
        // 1330 - 5000 < 0
        assert_eq!(result.payback_period, dec!(2));
    }

    #[test]
    fn test_zero_annual_costs() {
        let result = calculate_roi(&input(dec!(13300), Decimal::ZERO, dec!(10000), 4));
        assert_eq!(result.total_costs, dec!(13300));
        assert_eq!(result.payback_period, dec!(1));
        assert!(result.yearly_breakdown.iter().all(|r| r.annual_costs.is_zero()));
    }

    #[test]
    fn test_calculate_raw_rejects_invalid() {
        let raw = RawScenarioInput {
            initial_investment: Some(dec!(1000)),
            annual_costs: Some(dec!(10)),
            annual_savings: Some(Decimal::ZERO),
            time_period: Some(5),
        };
        let err = RoiCalculator::default().calculate_raw(&raw).unwrap_err();
        assert!(matches!(err, RoiError::InvalidInput(_)));
    }

    #[test]
    fn test_custom_multiplier() {
        let factors = HiddenBenefitFactors {
            combined_multiplier: Decimal::ONE,
            ..STANDARD_FACTORS
        };
        let result = RoiCalculator::new(factors)
            .calculate(&input(dec!(1000), Decimal::ZERO, dec!(500), 4));
        assert_eq!(result.total_savings, dec!(2000));
        assert_eq!(result.roi_percentage, dec!(100));
        assert_eq!(result.payback_period, dec!(2));
    }

    #[test]
    fn test_sub_cent_inputs_use_full_precision() {
        // 100.004 * 1.33 * 50 = 6650.266
        let result = calculate_roi(&input(dec!(1000), Decimal::ZERO, dec!(100.004), 50));
        assert_eq!(result.total_savings, dec!(6650.27));
        assert_eq!(result.adjusted_annual_savings, dec!(133.01));

        let result = calculate_roi(&input(dec!(1000), Decimal::ZERO, dec!(0.004), 5));
        assert_eq!(result.total_savings, dec!(0.03));
    }

    #[test]
    fn test_extreme_inputs_stay_in_range() {
        use crate::value_objects::MAX_AMOUNT;

        let tiny = dec!(0.0000000001);
        let result = calculate_roi(&input(tiny, Decimal::ZERO, MAX_AMOUNT, 50));
        assert!(result.roi_percentage > Decimal::ZERO);

        // Net annual savings of 0.000000000033 against the largest investment.
        let result = calculate_roi(&input(MAX_AMOUNT, tiny, tiny, 50));
        assert!(result.payback_period > Decimal::ZERO);
    }
}
