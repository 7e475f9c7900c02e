use super::round_money;
use crate::value_objects::YearRecord;
use rust_decimal::Decimal;

/// Builds the year-by-year projection.
///
/// Accumulators keep full precision; only the emitted rows are rounded, so
/// rounding never compounds from one year to the next.
#[must_use]
pub fn yearly_breakdown(
    initial_investment: Decimal,
    annual_costs: Decimal,
    adjusted_annual_savings: Decimal,
    time_period: u32,
) -> Vec<YearRecord> {
    let mut cumulative_costs = initial_investment;
    let mut cumulative_savings = Decimal::ZERO;

    (1..=time_period)
        .map(|year| {
            cumulative_costs += annual_costs;
            cumulative_savings += adjusted_annual_savings;

            YearRecord {
                year,
                annual_costs: round_money(annual_costs),
                annual_savings: round_money(adjusted_annual_savings),
                cumulative_costs: round_money(cumulative_costs),
                cumulative_savings: round_money(cumulative_savings),
                net_position: round_money(cumulative_savings - cumulative_costs),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_rows() {
        let rows = yearly_breakdown(dec!(50000), dec!(10000), dec!(99750), 3);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].year, 1);
        assert_eq!(rows[0].cumulative_costs, dec!(60000));
        assert_eq!(rows[0].cumulative_savings, dec!(99750));
        assert_eq!(rows[0].net_position, dec!(39750));

        assert_eq!(rows[2].year, 3);
        assert_eq!(rows[2].cumulative_costs, dec!(80000));
        assert_eq!(rows[2].cumulative_savings, dec!(299250));
        assert_eq!(rows[2].net_position, dec!(219250));
    }

    #[test]
    fn test_rounding_does_not_compound() {
        // 0.004 per year rounds to 0.00 per row but accumulates to 0.04.
        let rows = yearly_breakdown(Decimal::ZERO, Decimal::ZERO, dec!(0.004), 10);
        assert_eq!(rows[0].annual_savings, dec!(0.00));
        assert_eq!(rows[0].cumulative_savings, dec!(0.00));
        assert_eq!(rows[9].cumulative_savings, dec!(0.04));
    }
}
