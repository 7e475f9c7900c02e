//! Scenario inputs: the raw transport shape and its validated form.

use crate::error::RoiError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shortest accepted evaluation horizon in years.
pub const MIN_TIME_PERIOD: u32 = 1;

/// Longest accepted evaluation horizon in years.
pub const MAX_TIME_PERIOD: u32 = 50;

/// Largest accepted monetary input.
pub const MAX_AMOUNT: Decimal = dec!(9999999999999.99);

/// Most decimal places a monetary input may carry.
///
/// Together with [`MAX_AMOUNT`] this bounds every quotient the engine takes,
/// so projections always fit in a `Decimal`. Matches the `NUMERIC(23, 10)`
/// input columns.
pub const MAX_AMOUNT_SCALE: u32 = 10;

/// A validated set of scenario figures.
///
/// Construction goes through [`ScenarioInput::new`] or
/// [`RawScenarioInput::validate`], so every value of this type satisfies:
/// - `initial_investment > 0`
/// - `annual_costs >= 0`
/// - `annual_savings > 0`
/// - `time_period` in `[MIN_TIME_PERIOD, MAX_TIME_PERIOD]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScenarioInput {
    #[serde(with = "rust_decimal::serde::float")]
    initial_investment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    annual_costs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    annual_savings: Decimal,
    time_period: u32,
}

impl ScenarioInput {
    /// Validates the four figures and builds a `ScenarioInput`.
    ///
    /// Amounts are kept exactly as given; only the computed outputs are
    /// rounded.
    ///
    /// # Errors
    /// Returns [`RoiError::InvalidInput`] on the first rule that fails.
    pub fn new(
        initial_investment: Decimal,
        annual_costs: Decimal,
        annual_savings: Decimal,
        time_period: i64,
    ) -> Result<Self, RoiError> {
        if initial_investment <= Decimal::ZERO {
            return Err(RoiError::invalid(
                "Initial investment must be a positive number",
            ));
        }
        let initial_investment = within_limits("Initial investment", initial_investment)?;

        if annual_costs < Decimal::ZERO {
            return Err(RoiError::invalid(
                "Annual costs must be a positive number or zero",
            ));
        }
        let annual_costs = within_limits("Annual costs", annual_costs)?;

        if annual_savings <= Decimal::ZERO {
            return Err(RoiError::invalid("Annual savings must be a positive number"));
        }
        let annual_savings = within_limits("Annual savings", annual_savings)?;

        let time_period = u32::try_from(time_period)
            .ok()
            .filter(|years| (MIN_TIME_PERIOD..=MAX_TIME_PERIOD).contains(years))
            .ok_or_else(time_period_error)?;

        Ok(Self {
            initial_investment,
            annual_costs,
            annual_savings,
            time_period,
        })
    }

    /// Up-front investment.
    #[must_use]
    pub fn initial_investment(&self) -> Decimal {
        self.initial_investment
    }

    /// Recurring yearly operating costs.
    #[must_use]
    pub fn annual_costs(&self) -> Decimal {
        self.annual_costs
    }

    /// Yearly savings before hidden benefits are applied.
    #[must_use]
    pub fn annual_savings(&self) -> Decimal {
        self.annual_savings
    }

    /// Evaluation horizon in years.
    #[must_use]
    pub fn time_period(&self) -> u32 {
        self.time_period
    }
}

/// Scenario figures as delivered by a transport, before validation.
///
/// Every field is optional so a missing value can be reported as a
/// validation failure rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScenarioInput {
    /// Up-front investment.
    #[serde(default)]
    pub initial_investment: Option<Decimal>,
    /// Recurring yearly operating costs.
    #[serde(default)]
    pub annual_costs: Option<Decimal>,
    /// Yearly savings before hidden benefits.
    #[serde(default)]
    pub annual_savings: Option<Decimal>,
    /// Evaluation horizon in years.
    #[serde(default)]
    pub time_period: Option<i64>,
}

impl RawScenarioInput {
    /// Names of the fields that are absent, in declaration order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.initial_investment.is_none() {
            missing.push("initial_investment");
        }
        if self.annual_costs.is_none() {
            missing.push("annual_costs");
        }
        if self.annual_savings.is_none() {
            missing.push("annual_savings");
        }
        if self.time_period.is_none() {
            missing.push("time_period");
        }
        missing
    }

    /// Validates the raw figures.
    ///
    /// # Errors
    /// Returns [`RoiError::InvalidInput`] if a field is absent or out of range.
    pub fn validate(&self) -> Result<ScenarioInput, RoiError> {
        let result = self.check();
        if let Err(RoiError::InvalidInput(reason)) = &result {
            warn!(%reason, "rejected scenario input");
        }
        result
    }

    fn check(&self) -> Result<ScenarioInput, RoiError> {
        let initial_investment = self.initial_investment.ok_or_else(|| {
            RoiError::invalid("Initial investment must be a positive number")
        })?;
        let annual_costs = self.annual_costs.ok_or_else(|| {
            RoiError::invalid("Annual costs must be a positive number or zero")
        })?;
        let annual_savings = self
            .annual_savings
            .ok_or_else(|| RoiError::invalid("Annual savings must be a positive number"))?;
        let time_period = self.time_period.ok_or_else(time_period_error)?;

        ScenarioInput::new(initial_investment, annual_costs, annual_savings, time_period)
    }
}

impl TryFrom<RawScenarioInput> for ScenarioInput {
    type Error = RoiError;

    fn try_from(raw: RawScenarioInput) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<ScenarioInput> for RawScenarioInput {
    fn from(input: ScenarioInput) -> Self {
        Self {
            initial_investment: Some(input.initial_investment),
            annual_costs: Some(input.annual_costs),
            annual_savings: Some(input.annual_savings),
            time_period: Some(i64::from(input.time_period)),
        }
    }
}

/// Checks the magnitude and precision of a non-negative amount and strips
/// trailing zeros.
fn within_limits(label: &str, value: Decimal) -> Result<Decimal, RoiError> {
    if value > MAX_AMOUNT {
        return Err(RoiError::invalid(format!(
            "{label} must not exceed {MAX_AMOUNT}"
        )));
    }
    let value = value.normalize();
    if value.scale() > MAX_AMOUNT_SCALE {
        return Err(RoiError::invalid(format!(
            "{label} must have at most {MAX_AMOUNT_SCALE} decimal places"
        )));
    }
    Ok(value)
}

fn time_period_error() -> RoiError {
    RoiError::invalid(format!(
        "Time period must be between {MIN_TIME_PERIOD} and {MAX_TIME_PERIOD} years"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(ii: Decimal, ac: Decimal, sav: Decimal, years: i64) -> RawScenarioInput {
        RawScenarioInput {
            initial_investment: Some(ii),
            annual_costs: Some(ac),
            annual_savings: Some(sav),
            time_period: Some(years),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = raw(dec!(50000), dec!(10000), dec!(75000), 5)
            .validate()
            .unwrap();
        assert_eq!(input.initial_investment(), dec!(50000));
        assert_eq!(input.annual_costs(), dec!(10000));
        assert_eq!(input.annual_savings(), dec!(75000));
        assert_eq!(input.time_period(), 5);
    }

    #[test]
    fn test_zero_annual_costs_accepted() {
        let input = raw(dec!(1000), Decimal::ZERO, dec!(500), 3).validate();
        assert!(input.is_ok());
    }

    #[test]
    fn test_rejects_non_positive_investment() {
        for value in [Decimal::ZERO, dec!(-1)] {
            let err = raw(value, dec!(10), dec!(10), 1).validate().unwrap_err();
            assert_eq!(
                err,
                RoiError::invalid("Initial investment must be a positive number")
            );
        }
    }

    #[test]
    fn test_rejects_negative_costs() {
        let err = raw(dec!(10), dec!(-0.01), dec!(10), 1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            RoiError::invalid("Annual costs must be a positive number or zero")
        );
    }

    #[test]
    fn test_rejects_zero_or_missing_savings() {
        let zero = raw(dec!(10), dec!(10), Decimal::ZERO, 1).validate();
        assert!(matches!(zero, Err(RoiError::InvalidInput(_))));

        let missing = RawScenarioInput {
            annual_savings: None,
            ..raw(dec!(10), dec!(10), dec!(10), 1)
        };
        assert!(matches!(missing.validate(), Err(RoiError::InvalidInput(_))));
    }

    #[test]
    fn test_time_period_bounds() {
        assert!(raw(dec!(10), dec!(1), dec!(10), 1).validate().is_ok());
        assert!(raw(dec!(10), dec!(1), dec!(10), 50).validate().is_ok());

        for years in [0, 51, -3, i64::MAX] {
            let err = raw(dec!(10), dec!(1), dec!(10), years)
                .validate()
                .unwrap_err();
            assert_eq!(
                err,
                RoiError::invalid("Time period must be between 1 and 50 years")
            );
        }
    }

    #[test]
    fn test_rejects_amounts_above_limit() {
        let err = raw(dec!(10000000000000), dec!(1), dec!(10), 1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().starts_with("Initial investment must not exceed"));
        assert!(raw(MAX_AMOUNT, MAX_AMOUNT, MAX_AMOUNT, 50).validate().is_ok());
    }

    #[test]
    fn test_sub_cent_amounts_kept_exact() {
        let input = ScenarioInput::new(dec!(0.001), dec!(0.004), dec!(0.004), 5).unwrap();
        assert_eq!(input.initial_investment(), dec!(0.001));
        assert_eq!(input.annual_costs(), dec!(0.004));
        assert_eq!(input.annual_savings(), dec!(0.004));

        let input = ScenarioInput::new(dec!(100.005), Decimal::ZERO, dec!(1.234), 2).unwrap();
        assert_eq!(input.initial_investment(), dec!(100.005));
        assert_eq!(input.annual_savings(), dec!(1.234));
    }

    #[test]
    fn test_sub_cent_negative_costs_rejected() {
        let err = ScenarioInput::new(dec!(1000), dec!(-0.004), dec!(10), 5).unwrap_err();
        assert_eq!(
            err,
            RoiError::invalid("Annual costs must be a positive number or zero")
        );
    }

    #[test]
    fn test_precision_limit() {
        assert!(ScenarioInput::new(dec!(0.0000000001), Decimal::ZERO, dec!(1), 1).is_ok());
        // Trailing zeros do not count towards the limit.
        assert!(ScenarioInput::new(dec!(1.000000000000), Decimal::ZERO, dec!(1), 1).is_ok());

        let err = ScenarioInput::new(dec!(0.00000000001), Decimal::ZERO, dec!(1), 1).unwrap_err();
        assert_eq!(
            err,
            RoiError::invalid("Initial investment must have at most 10 decimal places")
        );
    }

    #[test]
    fn test_missing_fields() {
        let raw = RawScenarioInput {
            annual_costs: Some(dec!(1)),
            ..Default::default()
        };
        assert_eq!(
            raw.missing_fields(),
            vec!["initial_investment", "annual_savings", "time_period"]
        );
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let raw: RawScenarioInput = serde_json::from_str(
            r#"{"initial_investment": 50000, "annual_costs": "10000.50", "annual_savings": 75000.25, "time_period": 5}"#,
        )
        .unwrap();
        let input = raw.validate().unwrap();
        assert_eq!(input.annual_costs(), dec!(10000.50));
        assert_eq!(input.annual_savings(), dec!(75000.25));
    }
}
