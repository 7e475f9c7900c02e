use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as US dollars with thousands separators, e.g. `$1,234.50`.
#[must_use]
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a figure with two decimals, e.g. `398.75`.
#[must_use]
pub fn fixed(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money() {
        assert_eq!(money(dec!(0)), "$0.00");
        assert_eq!(money(dec!(999.5)), "$999.50");
        assert_eq!(money(dec!(1000)), "$1,000.00");
        assert_eq!(money(dec!(398750)), "$398,750.00");
        assert_eq!(money(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(money(dec!(-45250.5)), "-$45,250.50");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(dec!(398.75)), "398.75");
        assert_eq!(fixed(dec!(5)), "5.00");
        assert_eq!(fixed(dec!(0.555)), "0.56");
    }
}
