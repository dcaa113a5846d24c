//! Currency rounding and display helpers

use bigdecimal::{BigDecimal, RoundingMode};

/// Decimal places kept for rupee amounts
pub const CURRENCY_SCALE: i64 = 2;

/// Round an amount to paise, ties away from zero
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(CURRENCY_SCALE, RoundingMode::HalfUp)
}

/// `rate`% of `amount`, rounded to paise
pub fn percent_of(amount: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    round_currency(&((amount * rate) / BigDecimal::from(100)))
}

/// Render an amount as printed on the invoice, e.g. `₹11800.00`
pub fn format_inr(amount: &BigDecimal) -> String {
    format!("₹{}", round_currency(amount))
}

/// Render a percentage exactly, without trailing zeros, e.g. `9`, `2.5`, `0.125`
pub fn format_rate(rate: &BigDecimal) -> String {
    rate.normalized().to_plain_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(&dec("0.045")), dec("0.05"));
        assert_eq!(round_currency(&dec("0.055")), dec("0.06"));
        assert_eq!(round_currency(&dec("0.044")), dec("0.04"));
        assert_eq!(round_currency(&dec("12")).to_string(), "12.00");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(&dec("10000"), &dec("9")), dec("900"));
        assert_eq!(percent_of(&dec("333.33"), &dec("18")), dec("60.00"));
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(&dec("11800")), "₹11800.00");
        assert_eq!(format_inr(&dec("0.005")), "₹0.01");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(&BigDecimal::from(9)), "9");
        assert_eq!(format_rate(&BigDecimal::from(10)), "10");
        assert_eq!(format_rate(&dec("2.50")), "2.5");
        assert_eq!(format_rate(&dec("0.125")), "0.125");
        assert_eq!(format_rate(&dec("0.0625")), "0.0625");

        let half = BigDecimal::from(18) / BigDecimal::from(2);
        assert_eq!(format_rate(&half), "9");
    }
}
