//! Amount in words using the Indian numbering system (lakh, crore)

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};

use crate::types::{GstError, GstResult};

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Default suffix appended after the rupee words
pub const DEFAULT_WORDS_SUFFIX: &str = "Rupees Only";

/// Converts rupee amounts to the long-form words printed on a tax invoice.
///
/// Only the whole-rupee part is spelled out; paise are truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInWordsFormatter {
    suffix: String,
}

impl Default for AmountInWordsFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_SUFFIX)
    }
}

impl AmountInWordsFormatter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Spell out `amount`, e.g. `1,18,000` -> "One Lakh Eighteen Thousand Rupees Only"
    pub fn to_words(&self, amount: &BigDecimal) -> GstResult<String> {
        if *amount < BigDecimal::from(0) {
            return Err(GstError::InvalidAmount(format!(
                "cannot spell a negative amount: {}",
                amount
            )));
        }

        let (rupees, _) = amount
            .with_scale_round(0, RoundingMode::Down)
            .into_bigint_and_exponent();

        let words = if rupees.is_zero() {
            "Zero".to_string()
        } else {
            spell_rupees(&rupees)
        };

        if self.suffix.is_empty() {
            Ok(words)
        } else {
            Ok(format!("{} {}", words, self.suffix))
        }
    }
}

/// Spell out `amount` with the default suffix
pub fn to_words(amount: &BigDecimal) -> GstResult<String> {
    AmountInWordsFormatter::default().to_words(amount)
}

/// Amounts of a crore or more are split into a crore count and a remainder,
/// so the count itself may be spelled in crores again
fn spell_rupees(n: &BigInt) -> String {
    match n.to_u64() {
        Some(small) if small < CRORE => spell(small),
        _ => {
            let crore = BigInt::from(CRORE);
            let head = format!("{} Crore", spell_rupees(&(n / &crore)));
            let rest = n % &crore;
            if rest.is_zero() {
                head
            } else {
                format!("{} {}", head, spell_rupees(&rest))
            }
        }
    }
}

/// Spell a count below one crore
fn spell(n: u64) -> String {
    match n {
        0..=19 => ONES[n as usize].to_string(),
        20..=99 => join(TENS[(n / 10) as usize].to_string(), n % 10),
        100..=999 => join(format!("{} Hundred", ONES[(n / 100) as usize]), n % 100),
        _ if n < LAKH => join(format!("{} Thousand", spell(n / THOUSAND)), n % THOUSAND),
        _ => join(format!("{} Lakh", spell(n / LAKH)), n % LAKH),
    }
}

fn join(head: String, rest: u64) -> String {
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, spell(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn words(value: &str) -> String {
        to_words(&BigDecimal::from_str(value).unwrap()).unwrap()
    }

    #[test]
    fn test_scale_words() {
        assert_eq!(words("0"), "Zero Rupees Only");
        assert_eq!(words("100"), "One Hundred Rupees Only");
        assert_eq!(words("100000"), "One Lakh Rupees Only");
        assert_eq!(words("10000000"), "One Crore Rupees Only");
    }

    #[test]
    fn test_mixed_segments() {
        assert_eq!(words("11800"), "Eleven Thousand Eight Hundred Rupees Only");
        assert_eq!(words("19"), "Nineteen Rupees Only");
        assert_eq!(words("90"), "Ninety Rupees Only");
        assert_eq!(words("1005"), "One Thousand Five Rupees Only");
        assert_eq!(
            words("1234567"),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees Only"
        );
        assert_eq!(words("250000001"), "Twenty Five Crore One Rupees Only");
    }

    #[test]
    fn test_large_crore_count_recurses() {
        assert_eq!(words("10000000000"), "One Thousand Crore Rupees Only");
    }

    #[test]
    fn test_amount_beyond_u64() {
        assert_eq!(
            words("100000000000000000000"),
            "Ten Lakh Crore Crore Rupees Only"
        );
        assert_eq!(
            words("100000000000000000005.50"),
            "Ten Lakh Crore Crore Five Rupees Only"
        );
    }

    #[test]
    fn test_paise_truncated() {
        assert_eq!(words("99.99"), "Ninety Nine Rupees Only");
        assert_eq!(words("0.75"), "Zero Rupees Only");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = to_words(&BigDecimal::from(-5));
        assert!(matches!(result, Err(GstError::InvalidAmount(_))));
    }

    #[test]
    fn test_custom_suffix() {
        let formatter = AmountInWordsFormatter::new("Only");
        assert_eq!(
            formatter.to_words(&BigDecimal::from(42)).unwrap(),
            "Forty Two Only"
        );
    }
}
