//! Intra-state vs inter-state regime selection

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::GstConfig;
use crate::types::{GstError, GstResult, Party};
use crate::utils::validation::normalize_state;

/// The GST regime applied to every group of one invoice. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaxRegime {
    /// Seller and buyer in the same state: CGST + SGST
    IntraState {
        cgst_rate: BigDecimal,
        sgst_rate: BigDecimal,
    },
    /// Seller and buyer in different states: IGST
    InterState { igst_rate: BigDecimal },
}

impl TaxRegime {
    /// Split `combined_rate` evenly into CGST and SGST
    pub fn intra_state(combined_rate: BigDecimal) -> Self {
        let half_rate = combined_rate / BigDecimal::from(2);
        TaxRegime::IntraState {
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
        }
    }

    /// Charge `combined_rate` entirely as IGST
    pub fn inter_state(combined_rate: BigDecimal) -> Self {
        TaxRegime::InterState {
            igst_rate: combined_rate,
        }
    }

    pub fn is_intra_state(&self) -> bool {
        matches!(self, TaxRegime::IntraState { .. })
    }

    /// Sum of all component rates
    pub fn combined_rate(&self) -> BigDecimal {
        match self {
            TaxRegime::IntraState {
                cgst_rate,
                sgst_rate,
            } => cgst_rate + sgst_rate,
            TaxRegime::InterState { igst_rate } => igst_rate.clone(),
        }
    }

    /// Reject negative rates, rates above `max_rate`, and unequal CGST/SGST
    pub fn validate(&self, max_rate: &BigDecimal) -> GstResult<()> {
        let zero = BigDecimal::from(0);
        let check = |name: &str, rate: &BigDecimal| {
            if *rate < zero || rate > max_rate {
                Err(GstError::InvalidRegime(format!(
                    "{} rate {} is outside 0..={}",
                    name, rate, max_rate
                )))
            } else {
                Ok(())
            }
        };

        match self {
            TaxRegime::IntraState {
                cgst_rate,
                sgst_rate,
            } => {
                check("CGST", cgst_rate)?;
                check("SGST", sgst_rate)?;
                check("combined", &(cgst_rate + sgst_rate))?;
                if cgst_rate != sgst_rate {
                    return Err(GstError::InvalidRegime(format!(
                        "CGST and SGST rates must be equal: {} != {}",
                        cgst_rate, sgst_rate
                    )));
                }
                Ok(())
            }
            TaxRegime::InterState { igst_rate } => check("IGST", igst_rate),
        }
    }
}

/// Picks the regime from the seller's and buyer's states
#[derive(Debug, Clone)]
pub struct TaxRegimeResolver {
    combined_rate: BigDecimal,
}

impl TaxRegimeResolver {
    pub fn new(combined_rate: BigDecimal) -> Self {
        Self { combined_rate }
    }

    pub fn from_config(config: &GstConfig) -> Self {
        Self::new(config.combined_rate.clone())
    }

    /// Compare the states case- and whitespace-insensitively.
    ///
    /// A blank state on either side fails with `IndeterminateRegime`.
    pub fn resolve(&self, seller_state: &str, buyer_state: &str) -> GstResult<TaxRegime> {
        let seller = normalize_state(seller_state);
        let buyer = normalize_state(buyer_state);

        if seller.is_empty() {
            return Err(GstError::IndeterminateRegime(
                "seller state is missing".to_string(),
            ));
        }
        if buyer.is_empty() {
            return Err(GstError::IndeterminateRegime(
                "buyer state is missing".to_string(),
            ));
        }

        let regime = if seller == buyer {
            TaxRegime::intra_state(self.combined_rate.clone())
        } else {
            TaxRegime::inter_state(self.combined_rate.clone())
        };
        trace!(
            %seller,
            %buyer,
            intra_state = regime.is_intra_state(),
            "resolved GST regime"
        );
        Ok(regime)
    }

    /// Resolve from the parties' optional state fields
    pub fn resolve_parties(&self, seller: &Party, buyer: &Party) -> GstResult<TaxRegime> {
        let seller_state = seller.state().ok_or_else(|| {
            GstError::IndeterminateRegime(format!("seller '{}' has no state", seller.name))
        })?;
        let buyer_state = buyer.state().ok_or_else(|| {
            GstError::IndeterminateRegime(format!("buyer '{}' has no state", buyer.name))
        })?;
        self.resolve(seller_state, buyer_state)
    }
}

impl Default for TaxRegimeResolver {
    fn default() -> Self {
        Self::from_config(&GstConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_state_is_intra_state() {
        let resolver = TaxRegimeResolver::default();
        let regime = resolver.resolve("Rajasthan", "  rajasthan ").unwrap();
        assert_eq!(
            regime,
            TaxRegime::IntraState {
                cgst_rate: BigDecimal::from(9),
                sgst_rate: BigDecimal::from(9),
            }
        );
        assert_eq!(regime.combined_rate(), BigDecimal::from(18));
    }

    #[test]
    fn test_different_state_is_inter_state() {
        let resolver = TaxRegimeResolver::default();
        let regime = resolver.resolve("Rajasthan", "Maharashtra").unwrap();
        assert_eq!(
            regime,
            TaxRegime::InterState {
                igst_rate: BigDecimal::from(18)
            }
        );
    }

    #[test]
    fn test_missing_state_fails_closed() {
        let resolver = TaxRegimeResolver::default();
        assert!(matches!(
            resolver.resolve("", "Goa"),
            Err(GstError::IndeterminateRegime(_))
        ));
        assert!(matches!(
            resolver.resolve("Goa", "   "),
            Err(GstError::IndeterminateRegime(_))
        ));

        let mut buyer = Party::new("Brand", "Goa");
        buyer.state = None;
        assert!(matches!(
            resolver.resolve_parties(&Party::new("Creator", "Goa"), &buyer),
            Err(GstError::IndeterminateRegime(_))
        ));
    }

    #[test]
    fn test_configured_rate() {
        let resolver = TaxRegimeResolver::new(BigDecimal::from(5));
        let regime = resolver.resolve("Kerala", "Kerala").unwrap();
        assert_eq!(regime.combined_rate(), BigDecimal::from(5));
        assert!(regime.validate(&BigDecimal::from(100)).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        let max = BigDecimal::from(100);
        assert!(matches!(
            TaxRegime::inter_state(BigDecimal::from(-1)).validate(&max),
            Err(GstError::InvalidRegime(_))
        ));
        assert!(matches!(
            TaxRegime::inter_state(BigDecimal::from(101)).validate(&max),
            Err(GstError::InvalidRegime(_))
        ));
        let uneven = TaxRegime::IntraState {
            cgst_rate: BigDecimal::from(10),
            sgst_rate: BigDecimal::from(8),
        };
        assert!(matches!(
            uneven.validate(&max),
            Err(GstError::InvalidRegime(_))
        ));
    }
}
