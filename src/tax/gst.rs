//! GST calculation engine for Indian tax compliance
//!
//! Each HSN/SAC group is taxed and rounded to paise on its own (half-up).
//! Invoice totals are the sums of those rounded group figures, so the group
//! table and the invoice totals always agree. The tax obtained by rounding
//! `subtotal * combined rate` once is kept alongside for display and can
//! differ from the authoritative sum by a few paise.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GstConfig;
use crate::tax::hsn::HsnGroup;
use crate::tax::regime::TaxRegime;
use crate::types::{GstError, GstResult};
use crate::utils::money::{percent_of, round_currency};

/// Tax amounts on one taxable value, each rounded to paise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponents {
    /// Central GST
    pub cgst: BigDecimal,
    /// State GST
    pub sgst: BigDecimal,
    /// Integrated GST
    pub igst: BigDecimal,
    /// `cgst + sgst + igst`
    pub total: BigDecimal,
}

impl Default for TaxComponents {
    fn default() -> Self {
        Self {
            cgst: BigDecimal::from(0),
            sgst: BigDecimal::from(0),
            igst: BigDecimal::from(0),
            total: BigDecimal::from(0),
        }
    }
}

impl TaxComponents {
    /// Tax on `taxable_value` under `regime`
    pub fn compute(taxable_value: &BigDecimal, regime: &TaxRegime) -> Self {
        let zero = BigDecimal::from(0);
        let (cgst, sgst, igst) = match regime {
            TaxRegime::IntraState {
                cgst_rate,
                sgst_rate,
            } => (
                percent_of(taxable_value, cgst_rate),
                percent_of(taxable_value, sgst_rate),
                zero,
            ),
            TaxRegime::InterState { igst_rate } => {
                (zero.clone(), zero, percent_of(taxable_value, igst_rate))
            }
        };
        let total = &cgst + &sgst + &igst;

        Self {
            cgst,
            sgst,
            igst,
            total,
        }
    }
}

/// Groups with their tax, plus invoice-level aggregates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Regime shared by every group
    pub regime: TaxRegime,
    /// Annotated groups in first-seen order
    pub groups: Vec<HsnGroup>,
    /// Sum of group CGST
    pub cgst: BigDecimal,
    /// Sum of group SGST
    pub sgst: BigDecimal,
    /// Sum of group IGST
    pub igst: BigDecimal,
    /// Sum of group totals; the authoritative tax for the invoice
    pub total_tax: BigDecimal,
    /// `round(subtotal * combined rate)`, display only
    pub invoice_level_tax: BigDecimal,
}

impl GstBreakdown {
    /// Sum of group taxable values
    pub fn taxable_value(&self) -> BigDecimal {
        self.groups.iter().map(|group| &group.taxable_value).sum()
    }

    /// `invoice_level_tax - total_tax`
    pub fn rounding_difference(&self) -> BigDecimal {
        &self.invoice_level_tax - &self.total_tax
    }
}

/// GST calculation engine
#[derive(Debug, Clone)]
pub struct GstCalculator {
    /// Upper bound for any rate, in percent
    max_rate: BigDecimal,
}

impl GstCalculator {
    pub fn new(max_rate: BigDecimal) -> Self {
        Self { max_rate }
    }

    pub fn from_config(config: &GstConfig) -> Self {
        Self::new(config.max_rate.clone())
    }

    /// Tax every group under `regime` and aggregate.
    ///
    /// Fails with `InvalidRegime` for out-of-bound rates and
    /// `InvalidTaxableValue` for a group with a negative taxable value.
    pub fn apply(&self, regime: &TaxRegime, groups: Vec<HsnGroup>) -> GstResult<GstBreakdown> {
        regime.validate(&self.max_rate)?;

        let zero = BigDecimal::from(0);
        if let Some(group) = groups.iter().find(|group| group.taxable_value < zero) {
            return Err(GstError::InvalidTaxableValue {
                subject: format!("classification code {}", group.code),
                value: group.taxable_value.clone(),
            });
        }

        let groups: Vec<HsnGroup> = groups
            .into_iter()
            .map(|mut group| {
                group.tax = TaxComponents::compute(&group.taxable_value, regime);
                group
            })
            .collect();

        let cgst: BigDecimal = groups.iter().map(|group| &group.tax.cgst).sum();
        let sgst: BigDecimal = groups.iter().map(|group| &group.tax.sgst).sum();
        let igst: BigDecimal = groups.iter().map(|group| &group.tax.igst).sum();
        let total_tax = &cgst + &sgst + &igst;

        let subtotal: BigDecimal = groups.iter().map(|group| &group.taxable_value).sum();
        let invoice_level_tax = percent_of(&subtotal, &regime.combined_rate());

        if invoice_level_tax != total_tax {
            debug!(
                total_tax = %total_tax,
                invoice_level_tax = %invoice_level_tax,
                "per-group rounding differs from invoice-level tax"
            );
        }

        Ok(GstBreakdown {
            regime: regime.clone(),
            groups,
            cgst: round_currency(&cgst),
            sgst: round_currency(&sgst),
            igst: round_currency(&igst),
            total_tax: round_currency(&total_tax),
            invoice_level_tax,
        })
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::from_config(&GstConfig::default())
    }
}
