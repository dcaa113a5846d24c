//! Single entry point that turns an invoice into its tax breakdown and totals

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GstConfig;
use crate::tax::{GstBreakdown, GstCalculator, HsnGrouper, TaxRegimeResolver};
use crate::traits::CatalogLookup;
use crate::types::{GstResult, Invoice, Party};
use crate::utils::money::round_currency;
use crate::utils::words::AmountInWordsFormatter;

/// Everything a renderer needs to print an invoice's money figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of the per-group taxable values, each rounded to paise
    pub subtotal: BigDecimal,
    /// Regime, per-group tax and aggregates
    pub tax_breakdown: GstBreakdown,
    /// `subtotal + tax_breakdown.total_tax`
    pub net_amount: BigDecimal,
    /// `net_amount` in words
    pub net_amount_words: String,
}

/// Outcome of comparing amounts stored with an invoice against computed ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAmountCheck {
    pub mismatches: Vec<RecordedAmountMismatch>,
}

impl RecordedAmountCheck {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAmountMismatch {
    /// `tax_amount` or `net_amount`
    pub field: String,
    pub recorded: BigDecimal,
    pub computed: BigDecimal,
}

impl InvoiceTotals {
    pub fn total_tax(&self) -> &BigDecimal {
        &self.tax_breakdown.total_tax
    }

    /// Compare the invoice's recorded tax/net amounts, if any, after rounding to paise
    pub fn check_recorded(&self, invoice: &Invoice) -> RecordedAmountCheck {
        let candidates = [
            ("tax_amount", &invoice.recorded_tax_amount, &self.tax_breakdown.total_tax),
            ("net_amount", &invoice.recorded_net_amount, &self.net_amount),
        ];

        let mismatches = candidates
            .into_iter()
            .filter_map(|(field, recorded, computed)| {
                let recorded = round_currency(recorded.as_ref()?);
                (recorded != *computed).then(|| RecordedAmountMismatch {
                    field: field.to_string(),
                    recorded,
                    computed: computed.clone(),
                })
            })
            .collect();

        RecordedAmountCheck { mismatches }
    }
}

/// Runs regime resolution, grouping, tax calculation and wording in order
#[derive(Debug, Clone)]
pub struct InvoiceTotalsAssembler {
    resolver: TaxRegimeResolver,
    grouper: HsnGrouper,
    calculator: GstCalculator,
    words: AmountInWordsFormatter,
}

impl InvoiceTotalsAssembler {
    /// Build an assembler from a validated configuration
    pub fn new(config: &GstConfig) -> GstResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: &GstConfig) -> Self {
        Self {
            resolver: TaxRegimeResolver::from_config(config),
            grouper: HsnGrouper::from_config(config),
            calculator: GstCalculator::from_config(config),
            words: AmountInWordsFormatter::new(config.words_suffix.clone()),
        }
    }

    /// Compute totals for `invoice` sold by `seller` to `buyer`.
    ///
    /// Inputs are only read. Either every figure is returned, consistent with
    /// the others, or one error explains why none could be computed.
    pub fn assemble<C>(
        &self,
        invoice: &Invoice,
        seller: &Party,
        buyer: &Party,
        catalog: &C,
    ) -> GstResult<InvoiceTotals>
    where
        C: CatalogLookup + ?Sized,
    {
        if !seller.has_valid_registration() {
            warn!(
                invoice = %invoice.number,
                seller = %seller.name,
                "seller has no valid GSTIN"
            );
        }

        let regime = self.resolver.resolve_parties(seller, buyer)?;
        let groups = self.grouper.group(&invoice.line_items, catalog)?;
        let tax_breakdown = self.calculator.apply(&regime, groups)?;

        let subtotal: BigDecimal = tax_breakdown
            .groups
            .iter()
            .map(|group| round_currency(&group.taxable_value))
            .sum();
        let subtotal = round_currency(&subtotal);
        let net_amount = &subtotal + &tax_breakdown.total_tax;
        let net_amount_words = self.words.to_words(&net_amount)?;

        let totals = InvoiceTotals {
            subtotal,
            tax_breakdown,
            net_amount,
            net_amount_words,
        };

        for mismatch in totals.check_recorded(invoice).mismatches {
            warn!(
                invoice = %invoice.number,
                field = %mismatch.field,
                recorded = %mismatch.recorded,
                computed = %mismatch.computed,
                "recorded amount differs from computed amount"
            );
        }

        debug!(
            invoice = %invoice.number,
            subtotal = %totals.subtotal,
            total_tax = %totals.tax_breakdown.total_tax,
            net_amount = %totals.net_amount,
            "assembled invoice totals"
        );
        Ok(totals)
    }
}

impl Default for InvoiceTotalsAssembler {
    fn default() -> Self {
        Self::from_valid_config(&GstConfig::default())
    }
}
