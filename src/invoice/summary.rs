//! Printable rows derived from `InvoiceTotals`
//!
//! Renderers print these rows as-is; none of them recomputes tax.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::invoice::totals::InvoiceTotals;
use crate::tax::{TaxComponents, TaxRegime};
use crate::utils::money::{format_inr, format_rate, round_currency};

/// One tax line under the subtotal, e.g. "CGST @ 9%"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRow {
    pub label: String,
    pub amount: BigDecimal,
}

impl TaxRow {
    pub fn formatted_amount(&self) -> String {
        format_inr(&self.amount)
    }
}

/// One line of the HSN/SAC-wise tax summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsnSummaryRow {
    /// Classification code, `None` on the total row
    pub code: Option<String>,
    pub taxable_value: BigDecimal,
    pub tax: TaxComponents,
}

/// HSN/SAC-wise summary: rate headers, one row per group and a total row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsnSummary {
    /// Column headers for the tax components, e.g. ["CGST 9%", "SGST 9%"]
    pub rate_headers: Vec<String>,
    pub rows: Vec<HsnSummaryRow>,
    pub total: HsnSummaryRow,
}

impl InvoiceTotals {
    /// Tax lines printed between the subtotal and the total
    pub fn tax_rows(&self) -> Vec<TaxRow> {
        let breakdown = &self.tax_breakdown;
        match &breakdown.regime {
            TaxRegime::IntraState {
                cgst_rate,
                sgst_rate,
            } => vec![
                TaxRow {
                    label: format!("CGST @ {}%", format_rate(cgst_rate)),
                    amount: breakdown.cgst.clone(),
                },
                TaxRow {
                    label: format!("SGST @ {}%", format_rate(sgst_rate)),
                    amount: breakdown.sgst.clone(),
                },
            ],
            TaxRegime::InterState { igst_rate } => vec![TaxRow {
                label: format!("IGST @ {}%", format_rate(igst_rate)),
                amount: breakdown.igst.clone(),
            }],
        }
    }

    /// The HSN/SAC-wise table; the total row carries the invoice aggregates.
    ///
    /// Row taxable values are rounded to paise so they add up to the subtotal.
    pub fn hsn_summary(&self) -> HsnSummary {
        let breakdown = &self.tax_breakdown;
        let rate_headers = match &breakdown.regime {
            TaxRegime::IntraState {
                cgst_rate,
                sgst_rate,
            } => vec![
                format!("CGST {}%", format_rate(cgst_rate)),
                format!("SGST {}%", format_rate(sgst_rate)),
            ],
            TaxRegime::InterState { igst_rate } => {
                vec![format!("IGST {}%", format_rate(igst_rate))]
            }
        };

        let rows = breakdown
            .groups
            .iter()
            .map(|group| HsnSummaryRow {
                code: Some(group.code.clone()),
                taxable_value: round_currency(&group.taxable_value),
                tax: group.tax.clone(),
            })
            .collect();

        let total = HsnSummaryRow {
            code: None,
            taxable_value: self.subtotal.clone(),
            tax: TaxComponents {
                cgst: breakdown.cgst.clone(),
                sgst: breakdown.sgst.clone(),
                igst: breakdown.igst.clone(),
                total: breakdown.total_tax.clone(),
            },
        };

        HsnSummary {
            rate_headers,
            rows,
            total,
        }
    }
}
