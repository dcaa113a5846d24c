//! Core records consumed by the tax engine and the error type it reports

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::validation::validate_gstin;

/// A party on an invoice: the seller ("creator") or the buyer ("customer")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Legal or brand name
    pub name: String,
    /// Postal address as printed on the invoice
    #[serde(default)]
    pub address: String,
    /// State (jurisdiction) used to pick the tax regime
    #[serde(default, alias = "address_state")]
    pub state: Option<String>,
    /// GST registration number (GSTIN), if the party is registered
    #[serde(default, alias = "gst_number")]
    pub gstin: Option<String>,
    /// Permanent account number (tax-id)
    #[serde(default, alias = "pan_number")]
    pub pan: String,
}

impl Party {
    /// Create a party with a name and state; the remaining fields start empty
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            state: Some(state.into()),
            gstin: None,
            pan: String::new(),
        }
    }

    /// Set the GSTIN
    pub fn with_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.gstin = Some(gstin.into());
        self
    }

    /// State trimmed of surrounding whitespace, `None` when absent or blank
    pub fn state(&self) -> Option<&str> {
        self.state
            .as_deref()
            .map(str::trim)
            .filter(|state| !state.is_empty())
    }

    /// Whether the party carries a well-formed GSTIN with a valid check character
    pub fn has_valid_registration(&self) -> bool {
        self.gstin.as_deref().is_some_and(validate_gstin)
    }

    /// GSTIN as printed on the invoice
    pub fn gstin_display(&self) -> &str {
        match self.gstin.as_deref().map(str::trim) {
            Some(gstin) if !gstin.is_empty() => gstin,
            _ => "Not Registered",
        }
    }
}

/// An entry in the seller's item catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog identifier referenced by line items
    #[serde(alias = "item_id")]
    pub id: String,
    /// Display title
    pub title: String,
    /// List price
    pub unit_price: BigDecimal,
    /// HSN (goods) or SAC (services) classification code
    #[serde(default, alias = "hsn_sac")]
    pub hsn_sac_code: Option<String>,
}

impl CatalogItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, unit_price: BigDecimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            unit_price,
            hsn_sac_code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.hsn_sac_code = Some(code.into());
        self
    }
}

/// One billed line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Reference into the catalog
    pub item_id: String,
    /// Billed quantity
    pub quantity: u32,
    /// Price per unit, before tax
    pub unit_price: BigDecimal,
}

impl LineItem {
    pub fn new(item_id: impl Into<String>, quantity: u32, unit_price: BigDecimal) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity * unit_price`, unrounded
    pub fn line_total(&self) -> BigDecimal {
        BigDecimal::from(self.quantity) * &self.unit_price
    }

    /// Reject a zero quantity or a negative unit price
    pub fn validate(&self) -> GstResult<()> {
        if self.quantity == 0 {
            return Err(GstError::InvalidTaxableValue {
                subject: format!("quantity of line item '{}'", self.item_id),
                value: BigDecimal::from(self.quantity),
            });
        }

        if self.unit_price < BigDecimal::from(0) {
            return Err(GstError::InvalidTaxableValue {
                subject: format!("unit price of line item '{}'", self.item_id),
                value: self.unit_price.clone(),
            });
        }

        Ok(())
    }
}

/// An invoice as supplied by the data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(alias = "invoice_id")]
    pub id: Uuid,
    #[serde(alias = "invoice_number")]
    pub number: String,
    #[serde(alias = "invoice_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    /// Tax amount stored alongside the invoice when it was created
    #[serde(default, alias = "gst_amount")]
    pub recorded_tax_amount: Option<BigDecimal>,
    /// Net amount stored alongside the invoice when it was created
    #[serde(default, alias = "net_amount")]
    pub recorded_net_amount: Option<BigDecimal>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    /// Create an invoice with a fresh identifier and no recorded amounts
    pub fn new(number: impl Into<String>, date: NaiveDate, line_items: Vec<LineItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            date,
            notes: None,
            recorded_tax_amount: None,
            recorded_net_amount: None,
            line_items,
        }
    }
}

/// Errors reported by the tax engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GstError {
    #[error("Cannot determine tax regime: {0}")]
    IndeterminateRegime(String),
    #[error("Invalid tax regime: {0}")]
    InvalidRegime(String),
    #[error("Invalid taxable value {value} for {subject}")]
    InvalidTaxableValue { subject: String, value: BigDecimal },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for tax engine operations
pub type GstResult<T> = Result<T, GstError>;
