//! # Invoice GST Core
//!
//! GST computation for creator-to-brand tax invoices: picks CGST+SGST or IGST
//! from the parties' states, groups line items by HSN/SAC code, taxes each
//! group, and assembles subtotal, tax, net amount and the amount in words.
//!
//! ## Features
//!
//! - **Regime resolution**: intra-state (CGST + SGST) vs inter-state (IGST)
//! - **HSN/SAC grouping**: first-seen order with a configured fallback code
//! - **Tax calculation**: per-group half-up rounding, aggregates summed from groups
//! - **Amount in words**: Indian numbering (lakh, crore)
//! - **Printable summary**: tax rows and the HSN/SAC-wise table
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_gst_core::{
//!     catalog_map, CatalogItem, Invoice, InvoiceTotalsAssembler, LineItem, Party,
//! };
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let catalog = catalog_map(vec![
//!     CatalogItem::new("reel", "Instagram Reel", BigDecimal::from(5000)).with_code("998361"),
//! ]);
//! let invoice = Invoice::new(
//!     "INV-1001",
//!     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//!     vec![LineItem::new("reel", 2, BigDecimal::from(5000))],
//! );
//!
//! let totals = InvoiceTotalsAssembler::default()
//!     .assemble(
//!         &invoice,
//!         &Party::new("Creator", "Rajasthan"),
//!         &Party::new("Brand", "Maharashtra"),
//!         &catalog,
//!     )
//!     .unwrap();
//!
//! assert_eq!(totals.net_amount, BigDecimal::from(11800));
//! assert_eq!(totals.net_amount_words, "Eleven Thousand Eight Hundred Rupees Only");
//! ```

pub mod config;
pub mod invoice;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use invoice::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
pub use utils::words::{to_words, AmountInWordsFormatter};
