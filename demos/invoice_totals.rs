//! Invoice totals walkthrough
//!
//! Run with `RUST_LOG=debug` to see the engine's caveats and figures.

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use invoice_gst_core::{
    catalog_map, CatalogItem, GstConfig, Invoice, InvoiceTotalsAssembler, LineItem, Party,
};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    let config = match std::env::args().nth(1) {
        Some(path) => GstConfig::from_file(path)?,
        None => GstConfig::default(),
    };
    let assembler = InvoiceTotalsAssembler::new(&config)?;

    let catalog = catalog_map(vec![
        CatalogItem::new("reel", "Instagram Reel", BigDecimal::from(5000))
            .with_code("998361"),
        CatalogItem::new("ugc", "UGC bundle", BigDecimal::from_str("1999.99")?),
    ]);
    let invoice = Invoice::new(
        "INV-1001",
        NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid date")?,
        vec![
            LineItem::new("reel", 2, BigDecimal::from(5000)),
            LineItem::new("ugc", 1, BigDecimal::from_str("1999.99")?),
        ],
    );
    let seller = Party::new("Asha Creates", "Rajasthan").with_gstin("27AAPFU0939F1ZV");

    for buyer_state in ["Rajasthan", "Maharashtra"] {
        let buyer = Party::new("Acme Brands", buyer_state);
        let totals = assembler.assemble(&invoice, &seller, &buyer, &catalog)?;

        println!("Seller: {} ({})", seller.name, seller.gstin_display());
        println!(
            "Buyer:  {} ({}), {}",
            buyer.name,
            buyer.gstin_display(),
            buyer_state
        );
        println!("  Subtotal: ₹{}", totals.subtotal);
        for row in totals.tax_rows() {
            println!("  {}: {}", row.label, row.formatted_amount());
        }
        println!("  Total:    ₹{}", totals.net_amount);
        println!("  In words: {}", totals.net_amount_words);

        let summary = totals.hsn_summary();
        println!("  HSN/SAC summary ({}):", summary.rate_headers.join(", "));
        for row in &summary.rows {
            println!(
                "    {:<8} ₹{:>10}  tax ₹{}",
                row.code.as_deref().unwrap_or("-"),
                row.taxable_value,
                row.tax.total
            );
        }
        println!();
    }

    Ok(())
}
