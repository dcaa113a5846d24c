//! Property tests: regime symmetry, summation identity, reconciliation, idempotence

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use invoice_gst_core::{
    catalog_map, CatalogItem, Invoice, InvoiceTotalsAssembler, LineItem, Party, TaxRegimeResolver,
};
use proptest::prelude::*;
use std::collections::HashMap;

const STATES: [&str; 6] = [
    "Rajasthan",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Goa",
    "Delhi",
];

const ITEM_IDS: [&str; 5] = ["reel", "story", "video", "ugc", "unlisted"];

fn catalog() -> HashMap<String, CatalogItem> {
    catalog_map(vec![
        CatalogItem::new("reel", "Reel", BigDecimal::from(5000)).with_code("998361"),
        CatalogItem::new("story", "Story", BigDecimal::from(800)).with_code("998361"),
        CatalogItem::new("video", "Video", BigDecimal::from(20000)).with_code("998371"),
        CatalogItem::new("ugc", "UGC", BigDecimal::from(1500)),
    ])
}

fn state() -> impl Strategy<Value = String> {
    prop::sample::select(STATES.to_vec()).prop_map(str::to_string)
}

/// Re-case and pad a state name
fn variant(state: &str, upper: bool, pad: usize) -> String {
    let cased = if upper {
        state.to_uppercase()
    } else {
        state.to_lowercase()
    };
    format!("{}{}{}", " ".repeat(pad), cased, " ".repeat(pad))
}

fn line_item() -> impl Strategy<Value = LineItem> {
    let id = prop::sample::select(ITEM_IDS.to_vec());
    (id, 1u32..20, 0i64..5_000_000).prop_map(|(id, quantity, paise)| {
        let unit_price = BigDecimal::from(paise) / BigDecimal::from(100);
        LineItem::new(id, quantity, unit_price)
    })
}

fn invoice() -> impl Strategy<Value = Invoice> {
    prop::collection::vec(line_item(), 0..12).prop_map(|line_items| {
        Invoice::new(
            "INV-PROP",
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            line_items,
        )
    })
}

proptest! {
    #[test]
    fn regime_ignores_case_and_whitespace(s in state(), upper in any::<bool>(), pad in 0usize..3) {
        let resolver = TaxRegimeResolver::default();
        let regime = resolver.resolve(&s, &variant(&s, upper, pad)).unwrap();
        prop_assert!(regime.is_intra_state());
    }

    #[test]
    fn regime_is_symmetric(a in state(), b in state()) {
        let resolver = TaxRegimeResolver::default();
        let forward = resolver.resolve(&a, &b).unwrap();
        let backward = resolver.resolve(&b, &a).unwrap();
        prop_assert_eq!(forward.is_intra_state(), a == b);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn group_tax_sums_to_total(inv in invoice(), seller in state(), buyer in state()) {
        let totals = InvoiceTotalsAssembler::default()
            .assemble(&inv, &Party::new("Creator", seller), &Party::new("Brand", buyer), &catalog())
            .unwrap();
        let breakdown = &totals.tax_breakdown;

        let group_sum: BigDecimal = breakdown.groups.iter().map(|g| &g.tax.total).sum();
        prop_assert_eq!(&group_sum, &breakdown.total_tax);

        let components = &breakdown.cgst + &breakdown.sgst + &breakdown.igst;
        prop_assert_eq!(&components, &breakdown.total_tax);
    }

    #[test]
    fn net_amount_reconciles(inv in invoice(), seller in state(), buyer in state()) {
        let totals = InvoiceTotalsAssembler::default()
            .assemble(&inv, &Party::new("Creator", seller), &Party::new("Brand", buyer), &catalog())
            .unwrap();

        let subtotal: BigDecimal = inv.line_items.iter().map(LineItem::line_total).sum();
        prop_assert_eq!(&totals.subtotal, &subtotal);
        prop_assert_eq!(&totals.net_amount, &(&totals.subtotal + &totals.tax_breakdown.total_tax));

        // per-group rounding drifts at most half a paisa per component
        let max_gap = BigDecimal::from(totals.tax_breakdown.groups.len() as u32 + 1)
            / BigDecimal::from(100);
        let gap = totals.tax_breakdown.rounding_difference().abs();
        prop_assert!(gap <= max_gap);
    }

    #[test]
    fn assemble_is_idempotent(inv in invoice(), seller in state(), buyer in state()) {
        let assembler = InvoiceTotalsAssembler::default();
        let seller = Party::new("Creator", seller);
        let buyer = Party::new("Brand", buyer);

        let first = assembler.assemble(&inv, &seller, &buyer, &catalog()).unwrap();
        let second = assembler.assemble(&inv, &seller, &buyer, &catalog()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
