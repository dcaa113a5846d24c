//! Grouping of line items by HSN/SAC classification code

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::config::GstConfig;
use crate::tax::gst::TaxComponents;
use crate::traits::CatalogLookup;
use crate::types::{GstResult, LineItem};
use crate::utils::validation::is_valid_classification_code;

/// Line items sharing one classification code, with their tax once computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsnGroup {
    /// HSN/SAC code
    pub code: String,
    /// Member line items, in invoice order
    pub line_items: Vec<LineItem>,
    /// Sum of member line totals
    pub taxable_value: BigDecimal,
    /// Tax on `taxable_value`; zero until the calculator runs
    pub tax: TaxComponents,
}

impl HsnGroup {
    fn new(code: String) -> Self {
        Self {
            code,
            line_items: Vec::new(),
            taxable_value: BigDecimal::from(0),
            tax: TaxComponents::default(),
        }
    }
}

/// Groups line items by the code on their catalog entry.
///
/// An item whose catalog entry is missing, or whose code is blank or not
/// 4/6/8 digits, is grouped under the configured default code.
#[derive(Debug, Clone)]
pub struct HsnGrouper {
    default_code: String,
}

impl HsnGrouper {
    pub fn new(default_code: impl Into<String>) -> Self {
        Self {
            default_code: default_code.into(),
        }
    }

    pub fn from_config(config: &GstConfig) -> Self {
        Self::new(config.default_classification_code.clone())
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Code a line item is taxed under
    pub fn classification_code<C>(&self, line_item: &LineItem, catalog: &C) -> String
    where
        C: CatalogLookup + ?Sized,
    {
        let Some(entry) = catalog.catalog_item(&line_item.item_id) else {
            warn!(
                item_id = %line_item.item_id,
                fallback = %self.default_code,
                "line item not in catalog, using default classification code"
            );
            return self.default_code.clone();
        };

        match entry.hsn_sac_code.as_deref().map(str::trim) {
            Some(code) if is_valid_classification_code(code) => code.to_string(),
            Some(code) if !code.is_empty() => {
                warn!(
                    item_id = %line_item.item_id,
                    code,
                    fallback = %self.default_code,
                    "malformed classification code, using default"
                );
                self.default_code.clone()
            }
            _ => {
                warn!(
                    item_id = %line_item.item_id,
                    fallback = %self.default_code,
                    "catalog item has no classification code, using default"
                );
                self.default_code.clone()
            }
        }
    }

    /// Groups in first-seen code order. No line items yields no groups.
    ///
    /// Every line is checked before it is added, so a negative or zero-quantity
    /// line cannot be netted off inside a group.
    pub fn group<C>(&self, line_items: &[LineItem], catalog: &C) -> GstResult<Vec<HsnGroup>>
    where
        C: CatalogLookup + ?Sized,
    {
        let mut groups: Vec<HsnGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for line_item in line_items {
            line_item.validate()?;
            let code = self.classification_code(line_item, catalog);
            let slot = *index.entry(code.clone()).or_insert_with(|| {
                groups.push(HsnGroup::new(code));
                groups.len() - 1
            });

            let group = &mut groups[slot];
            group.taxable_value += line_item.line_total();
            group.line_items.push(line_item.clone());
        }

        Ok(groups)
    }
}

impl Default for HsnGrouper {
    fn default() -> Self {
        Self::from_config(&GstConfig::default())
    }
}
