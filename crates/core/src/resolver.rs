//! Effective catalog resolution.
//!
//! Joins the catalog against the override table for one customer. The
//! result is computed from scratch on every call and never cached: the owner
//! may edit the table between two customer page loads.

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, Product};
use crate::overrides::OverrideTable;
use crate::types::{CustomerId, Price, ProductId, Unit};

/// Category restriction applied after visibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(String),
}

impl CategoryFilter {
    /// Sentinel string meaning "no filter".
    pub const ALL: &'static str = "All";

    /// Parse a filter from a query value. `None`, `""` and `"All"` mean all.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("" | Self::ALL) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }

    /// The filter as its query string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Category(category) => category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_query(Some(s)))
    }
}

/// A product as one customer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveProduct {
    pub id: ProductId,
    pub name: String,
    pub unit: Unit,
    pub category: String,
    pub base_price: Price,
    pub effective_price: Price,
    /// True when an explicit price override is in force.
    pub price_overridden: bool,
}

impl EffectiveProduct {
    fn new(product: &Product, price: Option<Price>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            unit: product.unit,
            category: product.category.clone(),
            base_price: product.base_price,
            effective_price: price.unwrap_or(product.base_price),
            price_overridden: price.is_some(),
        }
    }
}

/// Visible products for `customer`, in catalog order, at effective prices,
/// restricted by `filter`.
///
/// Only an explicit `visible: false` hides a product; pairs with no entry
/// are shown at their base price.
pub fn resolve<'a>(
    catalog: &'a CatalogStore,
    table: &'a OverrideTable,
    customer: CustomerId,
    filter: &'a CategoryFilter,
) -> impl Iterator<Item = EffectiveProduct> + 'a {
    catalog.products().iter().filter_map(move |product| {
        let entry = table.get(customer, product.id);
        if !entry.visible || !filter.matches(&product.category) {
            return None;
        }
        Some(EffectiveProduct::new(product, entry.price))
    })
}

/// Distinct categories among the products `customer` can see, in catalog
/// order. Hidden products do not contribute a category.
#[must_use]
pub fn visible_categories<'a>(
    catalog: &'a CatalogStore,
    table: &OverrideTable,
    customer: CustomerId,
) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    catalog
        .products()
        .iter()
        .filter(|p| table.get(customer, p.id).visible)
        .map(|p| p.category.as_str())
        .filter(|c| seen.insert(*c))
        .collect()
}
