//! Per-customer, per-product overrides.
//!
//! The table maps a `(customer, product)` pair to an [`OverrideEntry`]. A
//! missing pair means "visible at base price". Reads never insert: only
//! [`OverrideTable::set`] creates an entry, and each entry is independent of
//! every other pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, Price, ProductId};

/// Errors for writes that reference ids outside the catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    #[error("unknown customer {0}")]
    UnknownCustomer(CustomerId),
    #[error("unknown product {0}")]
    UnknownProduct(ProductId),
}

/// Visibility and price exception for one customer/product pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Whether the customer sees the product at all.
    pub visible: bool,
    /// Price the customer pays instead of the base price.
    pub price: Option<Price>,
}

impl OverrideEntry {
    /// The entry every pair has until the owner edits it.
    pub const DEFAULT: Self = Self {
        visible: true,
        price: None,
    };

    /// Price after applying this entry to `base_price`.
    #[must_use]
    pub fn effective_price(&self, base_price: Price) -> Price {
        self.price.unwrap_or(base_price)
    }

    /// Apply a single-field update, leaving the other field untouched.
    #[must_use]
    pub fn merge(self, update: OverrideUpdate) -> Self {
        match update {
            OverrideUpdate::Visible(visible) => Self { visible, ..self },
            OverrideUpdate::Price(price) => Self { price, ..self },
        }
    }
}

impl Default for OverrideEntry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A write to one field of an [`OverrideEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideUpdate {
    Visible(bool),
    /// `None` clears the override so the base price applies again.
    Price(Option<Price>),
}

/// The override table.
///
/// Holds no catalog reference; id validation happens in
/// [`crate::Storefront`], which owns both the catalog and the table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<(CustomerId, ProductId), OverrideEntry>,
}

impl OverrideTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for a pair, or [`OverrideEntry::DEFAULT`] if none was written.
    #[must_use]
    pub fn get(&self, customer: CustomerId, product: ProductId) -> OverrideEntry {
        self.entries
            .get(&(customer, product))
            .copied()
            .unwrap_or_default()
    }

    /// Merge `update` into the pair's entry, creating it from the default
    /// if absent. Returns the entry as stored.
    pub fn set(
        &mut self,
        customer: CustomerId,
        product: ProductId,
        update: OverrideUpdate,
    ) -> OverrideEntry {
        let entry = self.entries.entry((customer, product)).or_default();
        *entry = entry.merge(update);
        *entry
    }

    /// Whether an explicit entry exists for the pair.
    #[must_use]
    pub fn contains(&self, customer: CustomerId, product: ProductId) -> bool {
        self.entries.contains_key(&(customer, product))
    }

    /// Explicit entries for one customer, in no particular order.
    pub fn entries_for(
        &self,
        customer: CustomerId,
    ) -> impl Iterator<Item = (ProductId, OverrideEntry)> + '_ {
        self.entries
            .iter()
            .filter(move |((c, _), _)| *c == customer)
            .map(|((_, p), entry)| (*p, *entry))
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
