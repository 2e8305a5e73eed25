//! Catalog store: the immutable products and customers a store starts with.
//!
//! The catalog is seed data. It is built once at startup, either from the
//! built-in Fresh Daily seed or from a JSON document, validated, and never
//! mutated afterwards. Declared order is preserved because the customer view
//! lists products in exactly that order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, CustomerType, Price, ProductId, Unit};

/// Errors raised while building a catalog from seed data.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("duplicate customer id {0}")]
    DuplicateCustomer(CustomerId),
    #[error("product {0} has an empty name")]
    EmptyProductName(ProductId),
    #[error("product {0} has an empty category")]
    EmptyCategory(ProductId),
    #[error("customer {0} has an empty name")]
    EmptyCustomerName(CustomerId),
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A product offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit: Unit,
    pub base_price: Price,
    pub category: String,
}

/// A customer account the owner can price for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(rename = "type")]
    pub customer_type: CustomerType,
}

/// Raw seed document before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogSeed", into = "CatalogSeed")]
pub struct CatalogStore {
    products: Vec<Product>,
    customers: Vec<Customer>,
}

impl CatalogStore {
    /// Build a catalog, validating ids and names.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or empty names/categories.
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Result<Self, CatalogError> {
        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyProductName(product.id));
            }
            if product.category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory(product.id));
            }
        }

        let mut customer_ids = HashSet::new();
        for customer in &customers {
            if !customer_ids.insert(customer.id) {
                return Err(CatalogError::DuplicateCustomer(customer.id));
            }
            if customer.name.trim().is_empty() {
                return Err(CatalogError::EmptyCustomerName(customer.id));
            }
        }

        Ok(Self {
            products,
            customers,
        })
    }

    /// Parse and validate a JSON seed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: CatalogSeed = serde_json::from_str(json)?;
        Self::try_from(seed)
    }

    /// The built-in Fresh Daily seed: eight produce lines and four accounts.
    #[must_use]
    pub fn fresh_daily() -> Self {
        let product = |id, name: &str, unit, cents, category: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            unit,
            base_price: Price::from_cents(cents).unwrap_or(Price::ZERO),
            category: category.to_string(),
        };
        let customer = |id, name: &str, customer_type| Customer {
            id: CustomerId::new(id),
            name: name.to_string(),
            customer_type,
        };

        Self {
            products: vec![
                product(1, "Premium Bananas", Unit::Kg, 150, "Tropical"),
                product(2, "Red Apples (Fuji)", Unit::Kg, 220, "Local"),
                product(3, "Green Apples", Unit::Kg, 200, "Local"),
                product(4, "Strawberries", Unit::Box, 450, "Berries"),
                product(5, "Watermelon", Unit::Pc, 600, "Tropical"),
                product(6, "Oranges (Navel)", Unit::Kg, 180, "Citrus"),
                product(7, "Lemons", Unit::Kg, 250, "Citrus"),
                product(8, "Avocados", Unit::Pc, 120, "Tropical"),
            ],
            customers: vec![
                customer(101, "City Juice Bar", CustomerType::Wholesale),
                customer(102, "Green Leaf Restaurant", CustomerType::Wholesale),
                customer(103, "Mrs. Johnson", CustomerType::Retail),
                customer(104, "Downtown Bakery", CustomerType::Wholesale),
            ],
        }
    }

    /// Products in declared order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Customers in declared order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a customer by id.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Distinct product categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::fresh_daily()
    }
}

impl TryFrom<CatalogSeed> for CatalogStore {
    type Error = CatalogError;

    fn try_from(seed: CatalogSeed) -> Result<Self, Self::Error> {
        Self::new(seed.products, seed.customers)
    }
}

impl From<CatalogStore> for CatalogSeed {
    fn from(store: CatalogStore) -> Self {
        Self {
            products: store.products,
            customers: store.customers,
        }
    }
}
