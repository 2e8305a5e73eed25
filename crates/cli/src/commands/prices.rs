//! Preview a customer's effective catalog from the command line.
//!
//! Runs the same owner workflow the admin screen uses: log in as owner,
//! select the customer, apply each override, log out. The resulting table is
//! then resolved for the customer and printed through the log.

use fresh_daily_core::{
    CatalogStore, CategoryFilter, CustomerId, EffectiveProduct, OverrideError, OverrideUpdate,
    ProductId, StoreError, Storefront,
};
use thiserror::Error;
use tracing::info;

/// Errors building a price list.
#[derive(Debug, Error)]
pub enum PriceListError {
    #[error("Invalid price argument {0:?}, expected PRODUCT_ID=AMOUNT")]
    InvalidPriceArg(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Override(#[from] OverrideError),
}

/// Arguments for `fd-cli price-list`.
#[derive(Debug, Clone, Default)]
pub struct PriceListRequest {
    pub customer: i32,
    pub category: Option<String>,
    /// `PRODUCT_ID=AMOUNT` pairs; an empty amount clears the price.
    pub prices: Vec<String>,
    pub hidden: Vec<i32>,
}

/// Split a `PRODUCT_ID=AMOUNT` argument.
fn split_price_arg(arg: &str) -> Result<(ProductId, &str), PriceListError> {
    let (id, amount) = arg
        .split_once('=')
        .ok_or_else(|| PriceListError::InvalidPriceArg(arg.to_string()))?;
    let id = id
        .trim()
        .parse::<ProductId>()
        .map_err(|_| PriceListError::InvalidPriceArg(arg.to_string()))?;
    Ok((id, amount))
}

/// Apply the requested overrides and resolve the customer's catalog.
///
/// # Errors
///
/// Returns an error for unknown ids, malformed arguments or invalid prices.
pub fn build(
    catalog: CatalogStore,
    request: &PriceListRequest,
) -> Result<Vec<EffectiveProduct>, PriceListError> {
    let customer = CustomerId::new(request.customer);
    let mut store = Storefront::new(catalog);

    store.login_as_owner()?;
    store.select_customer(customer)?;

    for arg in &request.prices {
        let (product, amount) = split_price_arg(arg)?;
        store.set_price_input(product, amount)?;
    }
    for &product in &request.hidden {
        store.set_override(customer, ProductId::new(product), OverrideUpdate::Visible(false))?;
    }
    store.logout();

    let filter = CategoryFilter::from_query(request.category.as_deref());
    Ok(store.effective_catalog(customer, &filter)?)
}

/// Log the effective catalog for the requested customer.
///
/// # Errors
///
/// Returns an error if the price list cannot be built.
pub fn price_list(catalog: CatalogStore, request: &PriceListRequest) -> Result<(), PriceListError> {
    let customer_name = catalog
        .customer(CustomerId::new(request.customer))
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let products = build(catalog, request)?;

    info!(
        customer = %customer_name,
        products = products.len(),
        "Effective catalog"
    );
    for product in &products {
        info!(
            id = %product.id,
            category = %product.category,
            unit = %product.unit,
            price = %product.effective_price,
            overridden = product.price_overridden,
            "{}",
            product.name
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use fresh_daily_core::PriceError;

    use super::*;

    fn request(prices: &[&str], hidden: &[i32]) -> PriceListRequest {
        PriceListRequest {
            customer: 101,
            category: None,
            prices: prices.iter().map(ToString::to_string).collect(),
            hidden: hidden.to_vec(),
        }
    }

    #[test]
    fn test_split_price_arg() {
        let (id, amount) = split_price_arg("3=2.10").unwrap();
        assert_eq!(id, ProductId::new(3));
        assert_eq!(amount, "2.10");

        assert!(split_price_arg("3").is_err());
        assert!(split_price_arg("x=2").is_err());
    }

    #[test]
    fn test_build_applies_overrides() {
        let products = build(CatalogStore::fresh_daily(), &request(&["1=1.20"], &[4])).unwrap();

        assert_eq!(products.len(), 7);
        assert!(products.iter().all(|p| p.id != ProductId::new(4)));
        assert_eq!(products[0].effective_price.to_string(), "$1.20");
        assert!(products[0].price_overridden);
    }

    #[test]
    fn test_build_with_category() {
        let mut req = request(&[], &[]);
        req.category = Some("Citrus".to_string());

        let products = build(CatalogStore::fresh_daily(), &req).unwrap();
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Oranges (Navel)", "Lemons"]);
    }

    #[test]
    fn test_build_rejects_bad_input() {
        let result = build(CatalogStore::fresh_daily(), &request(&["1=-2"], &[]));
        assert!(matches!(
            result,
            Err(PriceListError::Store(StoreError::Price(PriceError::Negative)))
        ));

        let mut unknown = request(&[], &[]);
        unknown.customer = 999;
        assert!(build(CatalogStore::fresh_daily(), &unknown).is_err());
    }
}
