//! Customer price list (customer only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use fresh_daily_core::{CategoryFilter, Customer, EffectiveProduct, Storefront};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireCustomer;
use crate::state::AppState;

/// Category query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// Parsed category filter; missing or "All" means no filter.
    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_query(self.category.as_deref())
    }
}

/// Category chip in the shop header.
#[derive(Debug, Clone)]
pub struct CategoryChip {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// Product card display data.
#[derive(Debug, Clone)]
pub struct ShopProductView {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub price: String,
}

impl From<EffectiveProduct> for ShopProductView {
    fn from(product: EffectiveProduct) -> Self {
        Self {
            name: product.name,
            category: product.category,
            unit: product.unit.to_string(),
            price: product.effective_price.to_string(),
        }
    }
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub customer_name: String,
    pub categories: Vec<CategoryChip>,
    pub all_active: bool,
    /// Query value to carry through the cart form.
    pub active_category: String,
    pub products: Vec<ShopProductView>,
    pub cart_count: u32,
}

/// Build the shop page for `customer` from the current store state.
fn shop_page(
    store: &Storefront,
    customer: &Customer,
    filter: &CategoryFilter,
) -> Result<ShopTemplate> {
    let products = store
        .effective_catalog(customer.id, filter)?
        .into_iter()
        .map(ShopProductView::from)
        .collect();

    let categories = store
        .visible_categories(customer.id)?
        .into_iter()
        .map(|name| CategoryChip {
            name: name.to_string(),
            href: format!("/shop?category={}", urlencoding::encode(name)),
            active: filter.matches(name) && *filter != CategoryFilter::All,
        })
        .collect();

    Ok(ShopTemplate {
        customer_name: customer.name.clone(),
        categories,
        all_active: *filter == CategoryFilter::All,
        active_category: filter.as_str().to_string(),
        products,
        cart_count: store.cart_count(),
    })
}

/// Display the logged-in customer's price list.
#[instrument(skip(state, customer))]
pub async fn index(
    RequireCustomer(customer): RequireCustomer,
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<ShopTemplate> {
    let store = state.read().await;
    shop_page(&store, &customer, &query.filter())
}

/// Bump the decorative cart counter and return to the same category.
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Form(form): Form<CategoryQuery>,
) -> Result<Redirect> {
    let count = state.write().await.add_to_cart()?;
    tracing::debug!(count, "Cart counter incremented");

    let redirect = match form.filter() {
        CategoryFilter::All => "/shop".to_string(),
        CategoryFilter::Category(category) => {
            format!("/shop?category={}", urlencoding::encode(&category))
        }
    };
    Ok(Redirect::to(&redirect))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use fresh_daily_core::{CustomerId, OverrideUpdate, ProductId};

    use super::*;

    fn city_juice(store: &Storefront) -> Customer {
        store.catalog().customer(CustomerId::new(101)).cloned().unwrap()
    }

    #[test]
    fn test_shop_page_all_categories() {
        let store = Storefront::default();
        let customer = city_juice(&store);

        let page = shop_page(&store, &customer, &CategoryFilter::All).unwrap();
        assert_eq!(page.products.len(), 8);
        assert!(page.all_active);
        assert_eq!(page.categories.len(), 4);
        assert_eq!(page.products[0].price, "$1.50");
    }

    #[test]
    fn test_shop_page_hides_products_and_their_categories() {
        let mut store = Storefront::default();
        store.login_as_owner().unwrap();
        store
            .set_override(
                CustomerId::new(101),
                ProductId::new(4),
                OverrideUpdate::Visible(false),
            )
            .unwrap();
        let customer = city_juice(&store);

        let page = shop_page(&store, &customer, &CategoryFilter::All).unwrap();
        assert_eq!(page.products.len(), 7);
        assert!(page.categories.iter().all(|c| c.name != "Berries"));
    }

    #[test]
    fn test_shop_page_category_chip_active() {
        let store = Storefront::default();
        let customer = city_juice(&store);
        let citrus = CategoryFilter::Category("Citrus".to_string());

        let page = shop_page(&store, &customer, &citrus).unwrap();
        assert!(!page.all_active);
        assert_eq!(page.active_category, "Citrus");
        let names: Vec<_> = page.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Oranges (Navel)", "Lemons"]);

        let active: Vec<_> = page.categories.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/shop?category=Citrus");
    }

    #[test]
    fn test_shop_template_renders_empty_category() {
        let store = Storefront::default();
        let customer = city_juice(&store);
        let none = CategoryFilter::Category("Exotic".to_string());

        let html = shop_page(&store, &customer, &none)
            .unwrap()
            .render()
            .unwrap();
        assert!(html.contains("No products available in this category."));
        assert!(html.contains("Hello, City Juice Bar"));
    }

    #[test]
    fn test_shop_template_omits_owner_notice() {
        let mut store = Storefront::default();
        store.login_as_owner().unwrap();
        store.select_customer(CustomerId::new(102)).unwrap();
        store.save(chrono::Utc::now()).unwrap();
        store.logout();
        store.login_as_customer(CustomerId::new(101)).unwrap();
        let customer = city_juice(&store);

        let html = shop_page(&store, &customer, &CategoryFilter::All)
            .unwrap()
            .render()
            .unwrap();
        assert!(!html.contains("Settings saved"));
        assert!(!html.contains("Green Leaf Restaurant"));
    }
}
