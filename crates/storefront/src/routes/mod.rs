//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                  - Health check
//!
//! # Login
//! GET  /                                        - Role picker (redirects if logged in)
//! POST /login/owner                             - Log in as store owner
//! POST /login/customer/{customer_id}            - Log in as a customer
//! POST /logout                                  - Log out
//!
//! # Admin (owner only)
//! GET  /admin                                   - Daily price manager
//! POST /admin/customers/{customer_id}/select    - Pick the customer to edit
//! POST /admin/products/{product_id}/visibility  - Toggle visibility
//! POST /admin/products/{product_id}/price       - Set or clear today's price
//! POST /admin/save                              - Show the save confirmation
//!
//! # Shop (customer only)
//! GET  /shop?category=                          - Personal price list
//! POST /shop/cart                               - Bump the cart counter
//!
//! # JSON API
//! GET  /api/catalog/{customer_id}?category=     - Effective catalog
//! GET  /api/overrides/{customer_id}/{product_id} - Raw override entry (owner only)
//! ```

pub mod admin;
pub mod api;
pub mod login;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::dashboard))
        .route("/customers/{customer_id}/select", post(admin::select_customer))
        .route(
            "/products/{product_id}/visibility",
            post(admin::toggle_visibility),
        )
        .route("/products/{product_id}/price", post(admin::set_price))
        .route("/save", post(admin::save))
}

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shop::index))
        .route("/cart", post(shop::add_to_cart))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog/{customer_id}", get(api::catalog))
        .route(
            "/overrides/{customer_id}/{product_id}",
            get(api::override_entry),
        )
}

/// Create all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(login::index))
        .route("/login/owner", post(login::login_owner))
        .route("/login/customer/{customer_id}", post(login::login_customer))
        .route("/logout", post(login::logout))
        .nest("/admin", admin_routes())
        .nest("/shop", shop_routes())
        .nest("/api", api_routes())
}
