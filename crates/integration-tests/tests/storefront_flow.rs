//! End-to-end flows against a live storefront.
//!
//! Run with: cargo test -p fresh-daily-integration-tests

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use fresh_daily_core::CatalogStore;
use fresh_daily_integration_tests::TestServer;
use reqwest::{StatusCode, header::LOCATION};
use serde_json::Value;

const TWO_PRODUCT_SEED: &str = r#"{
    "products": [
        { "id": 1, "name": "Premium Bananas", "unit": "kg", "basePrice": "1.50", "category": "Tropical" },
        { "id": 4, "name": "Strawberries", "unit": "box", "basePrice": "4.50", "category": "Berries" }
    ],
    "customers": [
        { "id": 101, "name": "City Juice Bar", "type": "Wholesale" }
    ]
}"#;

fn location(response: &reqwest::Response) -> &str {
    response.headers().get(LOCATION).unwrap().to_str().unwrap()
}

async fn catalog_json(server: &TestServer, path: &str) -> Value {
    let response = server.get(path).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn().await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_owner_overrides_reach_customer() {
    let catalog = CatalogStore::from_json(TWO_PRODUCT_SEED).unwrap();
    let server = TestServer::spawn_with(catalog).await.unwrap();

    let response = server.post("/login/owner").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    server.post("/admin/customers/101/select").await.unwrap();
    let response = server
        .post_form("/admin/products/1/price", &[("price", "1.20")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    server.post("/admin/products/4/visibility").await.unwrap();

    // Save posts a notice on the dashboard
    server.post("/admin/save").await.unwrap();
    let html = server.get("/admin").await.unwrap().text().await.unwrap();
    assert!(html.contains("Settings saved for City Juice Bar"));
    assert!(html.contains("animation-delay:"));

    server.post("/logout").await.unwrap();
    let response = server.post("/login/customer/101").await.unwrap();
    assert_eq!(location(&response), "/shop");

    let body = catalog_json(&server, "/api/catalog/101").await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Premium Bananas");
    assert_eq!(products[0]["effectivePrice"], "1.20");
    assert_eq!(products[0]["priceOverridden"], true);

    let html = server.get("/shop").await.unwrap().text().await.unwrap();
    assert!(html.contains("Hello, City Juice Bar"));
    assert!(html.contains("Premium Bananas"));
    assert!(!html.contains("Strawberries"));
    assert!(!html.contains("Settings saved"));
}

#[tokio::test]
async fn test_invalid_price_leaves_table_unchanged() {
    let server = TestServer::spawn().await.unwrap();
    server.post("/login/owner").await.unwrap();
    server.post("/admin/customers/102/select").await.unwrap();

    server
        .post_form("/admin/products/2/price", &[("price", "2.00")])
        .await
        .unwrap();
    let response = server
        .post_form("/admin/products/2/price", &[("price", "two dollars")])
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("two dollars"));

    let entry = catalog_json(&server, "/api/overrides/102/2").await;
    assert_eq!(entry["visible"], true);
    assert_eq!(entry["price"], "2.00");

    // Blank input clears the override
    server
        .post_form("/admin/products/2/price", &[("price", "")])
        .await
        .unwrap();
    let entry = catalog_json(&server, "/api/overrides/102/2").await;
    assert_eq!(entry["price"], Value::Null);
}

#[tokio::test]
async fn test_logout_clears_selection_and_cart() {
    let server = TestServer::spawn().await.unwrap();
    server.post("/login/owner").await.unwrap();
    server.post("/admin/customers/103/select").await.unwrap();
    server.post("/logout").await.unwrap();

    let response = server.get("/admin").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    server.post("/login/owner").await.unwrap();
    let html = server.get("/admin").await.unwrap().text().await.unwrap();
    assert!(html.contains("Select a customer from the left"));
    server.post("/logout").await.unwrap();

    server.post("/login/customer/103").await.unwrap();
    server.post_form("/shop/cart", &[("category", "All")]).await.unwrap();
    server.post_form("/shop/cart", &[("category", "All")]).await.unwrap();
    let html = server.get("/shop").await.unwrap().text().await.unwrap();
    assert!(html.contains("<span class=\"badge\">2</span>"));

    server.post("/logout").await.unwrap();
    server.post("/login/customer/103").await.unwrap();
    let html = server.get("/shop").await.unwrap().text().await.unwrap();
    assert!(!html.contains("class=\"badge\""));
}

#[tokio::test]
async fn test_customer_cannot_read_other_catalogs() {
    let server = TestServer::spawn().await.unwrap();

    let response = server.get("/api/catalog/101").await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    server.post("/login/customer/101").await.unwrap();
    let response = server.get("/api/catalog/102").await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = server.get("/api/overrides/101/1").await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Customers never reach the admin screen
    let response = server.get("/admin").await.unwrap();
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_category_filter() {
    let server = TestServer::spawn().await.unwrap();
    server.post("/login/customer/104").await.unwrap();

    let body = catalog_json(&server, "/api/catalog/104?category=Citrus").await;
    assert_eq!(body["category"], "Citrus");
    let names: Vec<_> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Oranges (Navel)", "Lemons"]);

    let body = catalog_json(&server, "/api/catalog/104?category=Exotic").await;
    assert!(body["products"].as_array().unwrap().is_empty());

    let html = server
        .get("/shop?category=Exotic")
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("No products available in this category."));

    // Adding to cart keeps the category
    let response = server
        .post_form("/shop/cart", &[("category", "Citrus")])
        .await
        .unwrap();
    assert_eq!(location(&response), "/shop?category=Citrus");
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let server = TestServer::spawn().await.unwrap();
    server.post("/login/owner").await.unwrap();

    let response = server.post("/admin/customers/999/select").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get("/api/overrides/101/999").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
