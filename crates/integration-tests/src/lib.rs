//! Integration tests for Fresh Daily.
//!
//! Each test spawns its own storefront on an ephemeral port. The store keeps
//! one session per process, so servers are never shared between tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fresh-daily-integration-tests
//! ```

use std::net::SocketAddr;

use fresh_daily_core::CatalogStore;
use fresh_daily_storefront::{AppState, StorefrontConfig};
use reqwest::{Client, Response, redirect::Policy};
use tokio::net::TcpListener;

/// A storefront running in the background of the test runtime.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    /// Start a server over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(CatalogStore::fresh_daily()).await
    }

    /// Start a server over `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn spawn_with(catalog: CatalogStore) -> std::io::Result<Self> {
        let state = AppState::new(StorefrontConfig::default(), catalog);
        let app = fresh_daily_storefront::app(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        // Redirects are asserted on, not followed
        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(std::io::Error::other)?;

        Ok(Self { addr, client })
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Issue a GET.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send.
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.client.get(self.url(path)).send().await
    }

    /// Issue a POST with no body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send.
    pub async fn post(&self, path: &str) -> reqwest::Result<Response> {
        self.client.post(self.url(path)).send().await
    }

    /// Issue a form POST.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails to send.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Result<Response> {
        self.client.post(self.url(path)).form(form).send().await
    }
}
