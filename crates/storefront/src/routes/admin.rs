//! Daily price manager (owner only).
//!
//! The owner picks a customer on the left and edits that customer's
//! visibility and price for every product on the right. Edits are applied to
//! the in-memory override table immediately; "Save" only confirms.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, Utc};
use fresh_daily_core::{
    ActiveNotice, CustomerId, OverrideEntry, ProductId, StoreError, Storefront,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireOwner;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Customer entry in the admin sidebar.
#[derive(Debug, Clone)]
pub struct AdminCustomerView {
    pub id: i32,
    pub name: String,
    pub customer_type: String,
    pub selected: bool,
}

/// One product row in the pricing table.
#[derive(Debug, Clone)]
pub struct PriceRowView {
    pub product_id: i32,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub visible: bool,
    pub base_price: String,
    /// Value shown in the price input.
    pub price_input: String,
    /// Override set and different from the base price.
    pub overridden: bool,
    pub error: Option<String>,
}

/// The customer whose prices are being edited.
#[derive(Debug, Clone)]
pub struct ManagedCustomerView {
    pub name: String,
    pub rows: Vec<PriceRowView>,
}

/// Save confirmation toast. The page hides it after `dismiss_after_ms`.
#[derive(Debug, Clone)]
pub struct NoticeView {
    pub message: String,
    pub dismiss_after_ms: i64,
}

impl From<ActiveNotice<'_>> for NoticeView {
    fn from(notice: ActiveNotice<'_>) -> Self {
        Self {
            message: notice.message.to_string(),
            dismiss_after_ms: notice.remaining_millis(),
        }
    }
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub customers: Vec<AdminCustomerView>,
    pub managing: Option<ManagedCustomerView>,
    pub notice: Option<NoticeView>,
}

/// Rejected price input to echo back on its row.
struct RowError<'a> {
    product: ProductId,
    input: &'a str,
    message: String,
}

/// Build the dashboard from the current store state.
fn admin_page(store: &Storefront, now: DateTime<Utc>, row_error: Option<&RowError<'_>>) -> AdminTemplate {
    let selected = store.selected_customer();

    let customers = store
        .catalog()
        .customers()
        .iter()
        .map(|c| AdminCustomerView {
            id: c.id.as_i32(),
            name: c.name.clone(),
            customer_type: c.customer_type.to_string(),
            selected: selected.is_some_and(|s| s.id == c.id),
        })
        .collect();

    let managing = selected.map(|customer| {
        let explicit: HashMap<ProductId, OverrideEntry> =
            store.overrides().entries_for(customer.id).collect();

        ManagedCustomerView {
            name: customer.name.clone(),
            rows: store
                .catalog()
                .products()
                .iter()
                .map(|product| {
                    let entry = explicit
                        .get(&product.id)
                        .copied()
                        .unwrap_or(OverrideEntry::DEFAULT);
                    let effective = entry.effective_price(product.base_price);
                    let error = row_error.filter(|e| e.product == product.id);

                    PriceRowView {
                        product_id: product.id.as_i32(),
                        name: product.name.clone(),
                        category: product.category.clone(),
                        unit: product.unit.to_string(),
                        visible: entry.visible,
                        base_price: product.base_price.to_string(),
                        price_input: error.map_or_else(
                            || effective.to_input_string(),
                            |e| e.input.to_string(),
                        ),
                        overridden: entry.price.is_some_and(|p| p != product.base_price),
                        error: error.map(|e| e.message.clone()),
                    }
                })
                .collect(),
        }
    });

    AdminTemplate {
        customers,
        managing,
        notice: store.notice(now).map(NoticeView::from),
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Price edit form data.
#[derive(Debug, Deserialize)]
pub struct PriceForm {
    #[serde(default)]
    pub price: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the daily price manager.
#[instrument(skip(_owner, state))]
pub async fn dashboard(_owner: RequireOwner, State(state): State<AppState>) -> AdminTemplate {
    let store = state.read().await;
    admin_page(&store, Utc::now(), None)
}

/// Select the customer to edit.
#[instrument(skip(state))]
pub async fn select_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Redirect> {
    state.write().await.select_customer(customer_id)?;

    tracing::debug!(customer_id = %customer_id, "Customer selected for editing");
    Ok(Redirect::to("/admin"))
}

/// Toggle a product's visibility for the selected customer.
#[instrument(skip(state))]
pub async fn toggle_visibility(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Redirect> {
    let mut store = state.write().await;
    let visible = store.toggle_visibility(product_id)?;

    tracing::info!(
        customer_id = ?store.selected_customer().map(|c| c.id),
        product_id = %product_id,
        visible,
        "Visibility updated"
    );
    Ok(Redirect::to("/admin"))
}

/// Set today's price for the selected customer. A blank field clears it.
///
/// Invalid input leaves the table untouched and re-renders the page with the
/// message next to the offending row.
#[instrument(skip(state))]
pub async fn set_price(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Form(form): Form<PriceForm>,
) -> Result<Response> {
    let mut store = state.write().await;

    match store.set_price_input(product_id, &form.price) {
        Ok(price) => {
            tracing::info!(
                customer_id = ?store.selected_customer().map(|c| c.id),
                product_id = %product_id,
                price = ?price.map(|p| p.to_string()),
                "Price updated"
            );
            Ok(Redirect::to("/admin").into_response())
        }
        Err(StoreError::Price(err)) => {
            tracing::debug!(product_id = %product_id, error = %err, "Rejected price input");
            let row_error = RowError {
                product: product_id,
                input: &form.price,
                message: err.to_string(),
            };
            let html = admin_page(&store, Utc::now(), Some(&row_error)).render()?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Confirm the selected customer's settings.
#[instrument(skip(state))]
pub async fn save(State(state): State<AppState>) -> Result<Redirect> {
    let mut store = state.write().await;
    let message = store.save(Utc::now())?;
    let explicit_entries = store
        .selected_customer()
        .map_or(0, |c| store.overrides().entries_for(c.id).count());

    tracing::info!(%message, explicit_entries, total_entries = store.overrides().len(), "Settings confirmed");
    add_breadcrumb("admin", &message);
    Ok(Redirect::to("/admin"))
}
