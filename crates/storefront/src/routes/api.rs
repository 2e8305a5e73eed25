//! JSON API over the override table and the resolver.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use fresh_daily_core::{
    CustomerId, EffectiveProduct, OverrideEntry, ProductId, SessionError, SessionState,
};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::routes::shop::CategoryQuery;
use crate::state::AppState;

/// Effective catalog response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub customer_id: CustomerId,
    pub category: String,
    pub products: Vec<EffectiveProduct>,
}

/// Effective catalog for a customer.
///
/// The owner may query any customer; a logged-in customer only themselves.
#[instrument(skip(state))]
pub async fn catalog(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<CatalogResponse>> {
    let store = state.read().await;

    match store.session().state() {
        SessionState::Owner => {}
        SessionState::Customer(customer) if customer.id == customer_id => {}
        SessionState::Customer(_) => {
            return Err(AppError::Forbidden(
                "customers may only view their own catalog".to_string(),
            ));
        }
        SessionState::LoggedOut => {
            return Err(AppError::Forbidden("login required".to_string()));
        }
    }

    let filter = query.filter();
    let products = store.effective_catalog(customer_id, &filter)?;

    Ok(Json(CatalogResponse {
        customer_id,
        category: filter.as_str().to_string(),
        products,
    }))
}

/// Raw override entry for a pair, defaults included (owner only).
#[instrument(skip(state))]
pub async fn override_entry(
    State(state): State<AppState>,
    Path((customer_id, product_id)): Path<(CustomerId, ProductId)>,
) -> Result<Json<OverrideEntry>> {
    let store = state.read().await;
    if !store.session().is_owner() {
        return Err(AppError::Forbidden(SessionError::NotOwner.to_string()));
    }

    Ok(Json(store.override_for(customer_id, product_id)?))
}
