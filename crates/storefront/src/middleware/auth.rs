//! Role extractors.
//!
//! There is no authentication beyond picking a role on the login screen, so
//! these extractors only consult the single session held in [`AppState`].
//! A failed check rejects with a session error, which [`AppError`] turns into
//! a redirect to the login screen.

use axum::{extract::FromRequestParts, http::request::Parts};
use fresh_daily_core::{Customer, SessionError};

use crate::error::AppError;
use crate::state::AppState;

/// Extractor that requires the store owner to be logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn dashboard(_owner: RequireOwner) -> impl IntoResponse {
///     "prices"
/// }
/// ```
#[derive(Debug)]
pub struct RequireOwner;

impl FromRequestParts<AppState> for RequireOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.read().await.session().is_owner() {
            Ok(Self)
        } else {
            Err(SessionError::NotOwner.into())
        }
    }
}

/// Extractor that requires a customer to be logged in, yielding that customer.
#[derive(Debug)]
pub struct RequireCustomer(pub Customer);

impl FromRequestParts<AppState> for RequireCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .read()
            .await
            .session()
            .bound_customer()
            .cloned()
            .map(Self)
            .ok_or_else(|| SessionError::NotCustomer.into())
    }
}
