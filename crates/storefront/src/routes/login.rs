//! Login screen and session transitions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use fresh_daily_core::{Customer, CustomerId, SessionState};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

/// Customer button on the login screen.
#[derive(Clone)]
pub struct CustomerView {
    pub id: i32,
    pub name: String,
    pub customer_type: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.as_i32(),
            name: customer.name.clone(),
            customer_type: customer.customer_type.to_string(),
        }
    }
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub customers: Vec<CustomerView>,
}

/// Show the role picker, or send an active session to its screen.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Response {
    let store = state.read().await;

    match store.session().state() {
        SessionState::Owner => Redirect::to("/admin").into_response(),
        SessionState::Customer(_) => Redirect::to("/shop").into_response(),
        SessionState::LoggedOut => LoginTemplate {
            customers: store
                .catalog()
                .customers()
                .iter()
                .map(CustomerView::from)
                .collect(),
        }
        .into_response(),
    }
}

/// Log in as the store owner.
#[instrument(skip(state))]
pub async fn login_owner(State(state): State<AppState>) -> Result<Redirect> {
    state.write().await.login_as_owner()?;

    tracing::info!("Store owner logged in");
    add_breadcrumb("session", "owner login");
    Ok(Redirect::to("/admin"))
}

/// Log in as a customer from the catalog.
#[instrument(skip(state))]
pub async fn login_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> Result<Redirect> {
    state.write().await.login_as_customer(customer_id)?;

    tracing::info!(customer_id = %customer_id, "Customer logged in");
    add_breadcrumb("session", "customer login");
    Ok(Redirect::to("/shop"))
}

/// Log out from any role.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Redirect {
    let left = state.write().await.logout();

    match left.role() {
        Some(role) => tracing::info!(role = %role, "Logged out"),
        None => tracing::debug!("Logout without an active session"),
    }
    Redirect::to("/")
}
