//! The application-state object.
//!
//! [`Storefront`] owns the catalog, the override table, the session, the
//! owner's customer selection, the notice board and the cart counter. Every
//! screen goes through it, so role checks and id validation happen in one
//! place: only a logged-in owner can write overrides, and ids that are not in
//! the catalog are rejected instead of creating entries for them.

use chrono::{DateTime, TimeDelta, Utc};

use crate::admin::{AdminWorkflow, parse_price_input};
use crate::cart::CartCounter;
use crate::catalog::{CatalogStore, Customer, Product};
use crate::notice::{ActiveNotice, NoticeBoard};
use crate::overrides::{OverrideEntry, OverrideError, OverrideTable, OverrideUpdate};
use crate::resolver::{self, CategoryFilter, EffectiveProduct};
use crate::session::{SessionController, SessionError, SessionState};
use crate::types::{CustomerId, Price, PriceError, ProductId};

/// Errors returned by [`Storefront`] operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Override(#[from] OverrideError),
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// In-memory store state for one running instance.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: CatalogStore,
    overrides: OverrideTable,
    session: SessionController,
    admin: AdminWorkflow,
    notices: NoticeBoard,
    cart: CartCounter,
}

impl Storefront {
    /// Fresh state over `catalog` with the default notice duration.
    #[must_use]
    pub fn new(catalog: CatalogStore) -> Self {
        Self::with_notice_board(catalog, NoticeBoard::default())
    }

    /// Fresh state whose notices stay up for `notice_duration`.
    #[must_use]
    pub fn with_notice_duration(catalog: CatalogStore, notice_duration: TimeDelta) -> Self {
        Self::with_notice_board(catalog, NoticeBoard::new(notice_duration))
    }

    fn with_notice_board(catalog: CatalogStore, notices: NoticeBoard) -> Self {
        Self {
            catalog,
            overrides: OverrideTable::new(),
            session: SessionController::new(),
            admin: AdminWorkflow::new(),
            notices,
            cart: CartCounter::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Read-only view of the override table.
    #[must_use]
    pub const fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    #[must_use]
    pub const fn session(&self) -> &SessionController {
        &self.session
    }

    /// Customer the owner is currently editing.
    #[must_use]
    pub fn selected_customer(&self) -> Option<&Customer> {
        self.admin
            .selected()
            .and_then(|id| self.catalog.customer(id))
    }

    #[must_use]
    pub const fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Notice still visible at `now`.
    #[must_use]
    pub fn notice(&self, now: DateTime<Utc>) -> Option<ActiveNotice<'_>> {
        self.notices.current(now)
    }

    /// Override entry for a pair of catalog ids.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is not in the catalog.
    pub fn override_for(
        &self,
        customer: CustomerId,
        product: ProductId,
    ) -> Result<OverrideEntry, OverrideError> {
        self.customer(customer)?;
        self.product(product)?;
        Ok(self.overrides.get(customer, product))
    }

    /// Effective catalog for `customer`, recomputed from the current table.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::UnknownCustomer`] for ids outside the catalog.
    pub fn effective_catalog(
        &self,
        customer: CustomerId,
        filter: &CategoryFilter,
    ) -> Result<Vec<EffectiveProduct>, OverrideError> {
        self.customer(customer)?;
        Ok(resolver::resolve(&self.catalog, &self.overrides, customer, filter).collect())
    }

    /// Categories `customer` has at least one visible product in.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::UnknownCustomer`] for ids outside the catalog.
    pub fn visible_categories(&self, customer: CustomerId) -> Result<Vec<&str>, OverrideError> {
        self.customer(customer)?;
        Ok(resolver::visible_categories(
            &self.catalog,
            &self.overrides,
            customer,
        ))
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Log in as the store owner.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyLoggedIn`] if a session is active.
    pub fn login_as_owner(&mut self) -> Result<(), StoreError> {
        self.session.login_as_owner()?;
        Ok(())
    }

    /// Log in as a catalog customer.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown customer or an active session.
    pub fn login_as_customer(&mut self, customer: CustomerId) -> Result<(), StoreError> {
        let customer = self.customer(customer)?.clone();
        self.session.login_as_customer(customer)?;
        Ok(())
    }

    /// End the session, dropping the owner's selection and the cart.
    pub fn logout(&mut self) -> SessionState {
        self.admin.clear();
        self.cart.reset();
        self.session.logout()
    }

    // -------------------------------------------------------------------------
    // Owner operations
    // -------------------------------------------------------------------------

    /// Write one field of an override entry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotOwner`] unless the owner is logged in, or an
    /// [`OverrideError`] for ids outside the catalog.
    pub fn set_override(
        &mut self,
        customer: CustomerId,
        product: ProductId,
        update: OverrideUpdate,
    ) -> Result<OverrideEntry, StoreError> {
        self.require_owner()?;
        self.customer(customer)?;
        self.product(product)?;
        Ok(self.overrides.set(customer, product, update))
    }

    /// Pick the customer whose prices the owner is editing.
    ///
    /// # Errors
    ///
    /// Returns an error unless the owner is logged in and the id exists.
    pub fn select_customer(&mut self, customer: CustomerId) -> Result<(), StoreError> {
        self.require_owner()?;
        self.customer(customer)?;
        self.admin.select(customer);
        Ok(())
    }

    /// Flip visibility of `product` for the selected customer. Returns the
    /// new visibility.
    ///
    /// # Errors
    ///
    /// Returns an error unless the owner is logged in with a customer
    /// selected and the product exists.
    pub fn toggle_visibility(&mut self, product: ProductId) -> Result<bool, StoreError> {
        let customer = self.require_selected()?;
        let current = self.overrides.get(customer, product).visible;
        let entry = self.set_override(customer, product, OverrideUpdate::Visible(!current))?;
        Ok(entry.visible)
    }

    /// Apply the owner's price input for `product` and the selected customer.
    /// A blank input clears the override.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Price`] for unparsable or negative input, in
    /// which case the table is left as it was.
    pub fn set_price_input(
        &mut self,
        product: ProductId,
        raw: &str,
    ) -> Result<Option<Price>, StoreError> {
        let customer = self.require_selected()?;
        let price = parse_price_input(raw)?;
        let entry = self.set_override(customer, product, OverrideUpdate::Price(price))?;
        Ok(entry.price)
    }

    /// Confirm the selected customer's settings. Nothing is persisted; this
    /// only posts a notice. Returns the notice text.
    ///
    /// # Errors
    ///
    /// Returns an error unless the owner is logged in with a customer selected.
    pub fn save(&mut self, now: DateTime<Utc>) -> Result<String, StoreError> {
        let customer = self.require_selected()?;
        let name = &self.customer(customer)?.name;
        let message = format!("Settings saved for {name}");
        self.notices.show(message.clone(), now);
        Ok(message)
    }

    // -------------------------------------------------------------------------
    // Customer operations
    // -------------------------------------------------------------------------

    /// Effective catalog for the logged-in customer.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotCustomer`] unless a customer is logged in.
    pub fn my_catalog(&self, filter: &CategoryFilter) -> Result<Vec<EffectiveProduct>, StoreError> {
        let customer = self.require_customer()?;
        Ok(self.effective_catalog(customer, filter)?)
    }

    /// Bump the decorative cart counter.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotCustomer`] unless a customer is logged in.
    pub fn add_to_cart(&mut self) -> Result<u32, StoreError> {
        self.require_customer()?;
        Ok(self.cart.add())
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn customer(&self, id: CustomerId) -> Result<&Customer, OverrideError> {
        self.catalog
            .customer(id)
            .ok_or(OverrideError::UnknownCustomer(id))
    }

    fn product(&self, id: ProductId) -> Result<&Product, OverrideError> {
        self.catalog
            .product(id)
            .ok_or(OverrideError::UnknownProduct(id))
    }

    const fn require_owner(&self) -> Result<(), SessionError> {
        if self.session.is_owner() {
            Ok(())
        } else {
            Err(SessionError::NotOwner)
        }
    }

    fn require_selected(&self) -> Result<CustomerId, SessionError> {
        self.require_owner()?;
        self.admin.selected().ok_or(SessionError::NoCustomerSelected)
    }

    fn require_customer(&self) -> Result<CustomerId, SessionError> {
        self.session
            .bound_customer()
            .map(|c| c.id)
            .ok_or(SessionError::NotCustomer)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(CatalogStore::fresh_daily())
    }
}
