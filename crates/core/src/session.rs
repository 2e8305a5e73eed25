//! Session/role state machine.
//!
//! ```text
//! LoggedOut --login_as_owner()----------> Owner
//! LoggedOut --login_as_customer(c)------> Customer(c)
//! Owner | Customer(c) --logout()--------> LoggedOut
//! ```
//!
//! There is exactly one session per running store. Any other transition
//! is rejected with [`SessionError`].

use crate::catalog::Customer;
use crate::types::Role;

/// Errors for invalid session transitions or role checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("already logged in as {0}")]
    AlreadyLoggedIn(Role),
    #[error("store owner login required")]
    NotOwner,
    #[error("customer login required")]
    NotCustomer,
    #[error("no customer selected")]
    NoCustomerSelected,
}

/// Current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    Owner,
    Customer(Customer),
}

impl SessionState {
    /// Role of the active session, if any.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::LoggedOut => None,
            Self::Owner => Some(Role::Owner),
            Self::Customer(_) => Some(Role::Customer),
        }
    }
}

/// Owns the single [`SessionState`].
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    /// Start logged out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the store owner is logged in.
    #[must_use]
    pub const fn is_owner(&self) -> bool {
        matches!(self.state, SessionState::Owner)
    }

    /// The customer bound to the session, if a customer is logged in.
    #[must_use]
    pub const fn bound_customer(&self) -> Option<&Customer> {
        match &self.state {
            SessionState::Customer(customer) => Some(customer),
            _ => None,
        }
    }

    /// `LoggedOut -> Owner`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyLoggedIn`] from any other state.
    pub fn login_as_owner(&mut self) -> Result<(), SessionError> {
        self.ensure_logged_out()?;
        self.state = SessionState::Owner;
        Ok(())
    }

    /// `LoggedOut -> Customer(customer)`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyLoggedIn`] from any other state.
    pub fn login_as_customer(&mut self, customer: Customer) -> Result<(), SessionError> {
        self.ensure_logged_out()?;
        self.state = SessionState::Customer(customer);
        Ok(())
    }

    /// Any state `-> LoggedOut`. Returns the state that was left.
    pub fn logout(&mut self) -> SessionState {
        std::mem::take(&mut self.state)
    }

    fn ensure_logged_out(&self) -> Result<(), SessionError> {
        match self.state.role() {
            Some(role) => Err(SessionError::AlreadyLoggedIn(role)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::types::CustomerId;

    fn mrs_johnson() -> Customer {
        CatalogStore::fresh_daily()
            .customer(CustomerId::new(103))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_starts_logged_out() {
        let session = SessionController::new();
        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(session.bound_customer().is_none());
    }

    #[test]
    fn test_customer_logout_then_owner_leaves_no_bound_customer() {
        let mut session = SessionController::new();
        session.login_as_customer(mrs_johnson()).unwrap();
        assert_eq!(session.bound_customer().unwrap().id, CustomerId::new(103));

        let left = session.logout();
        assert!(matches!(left, SessionState::Customer(_)));

        session.login_as_owner().unwrap();
        assert!(session.is_owner());
        assert!(session.bound_customer().is_none());
    }

    #[test]
    fn test_cannot_switch_role_without_logout() {
        let mut session = SessionController::new();
        session.login_as_owner().unwrap();
        assert_eq!(
            session.login_as_customer(mrs_johnson()),
            Err(SessionError::AlreadyLoggedIn(Role::Owner))
        );
        assert_eq!(
            session.login_as_owner(),
            Err(SessionError::AlreadyLoggedIn(Role::Owner))
        );
    }

    #[test]
    fn test_logout_when_logged_out_is_noop() {
        let mut session = SessionController::new();
        assert_eq!(session.logout(), SessionState::LoggedOut);
        assert_eq!(session.state(), &SessionState::LoggedOut);
    }
}
