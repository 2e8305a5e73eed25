//! Owner-side selection state.
//!
//! While the owner is logged in they pick one customer at a time to edit.
//! The selection lives next to the session rather than inside it and never
//! touches the override table.

use crate::types::{CustomerId, Price, PriceError};

/// Customer currently being edited by the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminWorkflow {
    selected: Option<CustomerId>,
}

impl AdminWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<CustomerId> {
        self.selected
    }

    pub fn select(&mut self, customer: CustomerId) {
        self.selected = Some(customer);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Interpret the "today's price" input.
///
/// A blank field clears the override (`Ok(None)`); anything else must parse
/// as a non-negative price.
///
/// # Errors
///
/// Returns a [`PriceError`] for non-numeric or negative input.
pub fn parse_price_input(raw: &str) -> Result<Option<Price>, PriceError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    Price::parse(raw).map(Some)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let mut admin = AdminWorkflow::new();
        assert_eq!(admin.selected(), None);

        admin.select(CustomerId::new(102));
        admin.select(CustomerId::new(104));
        assert_eq!(admin.selected(), Some(CustomerId::new(104)));

        admin.clear();
        assert_eq!(admin.selected(), None);
    }

    #[test]
    fn test_blank_price_input_clears() {
        assert_eq!(parse_price_input("  ").unwrap(), None);
        assert_eq!(
            parse_price_input("1.20").unwrap(),
            Some(Price::from_cents(120).unwrap())
        );
        assert!(parse_price_input("cheap").is_err());
    }
}
