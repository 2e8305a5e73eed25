//! Decorative cart counter shown in the customer header.

/// Number of "add" clicks since the customer logged in. Nothing is bought.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartCounter(u32);

impl CartCounter {
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.0
    }

    /// Add one item and return the new count.
    pub const fn add(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    pub const fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_reset() {
        let mut cart = CartCounter::default();
        assert_eq!(cart.add(), 1);
        assert_eq!(cart.add(), 2);
        cart.reset();
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_saturates() {
        let mut cart = CartCounter(u32::MAX);
        assert_eq!(cart.add(), u32::MAX);
    }
}
