//! Newtype IDs for catalog entities.
//!
//! Product and customer ids share the same integer space in seed data
//! (products 1..=8, customers 101..=104), so a plain `i32` would let one be
//! passed where the other is expected. `define_id!` stamps out a distinct
//! wrapper per entity.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>`, `Into<i32>` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use fresh_daily_core::define_id;
/// define_id!(SupplierId);
/// define_id!(CrateId);
///
/// let supplier = SupplierId::new(7);
/// let crate_id = CrateId::new(7);
///
/// // These are different types, so this won't compile:
/// // let _: SupplierId = crate_id;
/// assert_eq!(supplier.as_i32(), crate_id.as_i32());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CustomerId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_transparently() {
        let id = CustomerId::new(101);
        assert_eq!(serde_json::to_string(&id).unwrap(), "101");

        let parsed: ProductId = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, ProductId::new(4));
    }

    #[test]
    fn test_id_from_str_trims() {
        assert_eq!(" 103 ".parse::<CustomerId>().unwrap(), CustomerId::new(103));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ProductId::new(8).to_string(), "8");
    }
}
