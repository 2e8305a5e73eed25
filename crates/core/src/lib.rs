//! Fresh Daily Core - catalog, price overrides and session model.
//!
//! This crate holds everything the Fresh Daily storefront knows about its
//! products and customers:
//! - `storefront` - HTTP binary rendering the login, admin and customer screens
//! - `cli` - Seed validation and price-list tooling
//!
//! # Architecture
//!
//! The core crate contains only types and state transitions - no I/O, no
//! HTTP, no clocks. Callers pass the current time in where it matters
//! (notice expiry), which keeps every rule testable in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices and small enums
//! - [`catalog`] - Immutable seed data (products and customers)
//! - [`overrides`] - Per-customer, per-product visibility and price overrides
//! - [`resolver`] - Effective catalog resolution for a customer
//! - [`session`] - Role/session state machine
//! - [`admin`] - Owner-side customer selection
//! - [`notice`] - Auto-dismissing save confirmation
//! - [`cart`] - Decorative cart counter
//! - [`store`] - The application-state object that owns all of the above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod notice;
pub mod overrides;
pub mod resolver;
pub mod session;
pub mod store;
pub mod types;

pub use catalog::{CatalogError, CatalogStore, Customer, Product};
pub use notice::ActiveNotice;
pub use overrides::{OverrideEntry, OverrideError, OverrideTable, OverrideUpdate};
pub use resolver::{CategoryFilter, EffectiveProduct};
pub use session::{SessionController, SessionError, SessionState};
pub use store::{StoreError, Storefront};
pub use types::*;
