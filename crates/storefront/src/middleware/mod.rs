//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only; capture errors)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the span, echoed in the response)
//! 4. `Cache-Control: no-store` (prices change between requests)
//!
//! Role checks are extractors rather than layers, see [`auth`].

pub mod auth;
pub mod request_id;

pub use auth::{RequireCustomer, RequireOwner};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
