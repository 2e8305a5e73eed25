//! CLI command implementations.

pub mod prices;
pub mod seed;
