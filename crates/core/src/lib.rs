//! `tally-core` — shared building blocks for the catalog crates.
//!
//! This crate contains **pure domain** primitives (no IO, no global state).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::{OrderId, ProductId, UserId};
