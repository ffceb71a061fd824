//! Products domain module.
//!
//! Catalog products (physical and digital), the factory that builds them, and the
//! registry answering whether a digital activation code has been used.

pub mod codes;
pub mod factory;
pub mod product;

pub use codes::CodeRegistry;
pub use factory::ProductFactory;
pub use product::{DigitalDetails, PhysicalDetails, Product, ProductKind};
