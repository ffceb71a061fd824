//! Construction of product variants.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tally_core::ProductId;

use crate::product::{DigitalDetails, PhysicalDetails, Product, ProductKind};

/// Builds products with freshly minted ids.
///
/// Mirrors the permissive entity constructors: nothing is validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFactory;

impl ProductFactory {
    pub fn physical(name: impl Into<String>, price: Decimal, size: u32, weight: u32) -> Product {
        Product::new(
            ProductId::new(),
            name,
            price,
            ProductKind::Physical(PhysicalDetails { size, weight }),
        )
    }

    pub fn digital(
        name: impl Into<String>,
        price: Decimal,
        code: impl Into<String>,
        expires_on: NaiveDate,
    ) -> Product {
        Product::new(
            ProductId::new(),
            name,
            price,
            ProductKind::Digital(DigitalDetails {
                code: code.into(),
                expires_on,
            }),
        )
    }
}
