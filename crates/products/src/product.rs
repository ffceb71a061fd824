use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use tally_core::{Entity, ProductId, impl_identity_eq};

/// Attributes only a physical product has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhysicalDetails {
    pub size: u32,
    /// Counted once per occurrence when totalling an order's weight.
    pub weight: u32,
}

/// Attributes only a digital product has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitalDetails {
    /// Activation code, looked up in the [`crate::CodeRegistry`].
    pub code: String,
    pub expires_on: NaiveDate,
}

/// Product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProductKind {
    Physical(PhysicalDetails),
    Digital(DigitalDetails),
}

/// Catalog product.
///
/// Fields shared by every variant live on the struct; variant-specific ones live in
/// [`ProductKind`]. Products are never mutated once built.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    #[serde(flatten)]
    kind: ProductKind,
}

impl_identity_eq!(Product);

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Product {
    /// Build a product with an explicit id.
    ///
    /// No validation happens here: empty names and negative prices are accepted.
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, kind: ProductKind) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ProductKind::Physical(d) => write!(
                f,
                "Physical {:?} @ {} (size {}, weight {})",
                self.name, self.price, d.size, d.weight
            ),
            ProductKind::Digital(d) => write!(
                f,
                "Digital {:?} @ {} (code {}, expires {})",
                self.name, self.price, d.code, d.expires_on
            ),
        }
    }
}
