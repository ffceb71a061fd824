use std::collections::HashSet;

use serde::Serialize;

use tally_core::{Entity, OrderId, impl_identity_eq};
use tally_products::Product;

use crate::user::User;

/// An order: one buyer, an ordered list of products.
///
/// The same product may appear more than once. Duplicates matter for weight
/// totals and buyer lists, but count once for popularity.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    user: User,
    products: Vec<Product>,
}

impl_identity_eq!(Order);

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Order {
    pub fn new(user: User, products: impl Into<Vec<Product>>) -> Self {
        Self {
            id: OrderId::new(),
            user,
            products: products.into(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, product: &Product) -> bool {
        self.products.iter().any(|p| p == product)
    }

    /// Products with duplicates removed, in order of first appearance.
    pub fn distinct_products(&self) -> impl Iterator<Item = &Product> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(move |p| seen.insert(p.id_typed()))
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Order for {}: [", self.user)?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(product.name())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tally_products::ProductFactory;

    fn product(name: &str) -> Product {
        ProductFactory::physical(name, Decimal::ONE, 1, 1)
    }

    #[test]
    fn contains_uses_product_identity() {
        let a = product("A");
        let b = product("B");
        let lookalike = product("A");
        let order = Order::new(User::new("Alice", 32), vec![a.clone(), b.clone(), a.clone()]);

        assert!(order.contains(&a));
        assert!(order.contains(&b));
        assert!(!order.contains(&lookalike));
    }

    #[test]
    fn distinct_products_keep_first_appearance_order() {
        let a = product("A");
        let b = product("B");
        let order = Order::new(
            User::new("Bob", 19),
            vec![b.clone(), a.clone(), b.clone(), a.clone()],
        );

        let names: Vec<&str> = order.distinct_products().map(Product::name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn empty_orders_are_allowed() {
        let order = Order::new(User::new("John", 27), Vec::<Product>::new());
        assert!(order.products().is_empty());
        assert_eq!(order.distinct_products().count(), 0);
        assert_eq!(order.to_string(), "Order for John (27): []");
    }

    #[test]
    fn display_lists_buyer_and_product_names() {
        let order = Order::new(User::new("Charlie", 20), vec![product("A"), product("D")]);
        assert_eq!(order.to_string(), "Order for Charlie (20): [A, D]");
    }
}
