//! Shared fixtures for report tests.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use tally_orders::{Order, User};
use tally_products::{Product, ProductFactory};

/// Products plus the orders built from them.
#[derive(Debug, Clone)]
pub(crate) struct Catalog {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

/// (price in cents, weight, digital?)
pub(crate) type ProductSpec = (i64, u32, bool);
/// (buyer age, indices into the product list)
pub(crate) type OrderSpec = (u32, Vec<usize>);

impl Catalog {
    pub fn build(products: &[ProductSpec], orders: &[OrderSpec]) -> Self {
        let expires_on = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let products: Vec<Product> = products
            .iter()
            .enumerate()
            .map(|(i, &(cents, weight, digital))| {
                let name = format!("P{i}");
                let price = Decimal::new(cents, 2);
                if digital {
                    ProductFactory::digital(name, price, "xxx", expires_on)
                } else {
                    ProductFactory::physical(name, price, 1, weight)
                }
            })
            .collect();

        let orders = orders
            .iter()
            .enumerate()
            .map(|(i, (age, picks))| {
                let items: Vec<Product> = picks.iter().map(|&p| products[p].clone()).collect();
                Order::new(User::new(format!("U{i}"), *age), items)
            })
            .collect();

        Self { products, orders }
    }
}

/// Random catalog: 1..6 products, 0..6 orders of 0..6 picks each.
pub(crate) fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec((0i64..20_000, 0u32..50, any::<bool>()), 1..6)
        .prop_flat_map(|specs| {
            let n = specs.len();
            let orders = prop::collection::vec(
                (0u32..100, prop::collection::vec(0..n, 0..6)),
                0..6,
            );
            (Just(specs), orders)
        })
        .prop_map(|(specs, orders)| Catalog::build(&specs, &orders))
}

/// The four-order reference dataset.
pub(crate) struct Reference {
    pub a: Product,
    pub b: Product,
    pub c: Product,
    pub d: Product,
    pub orders: Vec<Order>,
}

pub(crate) fn reference() -> Reference {
    let alice = User::new("Alice", 32);
    let bob = User::new("Bob", 19);
    let charlie = User::new("Charlie", 20);
    let john = User::new("John", 27);

    let a = ProductFactory::physical("Product A", Decimal::new(2050, 2), 10, 25);
    let b = ProductFactory::physical("Product B", Decimal::from(50), 6, 17);
    let c = ProductFactory::digital(
        "Product C",
        Decimal::from(100),
        "xxx",
        NaiveDate::from_ymd_opt(2023, 5, 12).unwrap(),
    );
    let d = ProductFactory::digital(
        "Product D",
        Decimal::new(8125, 2),
        "yyy",
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
    );

    let orders = vec![
        Order::new(alice, vec![a.clone(), c.clone(), d.clone()]),
        Order::new(bob, vec![a.clone(), b.clone()]),
        Order::new(charlie, vec![a.clone(), d.clone()]),
        Order::new(john, vec![c.clone(), d.clone(), a.clone(), b.clone()]),
    ];

    Reference { a, b, c, d, orders }
}
