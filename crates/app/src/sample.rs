//! The reference dataset: four buyers, products A to D, four orders.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use tally_core::{CatalogError, CatalogResult};
use tally_orders::{Order, User};
use tally_products::{Product, ProductFactory};

#[derive(Debug, Clone)]
pub struct SampleCatalog {
    /// Catalog order: A, B, C, D.
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl SampleCatalog {
    /// # Errors
    ///
    /// [`CatalogError::InvalidArgument`] if a fixture expiry date is not a real date.
    pub fn reference() -> CatalogResult<Self> {
        let alice = User::new("Alice", 32);
        let bob = User::new("Bob", 19);
        let charlie = User::new("Charlie", 20);
        let john = User::new("John", 27);

        let a = ProductFactory::physical("Product A", Decimal::new(2050, 2), 10, 25);
        let b = ProductFactory::physical("Product B", Decimal::from(50), 6, 17);
        let c = ProductFactory::digital("Product C", Decimal::from(100), "xxx", date(2023, 5, 12)?);
        let d = ProductFactory::digital("Product D", Decimal::new(8125, 2), "yyy", date(2024, 6, 20)?);

        let orders = vec![
            Order::new(alice, vec![a.clone(), c.clone(), d.clone()]),
            Order::new(bob, vec![a.clone(), b.clone()]),
            Order::new(charlie, vec![a.clone(), d.clone()]),
            Order::new(john, vec![c.clone(), d.clone(), a.clone(), b.clone()]),
        ];

        Ok(Self {
            products: vec![a, b, c, d],
            orders,
        })
    }

    /// First product with the given name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }
}

fn date(year: i32, month: u32, day: u32) -> CatalogResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CatalogError::invalid_argument(format!("no such date {year:04}-{month:02}-{day:02}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_shape() {
        let catalog = SampleCatalog::reference().unwrap();
        assert_eq!(catalog.orders.len(), 4);

        let names: Vec<&str> = catalog.products.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Product A", "Product B", "Product C", "Product D"]);

        let buyers: Vec<&str> = catalog.orders.iter().map(|o| o.user().name()).collect();
        assert_eq!(buyers, vec!["Alice", "Bob", "Charlie", "John"]);

        let sizes: Vec<usize> = catalog.orders.iter().map(|o| o.products().len()).collect();
        assert_eq!(sizes, vec![3, 2, 2, 4]);
    }

    #[test]
    fn orders_share_product_identity_with_the_catalog() {
        let catalog = SampleCatalog::reference().unwrap();
        let a = catalog.product("Product A").unwrap();
        assert!(catalog.orders.iter().all(|o| o.contains(a)));
        assert!(catalog.product("Product Z").is_none());
    }

    #[test]
    fn expiry_dates_are_real_dates() {
        let catalog = SampleCatalog::reference().unwrap();
        let c = catalog.product("Product C").unwrap();
        assert!(c.to_string().ends_with("expires 2023-05-12)"));
    }

    #[test]
    fn impossible_dates_are_rejected() {
        assert_eq!(
            date(2023, 2, 30),
            Err(CatalogError::InvalidArgument("no such date 2023-02-30".to_string()))
        );
        assert_eq!(date(2024, 6, 20), Ok(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()));
    }
}
