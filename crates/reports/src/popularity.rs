//! Popularity: in how many orders does each product appear.

use tally_core::{CatalogError, CatalogResult};
use tally_orders::Order;
use tally_products::Product;

use crate::entity_map::EntityMap;

/// Per-product count of orders containing it, in first-seen order.
pub type Popularity<'a> = EntityMap<'a, Product, usize>;

/// Counts, for each product, the number of orders it appears in.
///
/// A product listed several times in one order still counts once for that order.
pub fn product_popularity(orders: &[Order]) -> Popularity<'_> {
    let mut counts = Popularity::new();
    for order in orders {
        for product in order.distinct_products() {
            *counts.get_or_insert_with(product, || 0) += 1;
        }
    }
    counts
}

/// The product appearing in the most orders.
///
/// Ties go to the product seen first (orders in sequence, products in order).
///
/// # Errors
///
/// [`CatalogError::EmptyInput`] when the orders contain no products at all.
pub fn most_popular_product(orders: &[Order]) -> CatalogResult<&Product> {
    let counts = product_popularity(orders);
    let (product, count) = counts
        .iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
        .ok_or_else(|| CatalogError::empty_input("no products found"))?;

    tracing::debug!(product = product.name(), orders = *count, "most popular product");
    Ok(product)
}
