//! Price-based queries.

use tally_core::{CatalogError, CatalogResult};
use tally_orders::Order;
use tally_products::Product;

/// The highest-priced product across every order, duplicates included.
///
/// Among equally priced products the first one met (orders in sequence, products
/// in order) is returned.
///
/// # Errors
///
/// [`CatalogError::EmptyInput`] when the orders contain no products at all.
pub fn most_expensive_product(orders: &[Order]) -> CatalogResult<&Product> {
    let product = orders
        .iter()
        .flat_map(|order| order.products())
        .reduce(|best, p| if p.price() > best.price() { p } else { best })
        .ok_or_else(|| CatalogError::empty_input("no products found"))?;

    tracing::debug!(product = product.name(), price = %product.price(), "most expensive product");
    Ok(product)
}

/// Products sorted ascending by price. Equal prices keep their input order.
pub fn sort_products_by_price(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by_key(|p| p.price());
    sorted
}
