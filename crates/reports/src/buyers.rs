//! Buyer-oriented queries.

use tally_core::{CatalogError, CatalogResult};
use tally_orders::{Order, User};
use tally_products::Product;

use crate::entity_map::EntityMap;

/// Product → users who bought it, in first-seen product order.
///
/// A user appears once per occurrence of the product, so an order listing a
/// product twice contributes its buyer twice.
pub type ProductBuyers<'a> = EntityMap<'a, Product, Vec<&'a User>>;

/// Mean age of the buyers on orders containing `product`.
///
/// Each qualifying order contributes one age, however often the product appears in it.
///
/// # Errors
///
/// [`CatalogError::NotFound`] when no order contains the product.
pub fn average_buyer_age(product: &Product, orders: &[Order]) -> CatalogResult<f64> {
    let ages: Vec<u32> = orders
        .iter()
        .filter(|order| order.contains(product))
        .map(|order| order.user().age())
        .collect();

    if ages.is_empty() {
        return Err(CatalogError::not_found(format!(
            "no users found for product {:?}",
            product.name()
        )));
    }

    let sum: f64 = ages.iter().map(|&age| f64::from(age)).sum();
    let average = sum / ages.len() as f64;

    tracing::debug!(product = product.name(), buyers = ages.len(), average, "average buyer age");
    Ok(average)
}

/// Maps every product to the buyers of each of its occurrences.
pub fn product_buyers(orders: &[Order]) -> ProductBuyers<'_> {
    let mut buyers = ProductBuyers::new();
    for order in orders {
        for product in order.products() {
            buyers.get_or_insert_with(product, Vec::new).push(order.user());
        }
    }

    tracing::debug!(products = buyers.len(), "built product buyers map");
    buyers
}

/// Orders sorted by buyer age, oldest first. Equal ages keep their input order.
pub fn sort_orders_by_buyer_age_desc(orders: &[Order]) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.user().age().cmp(&a.user().age()));
    sorted
}
