//! Shipping weight per order.

use tally_orders::Order;
use tally_products::{Product, ProductKind};

use crate::entity_map::EntityMap;

/// Order → total weight of its physical products, in input order.
pub type OrderWeights<'a> = EntityMap<'a, Order, u64>;

fn occurrence_weight(product: &Product) -> u64 {
    match product.kind() {
        ProductKind::Physical(details) => u64::from(details.weight),
        ProductKind::Digital(_) => 0,
    }
}

/// Sums the weight of every product occurrence in each order.
///
/// Duplicates are counted each time they appear; digital products weigh nothing.
pub fn order_weights(orders: &[Order]) -> OrderWeights<'_> {
    let mut weights = OrderWeights::new();
    for order in orders {
        let total: u64 = order.products().iter().map(occurrence_weight).sum();
        *weights.get_or_insert_with(order, || 0) = total;
    }

    tracing::debug!(orders = weights.len(), "computed order weights");
    weights
}
