//! Aggregate queries over a list of orders.
//!
//! Every query is a pure function of its borrowed inputs. Results borrow from the
//! inputs rather than cloning entities, and map-shaped results keep first-seen
//! insertion order so that what gets printed is stable from run to run.

pub mod buyers;
pub mod entity_map;
pub mod popularity;
pub mod pricing;
pub mod weight;

#[cfg(test)]
pub(crate) mod test_support;

pub use buyers::{ProductBuyers, average_buyer_age, product_buyers, sort_orders_by_buyer_age_desc};
pub use entity_map::EntityMap;
pub use popularity::{Popularity, most_popular_product, product_popularity};
pub use pricing::{most_expensive_product, sort_products_by_price};
pub use weight::{OrderWeights, order_weights};
