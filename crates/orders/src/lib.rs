//! Orders domain module.
//!
//! Buyers, and the orders tying one buyer to the products they bought, in
//! purchase order.

pub mod order;
pub mod user;

pub use order::Order;
pub use user::User;
