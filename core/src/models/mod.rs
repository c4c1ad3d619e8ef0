// giftlist_core/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod order;
pub mod product;

pub use order::{NewOrder, Order, ORDER_STATUS_COMPLETED};
pub use product::{NewProduct, Product};
