// giftlist_core/src/services/mod.rs

//! Request-level operations. Each takes the injected store handle and performs a
//! plain sequence of store calls, never a transaction.

pub mod orders;
pub mod products;
pub mod stock;
