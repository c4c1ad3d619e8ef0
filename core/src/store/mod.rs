// giftlist_core/src/store/mod.rs

//! Persistence seam shared by every service.
//!
//! Services only ever see `&dyn Store`, so the process-wide SQLite handle can be
//! swapped for a test double. Every operation is a single parameterized
//! statement; nothing here opens a transaction.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewOrder, NewProduct, Order, Product};

#[async_trait]
pub trait Store: Send + Sync {
  /// Number of rows in the product table.
  async fn count_products(&self) -> Result<i64>;

  /// Inserts one product and returns its assigned id.
  async fn insert_product(&self, product: &NewProduct) -> Result<i64>;

  /// All products in storage order.
  async fn list_products(&self) -> Result<Vec<Product>>;

  async fn get_product(&self, id: i64) -> Result<Option<Product>>;

  /// `stock = stock - quantity` for the product named exactly `product_name`.
  /// Returns the number of rows affected (0 when no product has that name).
  async fn decrement_stock(&self, product_name: &str, quantity: i64) -> Result<u64>;

  /// Absolute stock assignment by name. Returns the number of rows affected.
  async fn set_stock(&self, product_name: &str, stock: i64) -> Result<u64>;

  /// Appends an order and returns its id. Fails if `paypal_order_id` was already recorded.
  async fn insert_order(&self, order: &NewOrder) -> Result<i64>;

  async fn list_orders(&self) -> Result<Vec<Order>>;

  async fn get_order_by_payment_id(&self, paypal_order_id: &str) -> Result<Option<Order>>;
}
