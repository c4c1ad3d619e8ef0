// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper.

use async_trait::async_trait;
use giftlist::{DocumentStore, GiftlistError, NewOrder, NewProduct, Order, Product, SqliteStore, Store};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use serde_json::Value as JsonValue;
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Store fixtures ---
pub async fn empty_store() -> SqliteStore {
  SqliteStore::in_memory().await.expect("in-memory store")
}

/// A store holding one "Widget" with the given stock.
pub async fn widget_store(stock: i64) -> SqliteStore {
  let store = empty_store().await;
  store
    .insert_product(&NewProduct::new("Widget", 9.99, stock))
    .await
    .expect("insert Widget");
  store
}

pub async fn stock_of(store: &dyn Store, name: &str) -> i64 {
  store
    .list_products()
    .await
    .expect("list products")
    .into_iter()
    .find(|p| p.product_name == name)
    .map(|p| p.stock)
    .unwrap_or_else(|| panic!("product {name} missing"))
}

pub fn store_fault() -> GiftlistError {
  GiftlistError::Database(sqlx::Error::Protocol("injected failure".to_string()))
}

// --- Store double ---

/// Delegates to a real store but fails selected operations.
pub struct FaultyStore {
  pub inner: SqliteStore,
  /// Every operation fails.
  pub fail_all: bool,
  /// Decrements of these product names fail.
  pub fail_decrement_for: Vec<String>,
  pub fail_insert_for: Vec<String>,
}

impl FaultyStore {
  pub fn wrapping(inner: SqliteStore) -> Self {
    Self {
      inner,
      fail_all: false,
      fail_decrement_for: Vec::new(),
      fail_insert_for: Vec::new(),
    }
  }

  fn check(&self) -> giftlist::Result<()> {
    if self.fail_all {
      Err(store_fault())
    } else {
      Ok(())
    }
  }
}

#[async_trait]
impl Store for FaultyStore {
  async fn count_products(&self) -> giftlist::Result<i64> {
    self.check()?;
    self.inner.count_products().await
  }

  async fn insert_product(&self, product: &NewProduct) -> giftlist::Result<i64> {
    self.check()?;
    if self.fail_insert_for.contains(&product.product_name) {
      return Err(store_fault());
    }
    self.inner.insert_product(product).await
  }

  async fn list_products(&self) -> giftlist::Result<Vec<Product>> {
    self.check()?;
    self.inner.list_products().await
  }

  async fn get_product(&self, id: i64) -> giftlist::Result<Option<Product>> {
    self.check()?;
    self.inner.get_product(id).await
  }

  async fn decrement_stock(&self, product_name: &str, quantity: i64) -> giftlist::Result<u64> {
    self.check()?;
    if self.fail_decrement_for.iter().any(|n| n == product_name) {
      return Err(store_fault());
    }
    self.inner.decrement_stock(product_name, quantity).await
  }

  async fn set_stock(&self, product_name: &str, stock: i64) -> giftlist::Result<u64> {
    self.check()?;
    self.inner.set_stock(product_name, stock).await
  }

  async fn insert_order(&self, order: &NewOrder) -> giftlist::Result<i64> {
    self.check()?;
    self.inner.insert_order(order).await
  }

  async fn list_orders(&self) -> giftlist::Result<Vec<Order>> {
    self.check()?;
    self.inner.list_orders().await
  }

  async fn get_order_by_payment_id(&self, paypal_order_id: &str) -> giftlist::Result<Option<Order>> {
    self.check()?;
    self.inner.get_order_by_payment_id(paypal_order_id).await
  }
}

// --- Document store double ---

/// Records every write; keys listed in `reject` fail.
#[derive(Default)]
pub struct RecordingDocumentStore {
  pub writes: Mutex<Vec<(String, String, JsonValue)>>,
  pub reject: Vec<String>,
}

#[async_trait]
impl DocumentStore for RecordingDocumentStore {
  async fn set_document(&self, collection: &str, key: &str, document: &JsonValue) -> anyhow::Result<()> {
    if self.reject.iter().any(|k| k == key) {
      anyhow::bail!("permission denied for {key}");
    }
    self
      .writes
      .lock()
      .expect("writes lock")
      .push((collection.to_string(), key.to_string(), document.clone()));
    Ok(())
  }
}
