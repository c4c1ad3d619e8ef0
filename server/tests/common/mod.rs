// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset.

use std::sync::Arc;

use giftlist::{NewProduct, SqliteStore, Store};
use giftlist_server::{AppConfig, AppState};

pub fn test_config() -> Arc<AppConfig> {
  Arc::new(AppConfig::from_lookup(|_| None).expect("default config"))
}

/// In-memory store holding a single "Widget" with `stock` units.
pub async fn widget_store(stock: i64) -> SqliteStore {
  let store = SqliteStore::in_memory().await.expect("in-memory store");
  store
    .insert_product(&NewProduct::new("Widget", 9.99, stock))
    .await
    .expect("insert Widget");
  store
}

pub fn state_for(store: &SqliteStore) -> AppState {
  AppState::new(Arc::new(store.clone()))
}

/// A store whose pool is already closed: every statement fails.
pub async fn broken_store() -> SqliteStore {
  let store = SqliteStore::in_memory().await.expect("in-memory store");
  store.close().await;
  store
}

pub async fn stock_of(store: &SqliteStore, name: &str) -> i64 {
  store
    .list_products()
    .await
    .expect("list products")
    .into_iter()
    .find(|p| p.product_name == name)
    .map(|p| p.stock)
    .unwrap_or_else(|| panic!("product {name} missing"))
}
