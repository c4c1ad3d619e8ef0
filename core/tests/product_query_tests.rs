// tests/product_query_tests.rs
mod common;
use common::*;
use giftlist::services::products::{get_product, list_products};
use giftlist::{GiftlistError, Store};

#[tokio::test]
async fn listing_an_empty_store_returns_nothing() {
  setup_tracing();
  let store = empty_store().await;
  let products = list_products(&store).await.unwrap();
  assert!(products.is_empty());
}

#[tokio::test]
async fn get_returns_current_row_values() {
  setup_tracing();
  let store = widget_store(5).await;
  let id = store.list_products().await.unwrap()[0].id;
  store.decrement_stock("Widget", 2).await.unwrap();

  let product = get_product(&store, id).await.unwrap();
  assert_eq!(product.product_name, "Widget");
  assert_eq!(product.price, 9.99);
  assert_eq!(product.stock, 3);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
  setup_tracing();
  let store = widget_store(5).await;
  let err = get_product(&store, 9_999).await.unwrap_err();
  assert!(matches!(err, GiftlistError::NotFound(_)));
}

#[tokio::test]
async fn store_faults_are_internal_not_not_found() {
  setup_tracing();
  let mut store = FaultyStore::wrapping(widget_store(5).await);
  store.fail_all = true;

  let err = get_product(&store, 1).await.unwrap_err();
  assert!(err.is_internal());
  assert!(list_products(&store).await.unwrap_err().is_internal());
}
