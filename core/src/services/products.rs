// giftlist_core/src/services/products.rs

use tracing::{error, info, instrument, warn};

use crate::error::{GiftlistError, Result};
use crate::models::Product;
use crate::store::Store;

/// Every product in storage order. An empty catalog is an empty list, never an error.
#[instrument(name = "products::list", skip(store))]
pub async fn list_products(store: &dyn Store) -> Result<Vec<Product>> {
  let products = store.list_products().await.map_err(|e| {
    error!("Failed to fetch products from database: {}", e);
    e
  })?;
  info!("Fetched {} products.", products.len());
  Ok(products)
}

#[instrument(name = "products::get", skip(store))]
pub async fn get_product(store: &dyn Store, id: i64) -> Result<Product> {
  let product = store.get_product(id).await.map_err(|e| {
    error!("Database error while fetching product {}: {}", id, e);
    e
  })?;

  match product {
    Some(product) => Ok(product),
    None => {
      warn!("Product with ID {} not found.", id);
      Err(GiftlistError::NotFound("Product not found".to_string()))
    }
  }
}
