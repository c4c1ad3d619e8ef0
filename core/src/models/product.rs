// giftlist_core/src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `products` table. Serialized with the column names as JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i64,
  pub product_name: String,
  pub price: f64,
  pub stock: i64, // No floor: webhook decrements may drive this negative.
  pub sku: Option<String>,
  pub brand: Option<String>,
  pub description: Option<String>,
  pub image: Option<String>,
}

/// A product as it exists before the store assigns an id.
///
/// This is also the document shape pushed to the document store by the uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
  pub product_name: String,
  pub price: f64,
  pub stock: i64,
  pub sku: Option<String>,
  pub brand: Option<String>,
  pub description: Option<String>,
  pub image: Option<String>,
}

impl NewProduct {
  pub fn new(product_name: impl Into<String>, price: f64, stock: i64) -> Self {
    Self {
      product_name: product_name.into(),
      price,
      stock,
      sku: None,
      brand: None,
      description: None,
      image: None,
    }
  }
}
