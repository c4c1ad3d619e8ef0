// giftlist_core/src/uploader/mod.rs

//! One-shot mirroring of the catalog into a document store.
//!
//! Not part of the serving path: the uploader programs call `upload_catalog` once
//! and exit. Each product becomes one document keyed by its name, replacing any
//! document already stored under that key.

pub mod firestore;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::{error, info, instrument};

use crate::models::NewProduct;

pub use firestore::{FirestoreAuth, FirestoreClient, DEFAULT_FIRESTORE_BASE_URL};

/// Collection the storefront frontend reads products from.
pub const DEFAULT_COLLECTION: &str = "products";

#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Writes `document` under `collection/key`, overwriting whatever was there.
  async fn set_document(&self, collection: &str, key: &str, document: &JsonValue) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
  pub uploaded: usize,
  /// Names of the products whose upload failed.
  pub failed: Vec<String>,
}

impl UploadReport {
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty()
  }
}

/// Uploads every product independently; a failed record is logged and skipped.
#[instrument(name = "uploader::upload_catalog", skip(store, products), fields(count = products.len()))]
pub async fn upload_catalog(store: &dyn DocumentStore, collection: &str, products: &[NewProduct]) -> UploadReport {
  let mut report = UploadReport::default();

  for product in products {
    let outcome = match serde_json::to_value(product) {
      Ok(document) => store.set_document(collection, &product.product_name, &document).await,
      Err(e) => Err(e.into()),
    };

    match outcome {
      Ok(()) => {
        info!("Product uploaded: {}", product.product_name);
        report.uploaded += 1;
      }
      Err(e) => {
        error!(product_name = %product.product_name, "Failed to upload product: {:#}", e);
        report.failed.push(product.product_name.clone());
      }
    }
  }

  info!(
    "Upload finished: {} uploaded, {} failed.",
    report.uploaded,
    report.failed.len()
  );
  report
}
