// giftlist/server/src/upload.rs

//! Shared body of the two Firestore uploader programs.

use giftlist::uploader::{upload_catalog, FirestoreClient, UploadReport};
use giftlist::seed_products;
use tracing::{info, warn};

use crate::config::{UploadVariant, UploaderConfig};
use crate::errors::Result;

/// Pushes the fixed catalog to Firestore with the credential `variant` selects.
///
/// Only configuration problems are errors; per-product failures end up in the report.
pub async fn run_upload(variant: UploadVariant) -> Result<UploadReport> {
  let config = UploaderConfig::from_env(variant)?;
  info!(
    project = %config.project_id,
    collection = %config.collection,
    ?variant,
    "Starting catalog upload to Firestore..."
  );

  let client = FirestoreClient::new(&config.base_url, config.project_id.clone(), config.auth.clone())?;
  let report = upload_catalog(&client, &config.collection, &seed_products()).await;

  if report.is_complete() {
    info!("Upload completed: {} products.", report.uploaded);
  } else {
    warn!(failed = ?report.failed, "Upload completed with {} failures.", report.failed.len());
  }
  Ok(report)
}
