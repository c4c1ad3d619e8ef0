// giftlist/server/src/bin/upload_firestore.rs

//! One-shot catalog upload using a service-account access token
//! (`FIRESTORE_ACCESS_TOKEN`, e.g. from `gcloud auth print-access-token`).

use giftlist_server::{telemetry, upload, UploadVariant};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing();
  upload::run_upload(UploadVariant::Admin).await?;
  Ok(())
}
