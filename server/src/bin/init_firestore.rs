// giftlist/server/src/bin/init_firestore.rs

//! One-shot catalog initialization using the Firebase web API key (`FIREBASE_API_KEY`).
//! Writes are subject to the project's Firestore security rules.

use giftlist_server::{telemetry, upload, UploadVariant};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  telemetry::init_tracing();
  upload::run_upload(UploadVariant::Web).await?;
  Ok(())
}
