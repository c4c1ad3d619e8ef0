// giftlist/server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use giftlist::uploader::{FirestoreAuth, DEFAULT_COLLECTION, DEFAULT_FIRESTORE_BASE_URL};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  // Seed the fixed catalog into an empty store after the listener is up.
  pub seed_db: bool,
  // Single origin allowed by CORS; any origin when unset.
  pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = lookup("PORT")
      .unwrap_or_else(|| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid PORT: {}", e)))?;
    let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://lista_nascita.db".to_string());
    let seed_db = lookup("SEED_DB")
      .unwrap_or_else(|| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;
    let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.trim().is_empty());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
      cors_allowed_origin,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

/// Which credential the uploader authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadVariant {
  /// Service-account access token (`FIRESTORE_ACCESS_TOKEN`).
  Admin,
  /// Browser API key of the Firebase project (`FIREBASE_API_KEY`).
  Web,
}

#[derive(Debug, Clone)]
pub struct UploaderConfig {
  pub project_id: String,
  pub collection: String,
  pub base_url: String,
  pub auth: FirestoreAuth,
}

impl UploaderConfig {
  pub fn from_env(variant: UploadVariant) -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(variant, |name| env::var(name).ok())
  }

  pub fn from_lookup(variant: UploadVariant, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let required = |name: &str| {
      lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", name)))
    };

    let project_id = required("FIRESTORE_PROJECT_ID")?;
    let auth = match variant {
      UploadVariant::Admin => FirestoreAuth::BearerToken(required("FIRESTORE_ACCESS_TOKEN")?),
      UploadVariant::Web => FirestoreAuth::ApiKey(required("FIREBASE_API_KEY")?),
    };
    let collection = lookup("FIRESTORE_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
    let base_url = lookup("FIRESTORE_BASE_URL").unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string());

    Ok(Self {
      project_id,
      collection,
      base_url,
      auth,
    })
  }
}
