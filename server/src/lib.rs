// giftlist/server/src/lib.rs

//! HTTP surface and offline tooling for the gift-registry storefront.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod upload;
pub mod web;

pub use crate::config::{AppConfig, UploadVariant, UploaderConfig};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
