// src/lib.rs

//! Giftlist: the storefront core behind a gift-registry ("lista nascita") site.
//!
//! The crate covers everything the HTTP layer needs but nothing HTTP-specific:
//!  - A `Store` trait over the `products` / `orders` tables, with a SQLite implementation.
//!  - The fixed seed catalog and the startup seeder that inserts it into an empty store.
//!  - Typed extraction of PayPal webhook notifications.
//!  - Services for product queries, order ingestion (an orka pipeline) and manual stock adjustment.
//!  - A bulk uploader that mirrors the catalog into a document store (Firestore).

pub mod catalog;
pub mod error;
pub mod models;
pub mod paypal;
pub mod services;
pub mod store;
pub mod uploader;

// --- Re-exports for the Public API ---

pub use crate::catalog::{seed_catalog, seed_products, SeedOutcome};
pub use crate::error::{GiftlistError, Result};
pub use crate::models::{NewOrder, NewProduct, Order, Product};
pub use crate::paypal::{EventKind, LineItem, PaymentEvent};
pub use crate::services::orders::{IngestionReport, WebhookOutcome};
pub use crate::store::sqlite::SqliteStore;
pub use crate::store::Store;
pub use crate::uploader::{upload_catalog, DocumentStore, UploadReport};

pub use orka::OrkaError;
