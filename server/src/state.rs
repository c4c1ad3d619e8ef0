// giftlist/server/src/state.rs
use giftlist::Store;
use std::sync::Arc;

/// Shared by every handler. The store is injected here once at startup.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn Store>,
}

impl AppState {
  pub fn new(store: Arc<dyn Store>) -> Self {
    Self { store }
  }
}
