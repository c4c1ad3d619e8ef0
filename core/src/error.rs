// giftlist_core/src/error.rs
use orka::OrkaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftlistError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Database Error: {0}")]
  Database(#[from] sqlx::Error),

  /// The ingestion pipeline itself misbehaved (missing handler, no outcome).
  #[error("Workflow Error: {0}")]
  Workflow(#[from] OrkaError),
}

impl GiftlistError {
  /// True for faults of the underlying store or pipeline, as opposed to problems with the caller's input.
  pub fn is_internal(&self) -> bool {
    matches!(self, GiftlistError::Database(_) | GiftlistError::Workflow(_))
  }
}

pub type Result<T, E = GiftlistError> = std::result::Result<T, E>;
