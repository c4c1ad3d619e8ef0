// giftlist/server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use giftlist::GiftlistError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {0}")]
  Store(#[source] GiftlistError),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Caller mistakes keep their own status; everything else from the core is a store fault.
impl From<GiftlistError> for AppError {
  fn from(err: GiftlistError) -> Self {
    match err {
      GiftlistError::Validation(m) => AppError::Validation(m),
      GiftlistError::NotFound(m) => AppError::NotFound(m),
      other => AppError::Store(other),
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(format!("{:#}", err))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response; only client errors echo their message.
    match self {
      AppError::Validation(_) | AppError::NotFound(_) => {
        tracing::warn!(application_error = %self, "Responding with client error");
      }
      _ => tracing::error!(application_error = %self, "Responding with error"),
    }
    let body = match self {
      AppError::Validation(m) | AppError::NotFound(m) => json!({ "error": m }),
      AppError::Config(_) => json!({ "error": "Configuration issue" }),
      AppError::Store(_) => json!({ "error": "Database operation failed" }),
      AppError::Internal(_) => json!({ "error": "An internal error occurred" }),
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
