// giftlist/server/src/web/handlers/webhook_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use giftlist::services::orders::{self, WebhookOutcome};
use serde_json::{json, Value as JsonValue};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// PayPal notification endpoint. The payload is trusted as-is; there is no signature check.
#[instrument(
    name = "handler::paypal_webhook",
    skip(app_state, req, body),
    fields(content_type = ?req.headers().get("content-type").map(|h| h.to_str().unwrap_or_default()))
)]
pub async fn paypal_webhook_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  info!("Received PayPal webhook. Payload size: {} bytes.", body.len());

  // Parsed by hand rather than through web::Json so a missing content type is not a rejection.
  let payload: JsonValue = serde_json::from_slice(&body).map_err(|e| {
    warn!("Failed to parse webhook payload: {}", e);
    AppError::Validation(format!("Invalid JSON payload: {}", e))
  })?;

  let message = match orders::handle_notification(app_state.store.clone(), &payload).await? {
    WebhookOutcome::Ignored(_) => "Event ignored",
    WebhookOutcome::Processed(report) => {
      info!(
        transaction_id = %report.transaction_id,
        order_recorded = report.order_recorded(),
        "Webhook processed."
      );
      "Webhook received and stock updated"
    }
  };

  Ok(HttpResponse::Ok().json(json!({ "success": true, "message": message })))
}
