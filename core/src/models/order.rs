// giftlist_core/src/models/order.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// The only status an order ever has; there is no cancel or refund flow.
pub const ORDER_STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub paypal_order_id: String,
  pub total: f64,
  pub status: String,
  // JSON text of the purchased items exactly as the webhook delivered them.
  pub items: Option<String>,
  // Set by the store (CURRENT_TIMESTAMP, UTC).
  pub created_at: Option<NaiveDateTime>,
}

/// Values captured from an accepted webhook; status and timestamp come from column defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
  pub paypal_order_id: String,
  pub total: f64,
  pub items: String,
}
