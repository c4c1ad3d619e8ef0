// giftlist_core/src/paypal.rs

//! Typed view over PayPal webhook notifications.
//!
//! PayPal posts loosely shaped JSON; this module turns the few fields the
//! storefront cares about into a `Notification` with explicit precedence and
//! defaulting rules, so the ingestion service never pokes at raw JSON.

use serde_json::Value as JsonValue;

use crate::error::{GiftlistError, Result};

pub const CHECKOUT_ORDER_APPROVED: &str = "CHECKOUT.ORDER.APPROVED";
pub const PAYMENT_CAPTURE_COMPLETED: &str = "PAYMENT.CAPTURE.COMPLETED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
  OrderApproved,
  CaptureCompleted,
  /// Any other tag, or none at all.
  Other(Option<String>),
}

impl EventKind {
  pub fn from_event_type(event_type: Option<&str>) -> Self {
    match event_type {
      Some(CHECKOUT_ORDER_APPROVED) => EventKind::OrderApproved,
      Some(PAYMENT_CAPTURE_COMPLETED) => EventKind::CaptureCompleted,
      other => EventKind::Other(other.map(str::to_string)),
    }
  }

  /// Only approved orders and completed captures touch stock.
  pub fn is_actionable(&self) -> bool {
    !matches!(self, EventKind::Other(_))
  }
}

/// One purchased line. `name` is matched exactly against `products.product_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
  pub name: Option<String>,
  pub quantity: i64,
}

/// The actionable part of a payment notification.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentEvent {
  pub kind: EventKind,
  pub transaction_id: String,
  pub total: f64,
  pub items: Vec<LineItem>,
  /// JSON text of the items array as delivered, stored verbatim on the order.
  pub items_snapshot: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
  Ignored(EventKind),
  Actionable(PaymentEvent),
}

/// Classifies a webhook body and extracts the payment event from it.
///
/// Non-actionable event types are `Ignored` without looking at the resource.
/// An actionable event without a resolvable transaction id is a validation error.
pub fn parse_notification(payload: &JsonValue) -> Result<Notification> {
  let kind = EventKind::from_event_type(payload.get("event_type").and_then(JsonValue::as_str));
  if !kind.is_actionable() {
    return Ok(Notification::Ignored(kind));
  }

  let resource = payload.get("resource");
  let transaction_id = resolve_transaction_id(resource)
    .ok_or_else(|| GiftlistError::Validation("Order ID not found in webhook payload".to_string()))?;

  let first_unit = resource
    .and_then(|r| r.get("purchase_units"))
    .and_then(|units| units.get(0));

  let raw_items: &[JsonValue] = first_unit
    .and_then(|unit| unit.get("items"))
    .and_then(JsonValue::as_array)
    .map(Vec::as_slice)
    .unwrap_or_default();

  let items = raw_items
    .iter()
    .map(|item| LineItem {
      name: item.get("name").and_then(JsonValue::as_str).map(str::to_string),
      quantity: coerce_quantity(item.get("quantity")),
    })
    .collect();

  let total = coerce_amount(first_unit.and_then(|unit| unit.pointer("/amount/value")));
  let items_snapshot = serde_json::to_string(raw_items).unwrap_or_else(|_| "[]".to_string());

  Ok(Notification::Actionable(PaymentEvent {
    kind,
    transaction_id,
    total,
    items,
    items_snapshot,
  }))
}

/// `resource.id` first, then `resource.supplementary_data.related_ids.order_id`.
///
/// Empty strings and zero count as absent; numeric ids are rendered as strings.
pub fn resolve_transaction_id(resource: Option<&JsonValue>) -> Option<String> {
  let resource = resource?;
  let primary = resource.get("id");
  let fallback = resource.pointer("/supplementary_data/related_ids/order_id");
  [primary, fallback].into_iter().flatten().find_map(id_from_value)
}

fn id_from_value(value: &JsonValue) -> Option<String> {
  match value {
    JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
    JsonValue::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
    _ => None,
  }
}

/// Quantity of a line item. Integers are taken as-is, floats truncated, strings
/// read up to the first non-digit. Zero, garbage or absence all mean 1.
/// Negative quantities pass through unchanged.
pub fn coerce_quantity(value: Option<&JsonValue>) -> i64 {
  let parsed = match value {
    Some(JsonValue::Number(n)) => n
      .as_i64()
      .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
    Some(JsonValue::String(s)) => leading_integer(s),
    _ => None,
  };
  match parsed {
    Some(quantity) if quantity != 0 => quantity,
    _ => 1,
  }
}

fn leading_integer(text: &str) -> Option<i64> {
  let trimmed = text.trim_start();
  let (sign, digits) = match trimmed.strip_prefix('-') {
    Some(rest) => (-1, rest),
    None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
  };
  let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
  if end == 0 {
    return None;
  }
  digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Captured amount; PayPal sends it as a decimal string. Anything unusable is 0.
pub fn coerce_amount(value: Option<&JsonValue>) -> f64 {
  match value {
    Some(JsonValue::Number(n)) => n.as_f64().unwrap_or(0.0),
    Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
    _ => 0.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn capture(resource: JsonValue) -> JsonValue {
    json!({ "event_type": PAYMENT_CAPTURE_COMPLETED, "resource": resource })
  }

  #[test]
  fn unknown_event_types_are_ignored_before_validation() {
    let parsed = parse_notification(&json!({ "event_type": "PAYMENT.REFUNDED" })).unwrap();
    assert_eq!(
      parsed,
      Notification::Ignored(EventKind::Other(Some("PAYMENT.REFUNDED".to_string())))
    );

    let missing = parse_notification(&json!({})).unwrap();
    assert_eq!(missing, Notification::Ignored(EventKind::Other(None)));
  }

  #[test]
  fn transaction_id_prefers_resource_id() {
    let resource = json!({
      "id": "CAP-1",
      "supplementary_data": { "related_ids": { "order_id": "ORD-1" } }
    });
    assert_eq!(resolve_transaction_id(Some(&resource)).as_deref(), Some("CAP-1"));
  }

  #[test]
  fn transaction_id_falls_back_to_related_order() {
    let resource = json!({
      "id": "",
      "supplementary_data": { "related_ids": { "order_id": "ORD-1" } }
    });
    assert_eq!(resolve_transaction_id(Some(&resource)).as_deref(), Some("ORD-1"));
    assert_eq!(resolve_transaction_id(Some(&json!({ "id": 42 }))).as_deref(), Some("42"));
    assert_eq!(resolve_transaction_id(Some(&json!({ "id": null }))), None);
    assert_eq!(resolve_transaction_id(None), None);
  }

  #[test]
  fn actionable_event_without_id_is_a_validation_error() {
    let err = parse_notification(&capture(json!({ "purchase_units": [] }))).unwrap_err();
    assert!(matches!(err, GiftlistError::Validation(_)));
  }

  #[test]
  fn quantity_coercion_follows_integer_prefix_rules() {
    assert_eq!(coerce_quantity(Some(&json!(2))), 2);
    assert_eq!(coerce_quantity(Some(&json!("3"))), 3);
    assert_eq!(coerce_quantity(Some(&json!(" 4 units"))), 4);
    assert_eq!(coerce_quantity(Some(&json!(2.9))), 2);
    assert_eq!(coerce_quantity(Some(&json!("-2"))), -2);
    assert_eq!(coerce_quantity(Some(&json!("0"))), 1);
    assert_eq!(coerce_quantity(Some(&json!("abc"))), 1);
    assert_eq!(coerce_quantity(Some(&json!(null))), 1);
    assert_eq!(coerce_quantity(None), 1);
  }

  #[test]
  fn extracts_items_total_and_snapshot() {
    let payload = capture(json!({
      "id": "X123",
      "purchase_units": [{
        "amount": { "value": "45.50" },
        "items": [{ "name": "Widget", "quantity": "2" }, { "quantity": 1 }]
      }]
    }));

    let Notification::Actionable(event) = parse_notification(&payload).unwrap() else {
      panic!("expected an actionable event");
    };
    assert_eq!(event.kind, EventKind::CaptureCompleted);
    assert_eq!(event.transaction_id, "X123");
    assert_eq!(event.total, 45.5);
    assert_eq!(
      event.items,
      vec![
        LineItem { name: Some("Widget".to_string()), quantity: 2 },
        LineItem { name: None, quantity: 1 },
      ]
    );
    let snapshot: JsonValue = serde_json::from_str(&event.items_snapshot).unwrap();
    assert_eq!(snapshot, json!([{ "name": "Widget", "quantity": "2" }, { "quantity": 1 }]));
  }

  #[test]
  fn missing_units_default_to_no_items_and_zero_total() {
    let payload = json!({ "event_type": CHECKOUT_ORDER_APPROVED, "resource": { "id": "O-9" } });
    let Notification::Actionable(event) = parse_notification(&payload).unwrap() else {
      panic!("expected an actionable event");
    };
    assert!(event.items.is_empty());
    assert_eq!(event.total, 0.0);
    assert_eq!(event.items_snapshot, "[]");
  }
}
