// giftlist_core/src/services/stock.rs

use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::{error, info, instrument};

use crate::error::{GiftlistError, Result};
use crate::store::Store;

/// Body of a manual stock adjustment. Fields stay untyped so that missing and
/// malformed values are both reported as validation errors by `StockAdjustment`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockUpdateRequest {
  #[serde(rename = "productName", default)]
  pub product_name: Option<JsonValue>,
  #[serde(rename = "newStock", default)]
  pub new_stock: Option<JsonValue>,
}

/// A validated absolute stock assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
  pub product_name: String,
  pub new_stock: i64,
}

impl TryFrom<&StockUpdateRequest> for StockAdjustment {
  type Error = GiftlistError;

  fn try_from(request: &StockUpdateRequest) -> Result<Self> {
    let missing = || GiftlistError::Validation("productName and newStock are required".to_string());

    let product_name = match &request.product_name {
      Some(JsonValue::String(name)) if !name.is_empty() => name.clone(),
      Some(JsonValue::String(_)) | None => return Err(missing()),
      Some(_) => return Err(GiftlistError::Validation("productName must be a string".to_string())),
    };

    let new_stock = match &request.new_stock {
      None => return Err(missing()),
      Some(value) => stock_value(value)
        .ok_or_else(|| GiftlistError::Validation("newStock must be an integer".to_string()))?,
    };

    Ok(Self { product_name, new_stock })
  }
}

fn stock_value(value: &JsonValue) -> Option<i64> {
  match value {
    JsonValue::Number(n) => n
      .as_i64()
      .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)),
    JsonValue::String(s) => s.trim().parse::<i64>().ok(),
    _ => None,
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockUpdateReport {
  pub product_name: String,
  pub new_stock: i64,
  /// Zero when no product carries the name; still a success.
  pub rows_matched: u64,
}

impl StockUpdateReport {
  pub fn message(&self) -> String {
    format!("Stock updated: {} = {}", self.product_name, self.new_stock)
  }
}

/// Validates the request, then sets the named product's stock to exactly the given value.
#[instrument(name = "stock::set", skip(store, request))]
pub async fn set_stock(store: &dyn Store, request: &StockUpdateRequest) -> Result<StockUpdateReport> {
  let adjustment = StockAdjustment::try_from(request)?;

  let rows_matched = store
    .set_stock(&adjustment.product_name, adjustment.new_stock)
    .await
    .map_err(|e| {
      error!(product_name = %adjustment.product_name, "Failed to set stock: {}", e);
      e
    })?;

  info!(
    product_name = %adjustment.product_name,
    new_stock = adjustment.new_stock,
    rows_matched,
    "Manual stock adjustment applied."
  );

  Ok(StockUpdateReport {
    product_name: adjustment.product_name,
    new_stock: adjustment.new_stock,
    rows_matched,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn request(body: JsonValue) -> StockUpdateRequest {
    serde_json::from_value(body).unwrap()
  }

  #[test]
  fn accepts_numbers_and_numeric_strings() {
    let parsed = StockAdjustment::try_from(&request(json!({ "productName": "Widget", "newStock": 10 }))).unwrap();
    assert_eq!(parsed, StockAdjustment { product_name: "Widget".to_string(), new_stock: 10 });

    let parsed = StockAdjustment::try_from(&request(json!({ "productName": "Widget", "newStock": "-3" }))).unwrap();
    assert_eq!(parsed.new_stock, -3);

    let parsed = StockAdjustment::try_from(&request(json!({ "productName": "Widget", "newStock": 0 }))).unwrap();
    assert_eq!(parsed.new_stock, 0);
  }

  #[test]
  fn rejects_missing_or_malformed_fields() {
    for body in [
      json!({ "productName": "Widget" }),
      json!({ "newStock": 4 }),
      json!({ "productName": "", "newStock": 4 }),
      json!({ "productName": "Widget", "newStock": null }),
      json!({ "productName": "Widget", "newStock": 1.5 }),
      json!({ "productName": "Widget", "newStock": "many" }),
      json!({ "productName": 7, "newStock": 4 }),
    ] {
      let err = StockAdjustment::try_from(&request(body.clone())).unwrap_err();
      assert!(matches!(err, GiftlistError::Validation(_)), "body {body} gave {err:?}");
    }
  }
}
