// giftlist_core/src/services/orders.rs

//! Order ingestion: what happens when PayPal reports a completed payment.
//!
//! A notification runs through an orka pipeline:
//! `parse_notification` → `decrement_stock` → `record_order` → `acknowledge`.
//! Parsing stops the pipeline for events that are not actionable.
//!
//! Stock decrements and the order insert are independent statements. A failure in
//! one is logged and the rest still run, so a notification is never half-rejected
//! once it has been classified as actionable. Replaying a notification decrements
//! stock again before its order insert trips the uniqueness constraint.

use std::sync::Arc;

use orka::{ContextData, Pipeline, PipelineControl, PipelineResult};
use serde_json::Value as JsonValue;
use tracing::{error, info, instrument, warn};

use crate::error::{GiftlistError, Result};
use crate::models::NewOrder;
use crate::paypal::{self, EventKind, Notification, PaymentEvent};
use crate::store::Store;

/// Aggregate result of applying one payment event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionReport {
  pub transaction_id: String,
  pub items_seen: usize,
  /// Sum of rows affected across all decrements.
  pub rows_decremented: u64,
  /// Items without a name, or whose name matched no product.
  pub unmatched_items: usize,
  pub failed_items: usize,
  /// Id of the appended order, `None` when the insert failed (e.g. a replayed notification).
  pub order_id: Option<i64>,
}

impl IngestionReport {
  fn for_event(event: &PaymentEvent) -> Self {
    Self {
      transaction_id: event.transaction_id.clone(),
      items_seen: event.items.len(),
      rows_decremented: 0,
      unmatched_items: 0,
      failed_items: 0,
      order_id: None,
    }
  }

  pub fn order_recorded(&self) -> bool {
    self.order_id.is_some()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
  /// Accepted but not actionable; nothing was written.
  Ignored(EventKind),
  Processed(IngestionReport),
}

/// Pipeline context for one notification.
pub struct IngestionCtxData {
  pub store: Arc<dyn Store>,
  pub payload: JsonValue,
  /// Set by `parse_notification` for actionable events.
  pub event: Option<PaymentEvent>,
  /// Set by `parse_notification` when the pipeline stops early.
  pub ignored: Option<EventKind>,
  pub report: Option<IngestionReport>,
}

impl IngestionCtxData {
  pub fn new(store: Arc<dyn Store>, payload: JsonValue) -> Self {
    Self {
      store,
      payload,
      event: None,
      ignored: None,
      report: None,
    }
  }
}

/// Builds the four-step ingestion pipeline.
pub fn ingestion_pipeline() -> Pipeline<IngestionCtxData, GiftlistError> {
  let mut p = Pipeline::<IngestionCtxData, GiftlistError>::new(&[
    ("parse_notification", false, None),
    ("decrement_stock", false, None),
    ("record_order", false, None),
    ("acknowledge", false, None),
  ]);

  p.on_root("parse_notification", |ctx_data: ContextData<IngestionCtxData>| {
    Box::pin(async move {
      let mut guard = ctx_data.write();
      match paypal::parse_notification(&guard.payload)? {
        Notification::Ignored(kind) => {
          info!(event = ?kind, "Webhook event is not actionable; ignoring.");
          guard.ignored = Some(kind);
          Ok::<_, GiftlistError>(PipelineControl::Stop)
        }
        Notification::Actionable(event) => {
          guard.report = Some(IngestionReport::for_event(&event));
          guard.event = Some(event);
          Ok(PipelineControl::Continue)
        }
      }
    })
  });

  p.on_root("decrement_stock", |ctx_data: ContextData<IngestionCtxData>| {
    Box::pin(async move {
      let (store, items) = {
        let guard = ctx_data.read();
        let items = guard.event.as_ref().map(|e| e.items.clone()).unwrap_or_default();
        (guard.store.clone(), items)
      };

      let (mut rows_decremented, mut unmatched, mut failed) = (0u64, 0usize, 0usize);
      for item in &items {
        let Some(name) = item.name.as_deref() else {
          warn!("Line item without a name; no stock to update.");
          unmatched += 1;
          continue;
        };

        match store.decrement_stock(name, item.quantity).await {
          Ok(0) => {
            warn!(product_name = name, "No product matches line item; stock unchanged.");
            unmatched += 1;
          }
          Ok(rows) => {
            info!(product_name = name, quantity = item.quantity, "Stock updated (-{}).", item.quantity);
            rows_decremented += rows;
          }
          Err(e) => {
            error!(product_name = name, "Failed to update stock: {}", e);
            failed += 1;
          }
        }
      }

      if let Some(report) = ctx_data.write().report.as_mut() {
        report.rows_decremented = rows_decremented;
        report.unmatched_items = unmatched;
        report.failed_items = failed;
      }
      Ok::<_, GiftlistError>(PipelineControl::Continue)
    })
  });

  p.on_root("record_order", |ctx_data: ContextData<IngestionCtxData>| {
    Box::pin(async move {
      let (store, order) = {
        let guard = ctx_data.read();
        let order = guard.event.as_ref().map(|event| NewOrder {
          paypal_order_id: event.transaction_id.clone(),
          total: event.total,
          items: event.items_snapshot.clone(),
        });
        (guard.store.clone(), order)
      };
      let Some(order) = order else {
        return Ok::<_, GiftlistError>(PipelineControl::Continue);
      };

      match store.insert_order(&order).await {
        Ok(order_id) => {
          info!(order_id, "Order recorded.");
          if let Some(report) = ctx_data.write().report.as_mut() {
            report.order_id = Some(order_id);
          }
        }
        Err(e) => error!("Failed to record order: {}", e),
      }
      Ok(PipelineControl::Continue)
    })
  });

  p.on_root("acknowledge", |ctx_data: ContextData<IngestionCtxData>| {
    Box::pin(async move {
      if let Some(report) = ctx_data.read().report.as_ref() {
        info!(
          transaction_id = %report.transaction_id,
          rows_decremented = report.rows_decremented,
          unmatched = report.unmatched_items,
          failed = report.failed_items,
          order_recorded = report.order_recorded(),
          "Payment event applied."
        );
      }
      Ok::<_, GiftlistError>(PipelineControl::Continue)
    })
  });

  p
}

/// Classifies `payload` and, for actionable events, applies it to the store.
///
/// Only a missing transaction id is an error. Store failures during ingestion are
/// reflected in the report, never returned.
///
/// The returned future is not `Send`: run it on the calling task or inside a `LocalSet`.
#[instrument(name = "orders::handle_notification", skip(store, payload))]
pub async fn handle_notification(store: Arc<dyn Store>, payload: &JsonValue) -> Result<WebhookOutcome> {
  let ctx_data = ContextData::new(IngestionCtxData::new(store, payload.clone()));
  let result = ingestion_pipeline().run(ctx_data.clone()).await.map_err(|e| {
    warn!("Rejecting webhook: {}", e);
    e
  })?;

  let mut guard = ctx_data.write();
  match (result, guard.report.take(), guard.ignored.take()) {
    (PipelineResult::Completed, Some(report), _) => Ok(WebhookOutcome::Processed(report)),
    (PipelineResult::Stopped, _, Some(kind)) => Ok(WebhookOutcome::Ignored(kind)),
    (result, _, _) => {
      error!(?result, "Ingestion pipeline finished without an outcome.");
      Err(GiftlistError::Workflow(orka::OrkaError::Internal(
        "ingestion pipeline produced no outcome".to_string(),
      )))
    }
  }
}
