// giftlist/server/src/web/handlers/stock_handlers.rs

use actix_web::{web, HttpResponse};
use giftlist::services::stock::{self, StockUpdateRequest};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::update_stock", skip(app_state, body))]
pub async fn update_stock_handler(
  app_state: web::Data<AppState>,
  body: web::Json<StockUpdateRequest>,
) -> Result<HttpResponse, AppError> {
  let report = stock::set_stock(app_state.store.as_ref(), &body).await?;
  Ok(HttpResponse::Ok().json(json!({ "success": true, "message": report.message() })))
}
