// giftlist/server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use giftlist::services::products;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = products::list_products(app_state.store.as_ref()).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let product = products::get_product(app_state.store.as_ref(), product_id).await?;
  Ok(HttpResponse::Ok().json(product))
}
