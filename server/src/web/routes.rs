// giftlist/server/src/web/routes.rs

use actix_cors::Cors;
use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::web::handlers::{product_handlers, stock_handlers, webhook_handlers};

// Liveness only: answers even when the store is unreachable.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({
    "status": "ok",
    "message": "Backend server is running"
  }))
}

/// Registers the storefront at the root and again under `/api`, where the
/// frontend also reaches the webhook and stock endpoints by their older names.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
      AppError::Validation(format!("Invalid JSON body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, _req| {
      // Non-numeric ids can never match a row.
      AppError::NotFound("Product not found".to_string()).into()
    }))
    .service(
      web::scope("/api")
        .configure(storefront_routes)
        .route("/paypal-webhook", web::post().to(webhook_handlers::paypal_webhook_handler))
        .route("/update-stock", web::post().to(stock_handlers::update_stock_handler)),
    )
    .configure(storefront_routes);
}

fn storefront_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
    )
    .route("/webhook", web::post().to(webhook_handlers::paypal_webhook_handler))
    .route("/stock", web::post().to(stock_handlers::update_stock_handler));
}

/// Browser frontends call the API cross-origin. Without a configured origin any origin is allowed.
pub fn cors_middleware(config: &AppConfig) -> Cors {
  match &config.cors_allowed_origin {
    Some(origin) => Cors::default()
      .allowed_origin(origin)
      .allow_any_method()
      .allow_any_header()
      .max_age(3600),
    None => Cors::permissive(),
  }
}
