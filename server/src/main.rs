// giftlist/server/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use giftlist::{seed_catalog, seed_products, SqliteStore, Store};
use giftlist_server::{telemetry, web, AppConfig, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Loaded before tracing so RUST_LOG and LOG_FORMAT from .env take effect.
  dotenvy::dotenv().ok();
  telemetry::init_tracing();
  tracing::info!("Starting gift-registry backend...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  // Opening never touches the disk; a failure here means the URL itself is unusable.
  let store = SqliteStore::open(&app_config.database_url)?;
  if let Err(e) = store.ensure_schema().await {
    // Keep serving: requests will surface the store fault as 500s.
    tracing::error!(error = %e, "Failed to prepare the database; continuing without it.");
  }
  let store: Arc<dyn Store> = Arc::new(store);

  let app_state = AppState::new(store.clone());

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let cors_config = app_config.clone();
  let server = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(web::cors_middleware(&cors_config))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run();

  tracing::info!("Backend listening on http://{}", server_address);

  // Seeding starts only once the listener is bound, so a slow seed never delays availability.
  if app_config.seed_db {
    actix_rt::spawn(async move {
      if let Err(e) = seed_catalog(store.as_ref(), &seed_products()).await {
        tracing::error!(error = %e, "Catalog seeding failed.");
      }
    });
  }

  server.await?;
  Ok(())
}
