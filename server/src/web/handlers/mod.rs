// giftlist/server/src/web/handlers/mod.rs

pub mod product_handlers;
pub mod stock_handlers;
pub mod webhook_handlers;
