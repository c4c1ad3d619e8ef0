// giftlist_core/src/store/sqlite.rs

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::models::{NewOrder, NewProduct, Order, Product};
use crate::store::Store;

const CREATE_PRODUCTS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  product_name TEXT NOT NULL UNIQUE,
  price REAL NOT NULL,
  stock INTEGER NOT NULL DEFAULT 1,
  sku TEXT,
  brand TEXT,
  description TEXT,
  image TEXT
)"#;

const CREATE_ORDERS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  paypal_order_id TEXT NOT NULL UNIQUE,
  total REAL NOT NULL,
  status TEXT NOT NULL DEFAULT 'completed',
  items TEXT,
  created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)"#;

const PRODUCT_COLUMNS: &str = "id, product_name, price, stock, sku, brand, description, image";
const ORDER_COLUMNS: &str = "id, paypal_order_id, total, status, items, created_at";

/// File-backed store. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  pool: SqlitePool,
}

impl SqliteStore {
  /// Builds a lazily connecting pool for `database_url`, creating the file on first use.
  ///
  /// Only a malformed URL fails here. I/O problems (unwritable directory, locked file)
  /// show up on the first statement instead, starting with `ensure_schema`.
  pub fn open(database_url: &str) -> Result<Self> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_lazy_with(options);
    info!("SQLite store configured for '{}'.", database_url);
    Ok(Self { pool })
  }

  /// A private in-memory database with the schema already applied.
  ///
  /// The pool is pinned to a single connection that never expires, since every
  /// SQLite memory connection is its own database.
  pub async fn in_memory() -> Result<Self> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
      .max_connections(1)
      .min_connections(1)
      .idle_timeout(None)
      .max_lifetime(None)
      .connect_with(options)
      .await?;
    let store = Self { pool };
    store.ensure_schema().await?;
    Ok(store)
  }

  /// Creates both tables if they are absent. Safe to run on every startup.
  #[instrument(name = "store::ensure_schema", skip(self))]
  pub async fn ensure_schema(&self) -> Result<()> {
    for statement in [CREATE_PRODUCTS_TABLE_SQL, CREATE_ORDERS_TABLE_SQL] {
      sqlx::query(statement).execute(&self.pool).await?;
    }
    info!("Database schema is in place.");
    Ok(())
  }

  pub async fn close(&self) {
    self.pool.close().await;
  }
}

#[async_trait]
impl Store for SqliteStore {
  async fn count_products(&self) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
      .fetch_one(&self.pool)
      .await?;
    Ok(count)
  }

  async fn insert_product(&self, product: &NewProduct) -> Result<i64> {
    let result = sqlx::query(
      "INSERT INTO products (product_name, price, stock, sku, brand, description, image) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&product.product_name)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.sku)
    .bind(&product.brand)
    .bind(&product.description)
    .bind(&product.image)
    .execute(&self.pool)
    .await?;
    Ok(result.last_insert_rowid())
  }

  async fn list_products(&self) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(products)
  }

  async fn get_product(&self, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(product)
  }

  async fn decrement_stock(&self, product_name: &str, quantity: i64) -> Result<u64> {
    // Single statement, so concurrent decrements of the same row never lose an update.
    // SQLite turns an overflowing subtraction into a REAL; the cast saturates it back to an INTEGER.
    let result = sqlx::query("UPDATE products SET stock = CAST(stock - ? AS INTEGER) WHERE product_name = ?")
      .bind(quantity)
      .bind(product_name)
      .execute(&self.pool)
      .await?;
    debug!(product_name, quantity, rows = result.rows_affected(), "stock decremented");
    Ok(result.rows_affected())
  }

  async fn set_stock(&self, product_name: &str, stock: i64) -> Result<u64> {
    let result = sqlx::query("UPDATE products SET stock = ? WHERE product_name = ?")
      .bind(stock)
      .bind(product_name)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }

  async fn insert_order(&self, order: &NewOrder) -> Result<i64> {
    let result = sqlx::query("INSERT INTO orders (paypal_order_id, total, items) VALUES (?, ?, ?)")
      .bind(&order.paypal_order_id)
      .bind(order.total)
      .bind(&order.items)
      .execute(&self.pool)
      .await?;
    Ok(result.last_insert_rowid())
  }

  async fn list_orders(&self) -> Result<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
      .fetch_all(&self.pool)
      .await?;
    Ok(orders)
  }

  async fn get_order_by_payment_id(&self, paypal_order_id: &str) -> Result<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE paypal_order_id = ?"))
      .bind(paypal_order_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(order)
  }
}
