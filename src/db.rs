//! PostgreSQL storage layer.
//!
//! All database access goes through [`Database`], a thin wrapper around an
//! sqlx connection pool. The pool is the only shared mutable state in the
//! process; concurrent use is synchronized by sqlx itself.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::models::Item;

/// Maximum connections for the pool.
const MAX_CONNECTIONS: u32 = 5;

/// Idempotent schema definition, applied at startup.
const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price NUMERIC(10,2) NOT NULL
)
"#;

/// Cloneable handle to the PostgreSQL connection pool.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and return a pooled handle.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(config.connect_options())
            .await?;

        Ok(Self { pool })
    }

    /// Build a pool without an initial connection attempt.
    ///
    /// Connections are established on first use, so a handle can exist
    /// without a reachable server. Used by router tests exercising paths
    /// that never run a query.
    #[cfg(test)]
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(config.connect_options());

        Self { pool }
    }

    /// Create the `items` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_ITEMS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Verify the connection is live. Used only by the health check.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch the item with the given primary key, or `None` if no row matches.
    ///
    /// The stored NUMERIC(10,2) price is read back as float8 so the Rust
    /// side stays `f64`, matching the JSON surface.
    pub async fn item(&self, id: i32) -> Result<Option<Item>, sqlx::Error> {
        sqlx::query_as("SELECT id, name, price::float8 AS price FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Insert a new item and return its generated id.
    pub async fn insert_item(&self, name: &str, price: f64) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO items (name, price) VALUES ($1, $2::numeric(10,2)) RETURNING id",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await
    }
}
