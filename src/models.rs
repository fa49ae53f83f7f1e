//! Item types shared between the storage layer and the HTTP surface.

use serde::{Deserialize, Serialize};

/// A single row of the `items` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

/// Request body for creating an item. Both fields are required;
/// the id is assigned by the database on insert.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub price: f64,
}
