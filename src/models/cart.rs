use serde::{Deserialize, Serialize};

/// One cart entry as stored: a batch of seats reserved together for one
/// showtime. Subtotals are never cached here; summaries recompute them
/// from the current showtime price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub showtime_id: i64,
    pub seats: Vec<String>,
}

/// A cart line enriched with its subtotal, as returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub showtime_id: i64,
    pub seats: Vec<String>,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: f64,
}
