use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// Immutable record produced by a successful checkout. Stored in the
/// ledger under `booking_code` and never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_code: String,
    pub user_id: String,
    pub total_before_discount: f64,
    pub discount_amount: f64,
    pub total_paid: f64,
    pub items: Vec<CartItem>,
    pub timestamp: DateTime<Utc>,
}
