use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::booking::Booking;
use crate::models::seat::SeatStatus;

/// Static promo lookup. Anything unknown is worth nothing.
fn promo_discount(total: f64, code: Option<&str>) -> f64 {
    match code.map(str::to_uppercase).as_deref() {
        Some("DISCOUNT10") => 0.10 * total,
        Some("STUDENT20") => 0.20 * total,
        _ => 0.0,
    }
}

fn booking_code() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("BKG-{}", hex[..10].to_uppercase())
}

impl Store {
    /// Finalizes the user's cart: every seat must still be reserved, all
    /// of them flip to booked, the cart is cleared, and the resulting
    /// booking is stored in the ledger and returned. Everything happens
    /// under one write lock, so a failed checkout mutates nothing.
    pub fn checkout(&self, user_id: &str, promo_code: Option<&str>) -> ApiResult<Booking> {
        let mut inner = self.write();
        let lines = inner.carts.get(user_id).cloned().unwrap_or_default();
        if lines.is_empty() {
            return Err(ApiError::bad_request("Cart is empty"));
        }

        // re-validate the entire cart before flipping any seat
        for line in &lines {
            let seat_map = inner
                .seats
                .get(&line.showtime_id)
                .ok_or_else(|| ApiError::not_found("Showtime not found"))?;
            for code in &line.seats {
                if seat_map.get(code) != Some(&SeatStatus::Reserved) {
                    return Err(ApiError::bad_request(format!(
                        "Seat {code} not reserved anymore"
                    )));
                }
            }
        }

        let (items, total) = inner.priced_items(user_id)?;
        let discount = promo_discount(total, promo_code);
        let total_paid = (total - discount).max(0.0);

        for line in &lines {
            if let Some(seat_map) = inner.seats.get_mut(&line.showtime_id) {
                for code in &line.seats {
                    if let Some(status) = seat_map.get_mut(code) {
                        *status = SeatStatus::Booked;
                    }
                }
            }
        }
        inner.carts.insert(user_id.to_string(), Vec::new());

        let mut code = booking_code();
        while inner.bookings.contains_key(&code) {
            code = booking_code();
        }

        let booking = Booking {
            booking_code: code.clone(),
            user_id: user_id.to_string(),
            total_before_discount: total,
            discount_amount: discount,
            total_paid,
            items,
            timestamp: Utc::now(),
        };
        inner.bookings.insert(code.clone(), booking.clone());
        inner
            .user_bookings
            .entry(user_id.to_string())
            .or_default()
            .push(code.clone());

        info!(user_id, booking_code = %code, total_paid, "checkout completed");
        Ok(booking)
    }

    pub fn booking(&self, booking_code: &str) -> ApiResult<Booking> {
        self.read()
            .bookings
            .get(booking_code)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Ticket not found"))
    }

    /// All bookings for a user, oldest first.
    pub fn bookings_for_user(&self, user_id: &str) -> Vec<Booking> {
        let inner = self.read();
        inner
            .user_bookings
            .get(user_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|code| inner.bookings.get(code))
            .cloned()
            .collect()
    }
}
