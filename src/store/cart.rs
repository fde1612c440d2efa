use tracing::debug;
use uuid::Uuid;

use super::{Inner, Store};
use crate::error::{ApiError, ApiResult};
use crate::models::cart::{Cart, CartItem, CartLine};
use crate::models::seat::SeatStatus;

fn line_item_id() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(8);
    token
}

impl Inner {
    /// Cart lines priced at the *current* showtime price. Fails NotFound
    /// when a line references a showtime that has since been deleted.
    pub(super) fn priced_items(&self, user_id: &str) -> ApiResult<(Vec<CartItem>, f64)> {
        let lines = self.carts.get(user_id).map(Vec::as_slice).unwrap_or_default();
        let mut items = Vec::with_capacity(lines.len());
        let mut total = 0.0;
        for line in lines {
            let price = self.showtime(line.showtime_id)?.price;
            let subtotal = price * line.seats.len() as f64;
            total += subtotal;
            items.push(CartItem {
                id: line.id.clone(),
                showtime_id: line.showtime_id,
                seats: line.seats.clone(),
                subtotal,
            });
        }
        Ok((items, total))
    }

    pub(super) fn release_seats(&mut self, showtime_id: i64, codes: &[String]) {
        if let Some(seat_map) = self.seats.get_mut(&showtime_id) {
            for code in codes {
                if let Some(status) = seat_map.get_mut(code) {
                    *status = SeatStatus::Available;
                }
            }
        }
    }
}

impl Store {
    /// Reserves a batch of seats and appends a new line item to the user's
    /// cart. The whole batch is validated before any seat is touched, so a
    /// rejected request reserves nothing.
    pub fn add_to_cart(
        &self,
        user_id: &str,
        showtime_id: i64,
        seats: Vec<String>,
    ) -> ApiResult<CartItem> {
        if seats.is_empty() {
            return Err(ApiError::bad_request("seats must not be empty"));
        }

        let mut inner = self.write();
        let price = inner.showtime(showtime_id)?.price;

        let seat_map = inner
            .seats
            .get_mut(&showtime_id)
            .ok_or_else(|| ApiError::not_found("Showtime not found"))?;
        for code in &seats {
            match seat_map.get(code) {
                None => {
                    return Err(ApiError::bad_request(format!("Seat {code} does not exist")));
                }
                Some(SeatStatus::Available) => {}
                Some(_) => {
                    return Err(ApiError::bad_request(format!("Seat {code} is not available")));
                }
            }
        }
        for code in &seats {
            if let Some(status) = seat_map.get_mut(code) {
                *status = SeatStatus::Reserved;
            }
        }

        let line = CartLine {
            id: line_item_id(),
            showtime_id,
            seats,
        };
        let subtotal = price * line.seats.len() as f64;
        let item = CartItem {
            id: line.id.clone(),
            showtime_id,
            seats: line.seats.clone(),
            subtotal,
        };

        inner
            .carts
            .entry(user_id.to_string())
            .or_default()
            .push(line);

        debug!(user_id, showtime_id, item_id = %item.id, "seats reserved");
        Ok(item)
    }

    /// Two removal modes, triable independently in one call:
    /// (a) drop a whole line item by id, (b) shrink any line whose seat
    /// list intersects `seats`, dropping it when it empties. Every released
    /// seat goes back to available. Fails when neither mode changed
    /// anything.
    pub fn remove_from_cart(
        &self,
        user_id: &str,
        cart_item_id: Option<&str>,
        seats: Option<&[String]>,
    ) -> ApiResult<()> {
        let mut inner = self.write();
        let lines = inner.carts.get(user_id).cloned().unwrap_or_default();
        let mut kept = Vec::with_capacity(lines.len());
        let mut changed = false;

        for line in lines {
            if cart_item_id == Some(line.id.as_str()) {
                inner.release_seats(line.showtime_id, &line.seats);
                changed = true;
                continue;
            }

            if let Some(remove) = seats {
                let (released, keep): (Vec<String>, Vec<String>) = line
                    .seats
                    .iter()
                    .cloned()
                    .partition(|code| remove.contains(code));
                if !released.is_empty() {
                    inner.release_seats(line.showtime_id, &released);
                    changed = true;
                    if !keep.is_empty() {
                        kept.push(CartLine { seats: keep, ..line });
                    }
                    continue;
                }
            }

            kept.push(line);
        }

        if !changed {
            return Err(ApiError::bad_request(
                "No matching cart item or seats to remove",
            ));
        }

        inner.carts.insert(user_id.to_string(), kept);
        Ok(())
    }

    /// Current cart contents with subtotals recomputed from live prices.
    /// An unknown user simply has an empty cart.
    pub fn cart_summary(&self, user_id: &str) -> ApiResult<Cart> {
        let inner = self.read();
        let (items, total) = inner.priced_items(user_id)?;
        Ok(Cart {
            user_id: user_id.to_string(),
            items,
            total,
        })
    }
}
