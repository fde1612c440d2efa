use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::models::booking::Booking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tickets/{booking_code}", get(get_ticket))
        .route("/users/{user_id}/tickets", get(list_tickets))
}

// GET /tickets/{booking_code}
async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(booking_code): Path<String>,
) -> ApiResult<Json<Booking>> {
    Ok(Json(state.store.booking(&booking_code)?))
}

// GET /users/{user_id}/tickets
async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<Vec<Booking>> {
    Json(state.store.bookings_for_user(&user_id))
}
