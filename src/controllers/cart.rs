use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiResult;
use crate::models::booking::Booking;
use crate::models::cart::{Cart, CartItem};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cart/add", post(add_to_cart))
        .route("/cart/{user_id}", get(get_cart))
        .route("/cart/remove", delete(remove_from_cart))
        .route("/checkout", post(checkout))
}

#[derive(Debug, Deserialize)]
struct AddToCartRequest {
    user_id: String,
    showtime_id: i64,
    seats: Vec<String>,
}

// POST /cart/add
async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddToCartRequest>,
) -> ApiResult<Json<CartItem>> {
    let item = state
        .store
        .add_to_cart(&req.user_id, req.showtime_id, req.seats)?;
    Ok(Json(item))
}

// GET /cart/{user_id}
async fn get_cart(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Cart>> {
    Ok(Json(state.store.cart_summary(&user_id)?))
}

#[derive(Debug, Deserialize)]
struct RemoveFromCartRequest {
    user_id: String,
    cart_item_id: Option<String>,
    seats: Option<Vec<String>>,
}

// DELETE /cart/remove
async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RemoveFromCartRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    state.store.remove_from_cart(
        &req.user_id,
        req.cart_item_id.as_deref(),
        req.seats.as_deref(),
    )?;
    Ok(Json(json!({ "message": "Updated cart" })))
}

#[derive(Debug, Deserialize)]
struct CheckoutRequest {
    user_id: String,
    promo_code: Option<String>,
}

// POST /checkout
async fn checkout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckoutRequest>,
) -> ApiResult<Json<Booking>> {
    let booking = state
        .store
        .checkout(&req.user_id, req.promo_code.as_deref())?;
    Ok(Json(booking))
}
