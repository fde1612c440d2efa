use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiResult;
use crate::models::movie::Movie;
use crate::models::seat::{SeatLayout, SeatStatus};
use crate::models::showtime::Showtime;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/{movie_id}/showtimes", get(list_showtimes_for_movie))
        .route("/showtimes/{showtime_id}/seats", get(get_seats))
        .route("/showtimes/{showtime_id}/layout", get(get_layout))
}

// GET /movies
async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(state.store.list_movies())
}

// GET /movies/{movie_id}/showtimes
async fn list_showtimes_for_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> Json<Vec<Showtime>> {
    Json(state.store.list_showtimes(Some(movie_id)))
}

// GET /showtimes/{showtime_id}/seats
async fn get_seats(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i64>,
) -> ApiResult<Json<BTreeMap<String, SeatStatus>>> {
    Ok(Json(state.store.seat_statuses(showtime_id)?))
}

// GET /showtimes/{showtime_id}/layout
async fn get_layout(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<i64>,
) -> ApiResult<Json<SeatLayout>> {
    Ok(Json(state.store.seat_layout(showtime_id)?))
}
