use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::movie::{Movie, MovieUpdate, NewMovie};
use crate::models::showtime::{NewShowtime, Showtime};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/movies", post(create_movie).get(list_movies))
        .route(
            "/admin/movies/{movie_id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route("/admin/movies/{movie_id}/showtimes", post(create_showtime))
        .route("/admin/showtimes", get(list_showtimes))
}

// POST /admin/movies
async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewMovie>,
) -> ApiResult<Json<Movie>> {
    req.validate()?;
    Ok(Json(state.store.create_movie(req)))
}

// GET /admin/movies
async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(state.store.list_movies())
}

// GET /admin/movies/{movie_id}
async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<Movie>> {
    Ok(Json(state.store.get_movie(movie_id)?))
}

// PUT /admin/movies/{movie_id}
async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
    Json(req): Json<MovieUpdate>,
) -> ApiResult<Json<Movie>> {
    req.validate()?;
    Ok(Json(state.store.update_movie(movie_id, req)?))
}

// DELETE /admin/movies/{movie_id}
async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    state.store.delete_movie(movie_id)?;
    Ok(Json(json!({ "message": "Movie deleted" })))
}

// POST /admin/movies/{movie_id}/showtimes
async fn create_showtime(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
    Json(req): Json<NewShowtime>,
) -> ApiResult<Json<Showtime>> {
    req.validate()?;
    Ok(Json(state.store.create_showtime(movie_id, req)?))
}

// GET /admin/showtimes
async fn list_showtimes(State(state): State<Arc<AppState>>) -> Json<Vec<Showtime>> {
    Json(state.store.list_showtimes(None))
}
