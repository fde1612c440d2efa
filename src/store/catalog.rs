use std::collections::{BTreeMap, HashSet};

use tracing::{info, warn};

use super::{ShowtimeMeta, Store};
use crate::error::{ApiError, ApiResult};
use crate::models::movie::{Movie, MovieUpdate, NewMovie};
use crate::models::seat::{seat_codes, SeatStatus};
use crate::models::showtime::{NewShowtime, Showtime};

impl Store {
    pub fn create_movie(&self, new: NewMovie) -> Movie {
        let mut inner = self.write();
        let id = inner.next_movie_id();
        let movie = Movie {
            id,
            title: new.title,
            synopsis: new.synopsis,
            duration_min: new.duration_min,
            rating: new.rating,
            genre: new.genre,
        };
        inner.movies.insert(id, movie.clone());
        info!(movie_id = id, title = %movie.title, "movie created");
        movie
    }

    pub fn list_movies(&self) -> Vec<Movie> {
        self.read().movies.values().cloned().collect()
    }

    pub fn get_movie(&self, movie_id: i64) -> ApiResult<Movie> {
        self.read()
            .movies
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Movie not found"))
    }

    pub fn update_movie(&self, movie_id: i64, update: MovieUpdate) -> ApiResult<Movie> {
        let mut inner = self.write();
        let movie = inner
            .movies
            .get_mut(&movie_id)
            .ok_or_else(|| ApiError::not_found("Movie not found"))?;
        update.apply(movie);
        Ok(movie.clone())
    }

    /// Removes the movie together with every showtime, seat inventory, and
    /// layout metadata entry that references it, all inside one write-lock
    /// critical section. Outstanding bookings stay untouched.
    pub fn delete_movie(&self, movie_id: i64) -> ApiResult<()> {
        let mut inner = self.write();
        if !inner.movies.contains_key(&movie_id) {
            return Err(ApiError::not_found("Movie not found"));
        }

        let showtime_ids: Vec<i64> = inner
            .showtimes
            .values()
            .filter(|st| st.movie_id == movie_id)
            .map(|st| st.id)
            .collect();
        for sid in &showtime_ids {
            inner.showtimes.remove(sid);
            inner.seats.remove(sid);
            inner.meta.remove(sid);
        }
        inner.movies.remove(&movie_id);

        warn!(
            movie_id,
            showtimes = showtime_ids.len(),
            "movie deleted with cascade"
        );
        Ok(())
    }

    /// Creates the showtime and initializes its seat inventory and layout
    /// metadata in the same critical section.
    pub fn create_showtime(&self, movie_id: i64, new: NewShowtime) -> ApiResult<Showtime> {
        let mut inner = self.write();
        if !inner.movies.contains_key(&movie_id) {
            return Err(ApiError::not_found("Movie not found"));
        }

        let id = inner.next_showtime_id();
        let showtime = new.into_showtime(id, movie_id);

        let mut seat_map: BTreeMap<String, SeatStatus> = seat_codes(showtime.rows, showtime.cols)
            .into_iter()
            .map(|code| (code, SeatStatus::Available))
            .collect();

        let disabled: HashSet<String> = showtime
            .disabled_seats
            .clone()
            .unwrap_or_default()
            .into_iter()
            .collect();
        // unknown disabled codes are ignored
        for code in &disabled {
            if let Some(status) = seat_map.get_mut(code) {
                *status = SeatStatus::Blocked;
            }
        }

        let meta = ShowtimeMeta {
            aisles: showtime.aisles_cols.clone().unwrap_or_default(),
            vip: showtime
                .vip_seats
                .clone()
                .unwrap_or_default()
                .into_iter()
                .collect(),
            disabled,
        };

        inner.showtimes.insert(id, showtime.clone());
        inner.seats.insert(id, seat_map);
        inner.meta.insert(id, meta);

        info!(showtime_id = id, movie_id, "showtime created");
        Ok(showtime)
    }

    /// All showtimes, or only those owned by `movie_id` when given. An
    /// unknown movie just yields an empty list.
    pub fn list_showtimes(&self, movie_id: Option<i64>) -> Vec<Showtime> {
        self.read()
            .showtimes
            .values()
            .filter(|st| movie_id.is_none_or(|m| st.movie_id == m))
            .cloned()
            .collect()
    }
}
