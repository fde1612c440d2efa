mod cart;
mod catalog;
mod checkout;
mod seats;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ApiError, ApiResult};
use crate::models::booking::Booking;
use crate::models::cart::CartLine;
use crate::models::movie::Movie;
use crate::models::seat::SeatStatus;
use crate::models::showtime::Showtime;

/// Per-showtime layout metadata, kept as sets for classification lookups.
#[derive(Debug, Default)]
struct ShowtimeMeta {
    aisles: Vec<u32>,
    vip: HashSet<String>,
    disabled: HashSet<String>,
}

#[derive(Debug, Default)]
struct Inner {
    movies: BTreeMap<i64, Movie>,
    showtimes: BTreeMap<i64, Showtime>,
    // showtime_id -> seat code -> status
    seats: HashMap<i64, BTreeMap<String, SeatStatus>>,
    meta: HashMap<i64, ShowtimeMeta>,
    // user_id -> ordered cart lines
    carts: HashMap<String, Vec<CartLine>>,
    bookings: HashMap<String, Booking>,
    // user_id -> booking codes in creation order
    user_bookings: HashMap<String, Vec<String>>,
    next_movie_id: i64,
    next_showtime_id: i64,
}

impl Inner {
    fn showtime(&self, showtime_id: i64) -> ApiResult<&Showtime> {
        self.showtimes
            .get(&showtime_id)
            .ok_or_else(|| ApiError::not_found("Showtime not found"))
    }

    fn next_movie_id(&mut self) -> i64 {
        self.next_movie_id += 1;
        self.next_movie_id
    }

    fn next_showtime_id(&mut self) -> i64 {
        self.next_showtime_id += 1;
        self.next_showtime_id
    }
}

/// Owner of all application state. Constructed once in `main` and shared
/// through `AppState`; every mutating operation runs its whole
/// validate-then-mutate sequence under the write lock, so no caller ever
/// observes a partial state.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Inner>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap()
    }
}
