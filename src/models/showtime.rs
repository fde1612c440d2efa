use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

pub const MAX_ROWS: u32 = 26;
pub const MAX_COLS: u32 = 20;

/// Position of the screen relative to the seat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl Default for ScreenSide {
    fn default() -> Self {
        ScreenSide::Top
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    pub id: i64,
    pub movie_id: i64,
    pub day: String,
    pub time: String,
    pub studio: String,
    pub price: f64,
    pub rows: u32,
    pub cols: u32,
    pub screen_side: ScreenSide,
    pub aisles_cols: Option<Vec<u32>>,
    pub vip_seats: Option<Vec<String>>,
    pub disabled_seats: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct NewShowtime {
    pub day: String,
    pub time: String,
    pub studio: String,
    pub price: f64,
    pub rows: u32,
    pub cols: u32,
    #[serde(default)]
    pub screen_side: ScreenSide,
    pub aisles_cols: Option<Vec<u32>>,
    pub vip_seats: Option<Vec<String>>,
    pub disabled_seats: Option<Vec<String>>,
}

impl NewShowtime {
    pub fn validate(&self) -> ApiResult<()> {
        if !(self.price >= 0.0) {
            return Err(ApiError::bad_request("price must be >= 0"));
        }
        if !(1..=MAX_ROWS).contains(&self.rows) {
            return Err(ApiError::bad_request(format!(
                "rows must be between 1 and {MAX_ROWS}"
            )));
        }
        if !(1..=MAX_COLS).contains(&self.cols) {
            return Err(ApiError::bad_request(format!(
                "cols must be between 1 and {MAX_COLS}"
            )));
        }
        if self.day.split('-').count() != 3 {
            return Err(ApiError::bad_request("day must be YYYY-MM-DD"));
        }
        if self.time.split(':').count() != 2 {
            return Err(ApiError::bad_request("time must be HH:MM 24h"));
        }
        Ok(())
    }

    pub fn into_showtime(self, id: i64, movie_id: i64) -> Showtime {
        Showtime {
            id,
            movie_id,
            day: self.day,
            time: self.time,
            studio: self.studio,
            price: self.price,
            rows: self.rows,
            cols: self.cols,
            screen_side: self.screen_side,
            aisles_cols: self.aisles_cols,
            vip_seats: self.vip_seats,
            disabled_seats: self.disabled_seats,
        }
    }
}
