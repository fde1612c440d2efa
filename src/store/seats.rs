use std::collections::BTreeMap;

use super::Store;
use crate::error::{ApiError, ApiResult};
use crate::models::seat::{code_from_row_col, legend, seat_type_for, SeatCell, SeatLayout, SeatStatus};

impl Store {
    /// Seat code -> status for one showtime.
    pub fn seat_statuses(&self, showtime_id: i64) -> ApiResult<BTreeMap<String, SeatStatus>> {
        self.read()
            .seats
            .get(&showtime_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Showtime not found"))
    }

    /// Row-major 2D grid for display, with per-cell classification and the
    /// static legend. Screen side and aisle columns are passed through
    /// verbatim from the showtime.
    pub fn seat_layout(&self, showtime_id: i64) -> ApiResult<SeatLayout> {
        let inner = self.read();
        let showtime = inner.showtime(showtime_id)?;
        let seat_map = inner
            .seats
            .get(&showtime_id)
            .ok_or_else(|| ApiError::not_found("Showtime not found"))?;
        let meta = inner
            .meta
            .get(&showtime_id)
            .ok_or_else(|| ApiError::not_found("Showtime not found"))?;

        let mut grid = Vec::with_capacity(showtime.rows as usize);
        for row in 1..=showtime.rows {
            let mut cells = Vec::with_capacity(showtime.cols as usize);
            for col in 1..=showtime.cols {
                let code = code_from_row_col(row, col);
                let Some(status) = seat_map.get(&code) else {
                    continue;
                };
                let seat_type = seat_type_for(&code, &meta.vip, &meta.disabled);
                cells.push(SeatCell {
                    row,
                    col,
                    code,
                    status: *status,
                    seat_type,
                });
            }
            grid.push(cells);
        }

        Ok(SeatLayout {
            showtime_id: showtime.id,
            rows: showtime.rows,
            cols: showtime.cols,
            screen_side: showtime.screen_side,
            aisles_cols: meta.aisles.clone(),
            legend: legend(),
            grid,
        })
    }
}
