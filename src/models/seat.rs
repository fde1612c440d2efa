use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::showtime::ScreenSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Reserved,
    Booked,
    /// Taken out of service at showtime creation; never transitions away.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Standard,
    Vip,
    Blocked,
}

/// Seat code for a 1-based (row, col) position: row 1 -> 'A', so (2, 4) -> "B4".
pub fn code_from_row_col(row: u32, col: u32) -> String {
    let letter = (b'A' + (row - 1) as u8) as char;
    format!("{letter}{col}")
}

/// The full seat-code set for a rows x cols grid, row-major.
pub fn seat_codes(rows: u32, cols: u32) -> Vec<String> {
    let mut codes = Vec::with_capacity((rows * cols) as usize);
    for r in 1..=rows {
        for c in 1..=cols {
            codes.push(code_from_row_col(r, c));
        }
    }
    codes
}

/// Classification priority: blocked beats vip beats standard.
pub fn seat_type_for(code: &str, vip: &HashSet<String>, disabled: &HashSet<String>) -> SeatType {
    if disabled.contains(code) {
        SeatType::Blocked
    } else if vip.contains(code) {
        SeatType::Vip
    } else {
        SeatType::Standard
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatCell {
    pub row: u32,
    pub col: u32,
    pub code: String,
    pub status: SeatStatus,
    pub seat_type: SeatType,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatLayout {
    pub showtime_id: i64,
    pub rows: u32,
    pub cols: u32,
    pub screen_side: ScreenSide,
    pub aisles_cols: Vec<u32>,
    pub legend: BTreeMap<&'static str, &'static str>,
    pub grid: Vec<Vec<SeatCell>>,
}

/// Static display legend shipped with every layout response.
pub fn legend() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("available", "Seat can be booked"),
        ("reserved", "Held in another user's cart"),
        ("booked", "Already paid for"),
        ("blocked", "Out of service"),
        ("vip", "VIP seat"),
        ("standard", "Standard seat"),
        ("screen_side", "Screen position relative to the grid"),
        ("aisles_cols", "1-based column numbers that are aisles"),
    ])
}
