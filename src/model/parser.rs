// File: ./src/model/parser.rs
// Handles the fixed date formats: the machine one users type and the file stores,
// and the human one tasks are displayed with.
use crate::error::{DownyError, Result};
use chrono::NaiveDateTime;

/// `YYYY-MM-DD HHmm`, e.g. `2024-01-31 1800`
pub const MACHINE_FORMAT: &str = "%Y-%m-%d %H%M";

/// `MMM d yyyy, h:mm a`, e.g. `Jan 31 2024, 6:00 PM`
pub const DISPLAY_FORMAT: &str = "%b %-d %Y, %-I:%M %p";

pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, MACHINE_FORMAT)
        .map_err(|_| DownyError::InvalidDateFormat(trimmed.to_string()))
}

pub fn to_machine_string(dt: &NaiveDateTime) -> String {
    dt.format(MACHINE_FORMAT).to_string()
}

pub fn to_display_string(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
