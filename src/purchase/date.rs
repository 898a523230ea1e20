//! Purchase date helpers.

use chrono::{Days, Local, NaiveDate};

/// Format used for the purchase date everywhere in the app.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum length of an ISO calendar date string.
pub const DATE_LEN: usize = 10;

/// Returns the current local date as an ISO calendar date string.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Whether `date` is a complete calendar date written exactly as
/// `YYYY-MM-DD`.
pub fn is_iso_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .is_ok_and(|parsed| parsed.format(DATE_FORMAT).to_string() == date)
}

/// Moves an ISO date forward (positive) or backward (negative) by whole days.
/// Returns None if the input does not parse or the result is out of range.
pub fn shift(date: &str, days: i64) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;

    let shifted = if days >= 0 {
        parsed.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        parsed.checked_sub_days(Days::new(days.unsigned_abs()))
    }?;

    Some(shifted.format(DATE_FORMAT).to_string())
}

/// Whether a character may be typed into the date input.
pub fn is_date_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
#[path = "./date_tests.rs"]
mod tests;
