//! Release date helpers.
//!
//! TMDB release dates are `YYYY-MM-DD` strings, but partial values such as
//! a bare `"1994"` do show up. Year extraction and full date parsing are
//! kept separate so a year-only value still counts for year filtering.

use chrono::{Datelike, Local, NaiveDate};

/// Lower bound of the default year window.
pub const EARLIEST_RELEASE_YEAR: i32 = 1900;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extract the leading four-digit year from a release date string.
///
/// Returns `None` unless the string starts with exactly four ASCII digits
/// followed by either the end of the string or a `-`.
pub fn release_year(date: &str) -> Option<i32> {
    let date = date.trim();
    let digits = date.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match date.as_bytes().get(4) {
        None | Some(b'-') => digits.parse().ok(),
        Some(_) => None,
    }
}

/// Parse a full `YYYY-MM-DD` release date.
pub fn parse_release_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Date used for ordering: the full date when it parses, otherwise
/// January 1 of the leading year.
pub fn release_sort_date(date: &str) -> Option<NaiveDate> {
    parse_release_date(date)
        .or_else(|| release_year(date).and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)))
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}
