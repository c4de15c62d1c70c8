//! Time-of-day parsing, shift durations and calendar period keys.
//!
//! Everything here is a pure function of its input. Malformed times never
//! produce an error: they parse to `None` and count as zero worked time.
//!
//! ## Period Keys
//!
//! - **Daily**: `YYYY-MM-DD`, the date itself
//! - **Weekly**: `YYYY-Www`, ISO-8601 week numbering (the week's Thursday decides the year)
//! - **Monthly**: `YYYY-MM`, calendar year and month
//!
//! All keys are zero-padded, so comparing them as strings orders them
//! chronologically.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taxilog::libs::time::{iso_week_key, shift_duration_hours};
//!
//! assert_eq!(shift_duration_hours("08:00", "16:30"), 8.5);
//! let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
//! assert_eq!(iso_week_key(date), "2025-W01");
//! ```

use super::shift::Shift;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Parses a strict `HH:MM` time of day.
///
/// Exactly two digits, a colon and two more digits are accepted, with hours
/// in `0..=23` and minutes in `0..=59`. Anything else (`"8:00"`,
/// `"08:00:00"`, `"24:00"`, an empty string) yields `None`.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let hours = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
    let minutes = u32::from(digits[2] - b'0') * 10 + u32::from(digits[3] - b'0');

    // from_hms_opt rejects hours > 23 and minutes > 59
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Duration of a same-day shift in fractional hours.
///
/// Returns 0 when either time is invalid, and 0 when the end lies before
/// the start: shifts crossing midnight are not supported.
pub fn shift_duration_hours(start: &str, end: &str) -> f64 {
    let (Some(start), Some(end)) = (parse_time(start), parse_time(end)) else {
        return 0.0;
    };

    let start_minutes = minutes_of_day(start);
    let end_minutes = minutes_of_day(end);
    if end_minutes < start_minutes {
        return 0.0;
    }

    f64::from(end_minutes - start_minutes) / 60.0
}

/// Sum of all shift durations in hours; 0 for no shifts.
pub fn total_work_hours(shifts: &[Shift]) -> f64 {
    shifts
        .iter()
        .map(|shift| shift_duration_hours(&shift.start_time, &shift.end_time))
        .sum()
}

/// ISO-8601 week key, e.g. `2025-W01`.
///
/// The year is the ISO week-numbering year, which differs from the calendar
/// year for some dates around New Year.
pub fn iso_week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month key, e.g. `2024-01`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Daily key: the date itself as `YYYY-MM-DD`.
pub fn daily_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
