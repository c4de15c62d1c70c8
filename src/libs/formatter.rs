//! Display formatting for amounts, hours and optional ratios.
//!
//! Used by the terminal tables and by CSV export. Every function is pure.
//!
//! ## Format Specifications
//!
//! - **Money**: two decimals followed by the currency symbol, `"123.40 €"`
//! - **Hours**: one decimal, `"8.5"`
//! - **Clock hours**: `"HH:MM"`, rounded to the nearest minute
//! - **Ratios**: two decimals, or `"N/A"` when the ratio is not applicable
//!
//! ```rust
//! use taxilog::libs::formatter::{format_hours_hhmm, format_ratio};
//!
//! assert_eq!(format_hours_hhmm(8.5), "08:30");
//! assert_eq!(format_ratio(None), "N/A");
//! assert_eq!(format_ratio(Some(17.6923)), "17.69");
//! ```

use chrono::NaiveDate;

/// Shown in place of a ratio whose denominator was zero.
pub const NOT_APPLICABLE: &str = "N/A";

pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Formats fractional hours as `HH:MM`. Negative values display as `00:00`.
pub fn format_hours_hhmm(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round().max(0.0) as i64;
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{:.2}", value),
        None => NOT_APPLICABLE.to_string(),
    }
}

/// Ratio cell for machine-readable output: empty when not applicable.
pub fn format_ratio_cell(ratio: Option<f64>) -> String {
    ratio.map(|value| format!("{:.4}", value)).unwrap_or_default()
}

/// Formats a date with a chrono format string, falling back to ISO
/// `YYYY-MM-DD` when the format string is malformed.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}
