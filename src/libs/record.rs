//! Daily records: the unit of persisted data, and how one is built from
//! entry-form input.
//!
//! A record is created or replaced wholesale on every save. Derived fields
//! (`work_hours`, `net_earnings`) are computed here and stored with the
//! record, so aggregation only ever sums stored values.
//!
//! ## Creation Rules
//!
//! 1. The shift list must pass [`validate_shifts`]
//! 2. Absent numeric fields default to 0; negative values are rejected
//! 3. Only shifts with both times set are kept
//! 4. `work_hours` is the total of the kept shifts, `net_earnings` is
//!    gross revenue minus fuel cost minus other expenses (may be negative)
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taxilog::libs::record::{DailyRecord, RecordInput};
//! use taxilog::libs::shift::Shift;
//!
//! let input = RecordInput {
//!     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     gross_revenue: Some(100.0),
//!     fuel_cost: Some(20.0),
//!     other_expenses: Some(10.0),
//!     shifts: vec![Shift::new("08:00", "13:00")],
//!     ..Default::default()
//! };
//! let record = DailyRecord::create(input, None).unwrap();
//! assert_eq!(record.net_earnings, 70.0);
//! assert_eq!(record.work_hours, 5.0);
//! ```

use super::shift::{validate_shifts, Shift, ShiftError};
use super::time::total_work_hours;
use chrono::{Local, NaiveDate, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the random part of a record id.
const ID_SUFFIX_LEN: usize = 7;

/// One day's business activity.
///
/// Field names serialize in camelCase so stored data stays compatible with
/// the browser version of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub gross_revenue: f64,
    #[serde(default)]
    pub kilometers: f64,
    #[serde(default)]
    pub fuel_liters: f64,
    #[serde(default)]
    pub fuel_cost: f64,
    #[serde(default)]
    pub other_expenses: f64,
    #[serde(default)]
    pub shifts: Vec<Shift>,
    #[serde(default)]
    pub work_hours: f64,
    #[serde(default)]
    pub number_of_rides: u32,
    #[serde(default)]
    pub net_earnings: f64,
}

/// Raw values from the entry form. `None` means the field was left empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInput {
    pub date: NaiveDate,
    pub gross_revenue: Option<f64>,
    pub kilometers: Option<f64>,
    pub fuel_liters: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub other_expenses: Option<f64>,
    pub number_of_rides: Option<u32>,
    pub shifts: Vec<Shift>,
}

impl Default for RecordInput {
    fn default() -> Self {
        RecordInput {
            date: Local::now().date_naive(),
            gross_revenue: None,
            kilometers: None,
            fuel_liters: None,
            fuel_cost: None,
            other_expenses: None,
            number_of_rides: None,
            shifts: Vec::new(),
        }
    }
}

impl From<&DailyRecord> for RecordInput {
    /// Pre-fills the form from a stored record, as the edit screen does.
    fn from(record: &DailyRecord) -> Self {
        RecordInput {
            date: record.date,
            gross_revenue: Some(record.gross_revenue),
            kilometers: Some(record.kilometers),
            fuel_liters: Some(record.fuel_liters),
            fuel_cost: Some(record.fuel_cost),
            other_expenses: Some(record.other_expenses),
            number_of_rides: Some(record.number_of_rides),
            shifts: record.shifts.clone(),
        }
    }
}

/// Reasons a record cannot be saved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error(transparent)]
    Shifts(#[from] ShiftError),
    #[error("{field} must be a non-negative number")]
    InvalidValue { field: &'static str },
    #[error("A record for {0} already exists, choose another date")]
    DuplicateDate(NaiveDate),
}

fn amount(field: &'static str, value: Option<f64>) -> Result<f64, RecordError> {
    match value {
        None => Ok(0.0),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(_) => Err(RecordError::InvalidValue { field }),
    }
}

/// Generates an opaque record id: `{unix-millis}-{random suffix}`.
///
/// The millisecond prefix keeps ids roughly in creation order.
pub fn generate_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix.to_lowercase())
}

impl DailyRecord {
    /// Builds a record from form input.
    ///
    /// `existing_id` is the id of the record being edited; a new id is
    /// generated when it is `None`.
    pub fn create(input: RecordInput, existing_id: Option<String>) -> Result<DailyRecord, RecordError> {
        validate_shifts(&input.shifts)?;

        let gross_revenue = amount("Gross revenue", input.gross_revenue)?;
        let kilometers = amount("Kilometers", input.kilometers)?;
        let fuel_liters = amount("Fuel liters", input.fuel_liters)?;
        let fuel_cost = amount("Fuel cost", input.fuel_cost)?;
        let other_expenses = amount("Other expenses", input.other_expenses)?;

        let shifts: Vec<Shift> = input.shifts.into_iter().filter(Shift::is_complete).map(Shift::trimmed).collect();
        let work_hours = total_work_hours(&shifts);

        Ok(DailyRecord {
            id: existing_id.unwrap_or_else(generate_id),
            date: input.date,
            gross_revenue,
            kilometers,
            fuel_liters,
            fuel_cost,
            other_expenses,
            shifts,
            work_hours,
            number_of_rides: input.number_of_rides.unwrap_or(0),
            net_earnings: gross_revenue - fuel_cost - other_expenses,
        })
    }

    /// Builds the replacement of `existing` from edited form input, keeping its id.
    ///
    /// When the edit leaves the shifts alone, the stored shifts are carried
    /// over without validation. Imported records may hold shifts crossing
    /// midnight; those keep counting as zero hours.
    pub fn revise(existing: &DailyRecord, mut input: RecordInput, shifts_changed: bool) -> Result<DailyRecord, RecordError> {
        if shifts_changed {
            return Self::create(input, Some(existing.id.clone()));
        }

        input.shifts = Vec::new();
        let mut record = Self::create(input, Some(existing.id.clone()))?;
        record.shifts = existing.shifts.clone();
        Ok(record.recompute())
    }

    /// Recomputes the derived fields from the stored base fields.
    ///
    /// Used for data coming from outside, where `workHours` and
    /// `netEarnings` may be stale or missing.
    pub fn recompute(mut self) -> Self {
        self.shifts = self.shifts.into_iter().filter(Shift::is_complete).map(Shift::trimmed).collect();
        self.work_hours = total_work_hours(&self.shifts);
        self.net_earnings = self.gross_revenue - self.fuel_cost - self.other_expenses;
        self
    }

    /// Checks the stored measures against the creation rules: every amount
    /// must be finite and non-negative.
    pub fn check_amounts(&self) -> Result<(), RecordError> {
        amount("Gross revenue", Some(self.gross_revenue))?;
        amount("Kilometers", Some(self.kilometers))?;
        amount("Fuel liters", Some(self.fuel_liters))?;
        amount("Fuel cost", Some(self.fuel_cost))?;
        amount("Other expenses", Some(self.other_expenses))?;
        Ok(())
    }

    /// Net earnings per worked hour for this single day, if any hours were worked.
    pub fn net_earnings_per_hour(&self) -> Option<f64> {
        super::aggregate::safe_ratio(self.net_earnings, self.work_hours)
    }
}
