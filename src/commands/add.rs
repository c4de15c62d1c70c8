//! Logs a new working day.
//!
//! Plays the role of the entry form: the flags are the form fields, a record
//! is built from them with the creation rules of [`DailyRecord::create`], and
//! the whole collection is saved back.

use super::parse_date;
use crate::{
    db::records::Records,
    libs::{
        formatter::format_hours_hhmm,
        ledger::{ensure_date_available, upsert},
        messages::Message,
        record::{DailyRecord, RecordError, RecordInput},
        shift::Shift,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// The form fields shared by `add` and `edit`.
///
/// An omitted flag leaves the field as it was: empty (0) for a new record,
/// the stored value when editing.
#[derive(Debug, Default, Args)]
pub struct RecordFields {
    /// Gross revenue of the day
    #[arg(long)]
    pub gross: Option<f64>,

    /// Kilometers driven
    #[arg(long)]
    pub km: Option<f64>,

    /// Fuel purchased, in liters
    #[arg(long)]
    pub fuel_liters: Option<f64>,

    /// Cost of the fuel purchased
    #[arg(long)]
    pub fuel_cost: Option<f64>,

    /// Other expenses (tolls, washing, parking)
    #[arg(long)]
    pub other: Option<f64>,

    /// Number of rides
    #[arg(long)]
    pub rides: Option<u32>,

    /// A work shift as START-END, e.g. `--shift 06:00-11:30`. Repeat for
    /// several shifts; when editing, the given shifts replace the stored ones.
    #[arg(long = "shift", value_name = "HH:MM-HH:MM")]
    pub shifts: Vec<Shift>,
}

impl RecordFields {
    /// Whether `--shift` was given.
    pub fn changes_shifts(&self) -> bool {
        !self.shifts.is_empty()
    }

    /// Overlays the given flags on `input`.
    pub fn apply(self, mut input: RecordInput) -> RecordInput {
        if self.gross.is_some() {
            input.gross_revenue = self.gross;
        }
        if self.km.is_some() {
            input.kilometers = self.km;
        }
        if self.fuel_liters.is_some() {
            input.fuel_liters = self.fuel_liters;
        }
        if self.fuel_cost.is_some() {
            input.fuel_cost = self.fuel_cost;
        }
        if self.other.is_some() {
            input.other_expenses = self.other;
        }
        if self.rides.is_some() {
            input.number_of_rides = self.rides;
        }
        if !self.shifts.is_empty() {
            input.shifts = self.shifts;
        }
        input
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Day of the record (YYYY-MM-DD or 'today')
    #[arg(short, long, default_value = "today")]
    date: String,

    #[command(flatten)]
    fields: RecordFields,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let input = args.fields.apply(RecordInput { date, ..Default::default() });
    let record = add_record(&mut Records::new()?, input)?;

    msg_success!(Message::RecordAdded(record.date.to_string()));
    msg_info!(Message::WorkHoursComputed(format_hours_hhmm(record.work_hours)));
    Ok(())
}

/// Creates a record for a day that has none yet and persists the collection.
///
/// Nothing is written when the input is rejected.
pub fn add_record(store: &mut Records, input: RecordInput) -> Result<DailyRecord> {
    let mut records = store.load()?;
    ensure_date_available(&records, input.date, None).map_err(rejected)?;
    let record = DailyRecord::create(input, None).map_err(rejected)?;

    persist(store, &mut records, record)
}

/// Puts `record` into the collection and saves the whole collection.
pub(crate) fn persist(store: &mut Records, records: &mut Vec<DailyRecord>, record: DailyRecord) -> Result<DailyRecord> {
    upsert(records, record.clone());
    store
        .save(records)
        .map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::RecordSaveFailed, e)))?;
    Ok(record)
}

pub(crate) fn rejected(error: RecordError) -> anyhow::Error {
    msg_error_anyhow!(Message::RecordRejected(error.to_string()))
}
