use super::add::{persist, rejected, RecordFields};
use super::parse_date;
use crate::{
    db::records::Records,
    libs::{
        formatter::format_hours_hhmm,
        ledger::{ensure_date_available, find_by_date},
        messages::Message,
        record::{DailyRecord, RecordInput},
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Day of the record to change (YYYY-MM-DD or 'today')
    date: String,

    /// Move the record to another day
    #[arg(long)]
    new_date: Option<String>,

    /// Remove all shifts from the record
    #[arg(long, conflicts_with = "shifts")]
    clear_shifts: bool,

    #[command(flatten)]
    fields: RecordFields,
}

/// Changes requested for one stored record.
#[derive(Debug, Default)]
pub struct RecordEdit {
    pub new_date: Option<NaiveDate>,
    pub clear_shifts: bool,
    pub fields: RecordFields,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let new_date = args.new_date.as_deref().map(parse_date).transpose()?;
    let edit = RecordEdit {
        new_date,
        clear_shifts: args.clear_shifts,
        fields: args.fields,
    };

    let (previous, record) = edit_record(&mut Records::new()?, date, edit)?;

    if record.date != previous.date {
        msg_success!(Message::RecordMoved(previous.date.to_string(), record.date.to_string()));
    } else {
        msg_success!(Message::RecordUpdated(record.date.to_string()));
    }
    msg_info!(Message::WorkHoursComputed(format_hours_hhmm(record.work_hours)));
    Ok(())
}

/// Replaces the record of `date` wholesale and returns the previous and the
/// new version.
///
/// The form starts from the stored values; the id is kept, so the entry is
/// replaced in place even when its date changes. Nothing is written when the
/// edit is rejected.
pub fn edit_record(store: &mut Records, date: NaiveDate, edit: RecordEdit) -> Result<(DailyRecord, DailyRecord)> {
    let mut records = store.load()?;
    let Some(existing) = find_by_date(&records, date).cloned() else {
        msg_bail_anyhow!(Message::RecordNotFound(date.to_string()));
    };

    let shifts_changed = edit.clear_shifts || edit.fields.changes_shifts();
    let mut input = RecordInput::from(&existing);
    if let Some(new_date) = edit.new_date {
        input.date = new_date;
    }
    if edit.clear_shifts {
        input.shifts.clear();
    }
    let input = edit.fields.apply(input);

    ensure_date_available(&records, input.date, Some(&existing.id)).map_err(rejected)?;
    let record = DailyRecord::revise(&existing, input, shifts_changed).map_err(rejected)?;

    let record = persist(store, &mut records, record)?;
    Ok((existing, record))
}
