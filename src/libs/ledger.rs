//! In-memory operations on the record collection.
//!
//! The store hands out the whole collection as a `Vec`; these helpers apply
//! one save to it. Date uniqueness is enforced here, before a record reaches
//! storage, never by the aggregation code.

use super::record::{DailyRecord, RecordError};
use chrono::NaiveDate;

/// Fails when a record other than `editing_id` already holds `date`.
pub fn ensure_date_available(records: &[DailyRecord], date: NaiveDate, editing_id: Option<&str>) -> Result<(), RecordError> {
    let taken = records
        .iter()
        .any(|record| record.date == date && Some(record.id.as_str()) != editing_id);
    if taken {
        return Err(RecordError::DuplicateDate(date));
    }
    Ok(())
}

/// Replaces the record with the same id in place, or appends it, then
/// re-sorts the collection newest first.
pub fn upsert(records: &mut Vec<DailyRecord>, record: DailyRecord) {
    match records.iter().position(|existing| existing.id == record.id) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
    sort_newest_first(records);
}

pub fn sort_newest_first(records: &mut [DailyRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn find_by_date(records: &[DailyRecord], date: NaiveDate) -> Option<&DailyRecord> {
    records.iter().find(|record| record.date == date)
}

pub fn find_by_id<'a>(records: &'a [DailyRecord], id: &str) -> Option<&'a DailyRecord> {
    records.iter().find(|record| record.id == id)
}

/// Result of merging an external record list into the ledger.
#[derive(Debug, Default, PartialEq)]
pub struct MergeOutcome {
    pub imported: usize,
    /// Dates already held by a different record.
    pub skipped: Vec<NaiveDate>,
    /// Records whose amounts break the creation rules, with the reason.
    pub invalid: Vec<(NaiveDate, RecordError)>,
}

/// Merges `incoming` into `records` one record at a time.
///
/// Derived fields of every incoming record are recomputed. A record with a
/// negative or non-finite amount is rejected, and one whose date is already
/// held by a different id is skipped; a record with a known id replaces the
/// stored entry.
pub fn merge(records: &mut Vec<DailyRecord>, incoming: Vec<DailyRecord>) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for record in incoming {
        if let Err(error) = record.check_amounts() {
            outcome.invalid.push((record.date, error));
            continue;
        }
        let record = record.recompute();
        if ensure_date_available(records, record.date, Some(&record.id)).is_err() {
            outcome.skipped.push(record.date);
            continue;
        }
        upsert(records, record);
        outcome.imported += 1;
    }
    outcome
}
