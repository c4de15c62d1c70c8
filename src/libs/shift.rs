//! Worked shifts and the rules an entered shift list must satisfy.

use super::time::parse_time;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A worked interval within one calendar day, times as `HH:MM`.
///
/// Both times are kept as entered. An empty string means the field was left
/// blank on the entry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
}

impl Shift {
    pub fn new(start_time: &str, end_time: &str) -> Self {
        Shift {
            id: None,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    pub fn has_start(&self) -> bool {
        !self.start_time.trim().is_empty()
    }

    pub fn has_end(&self) -> bool {
        !self.end_time.trim().is_empty()
    }

    /// Both times are filled in.
    pub fn is_complete(&self) -> bool {
        self.has_start() && self.has_end()
    }

    /// Neither time is filled in.
    pub fn is_blank(&self) -> bool {
        !self.has_start() && !self.has_end()
    }

    /// The same shift with surrounding whitespace removed from both times.
    pub fn trimmed(self) -> Self {
        Shift {
            id: self.id,
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
        }
    }
}

/// Parses the command-line form `HH:MM-HH:MM`.
///
/// Either side may be empty (`"08:00-"`), which leaves that time blank so
/// validation can report it. Time values themselves are not checked here.
impl FromStr for Shift {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = value
            .split_once('-')
            .ok_or_else(|| format!("expected START-END (e.g. 08:00-16:30), got '{}'", value))?;
        Ok(Shift::new(start.trim(), end.trim()))
    }
}

/// Why a shift list was rejected. Indices are 0-based positions in the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("Shift {}: both the start and the end time are required", .index + 1)]
    MissingTime { index: usize },
    #[error("Shift {}: '{}' is not a valid HH:MM time", .index + 1, .value)]
    InvalidTime { index: usize, value: String },
    #[error("Shift {}: end time ({}) cannot be before the start time ({})", .index + 1, .end, .start)]
    EndBeforeStart { index: usize, start: String, end: String },
}

/// Checks an entered shift list.
///
/// A single blank shift means "no shift entered" and is accepted. Otherwise
/// every shift must be either fully blank or fully set, and a fully set shift
/// must hold valid times with the end not before the start.
pub fn validate_shifts(shifts: &[Shift]) -> Result<(), ShiftError> {
    if let [only] = shifts {
        if only.is_blank() {
            return Ok(());
        }
    }

    for (index, shift) in shifts.iter().enumerate() {
        if shift.is_blank() {
            continue;
        }
        if !shift.is_complete() {
            return Err(ShiftError::MissingTime { index });
        }

        let start = parse_time(shift.start_time.trim()).ok_or_else(|| ShiftError::InvalidTime {
            index,
            value: shift.start_time.clone(),
        })?;
        let end = parse_time(shift.end_time.trim()).ok_or_else(|| ShiftError::InvalidTime {
            index,
            value: shift.end_time.clone(),
        })?;

        if end < start {
            return Err(ShiftError::EndBeforeStart {
                index,
                start: shift.start_time.clone(),
                end: shift.end_time.clone(),
            });
        }
    }

    Ok(())
}
