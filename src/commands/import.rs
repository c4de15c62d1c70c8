//! Imports records from a JSON backup of the browser ledger.
//!
//! The file holds the same camelCase record array that is stored under the
//! `taxiLogData` key. Derived fields are recomputed on the way in.

use crate::{
    db::records::Records,
    libs::{ledger::merge, messages::Message, record::DailyRecord},
    msg_error_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file with an array of daily records
    file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    msg_info!(Message::ImportReading(args.file.display().to_string()));
    let content = fs::read_to_string(&args.file)?;
    let incoming: Vec<DailyRecord> = serde_json::from_str(&content).map_err(|e| msg_error_anyhow!(Message::ImportParseFailed(e.to_string())))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImport(incoming.len()).to_string())
            .default(true)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut store = Records::new()?;
    let mut records = store.load()?;
    let outcome = merge(&mut records, incoming);

    for date in &outcome.skipped {
        msg_warning!(Message::ImportSkippedDuplicateDate(date.to_string()));
    }
    for (date, error) in &outcome.invalid {
        msg_warning!(Message::ImportSkippedInvalid(date.to_string(), error.to_string()));
    }
    if outcome.imported > 0 {
        store.save(&records)?;
    }

    msg_success!(Message::ImportCompleted {
        imported: outcome.imported,
        skipped: outcome.skipped.len() + outcome.invalid.len(),
    });
    Ok(())
}
