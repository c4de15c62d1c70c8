//! Export of the aggregated series for external analysis.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing

use crate::{
    db::records::Records,
    libs::{
        aggregate::PeriodType,
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Period to group by; defaults to the configured period
    #[arg(short, long, value_enum)]
    period: Option<PeriodType>,

    /// Output format for the exported data
    ///
    /// - **csv**: one row per period, empty cells for ratios that do not apply
    /// - **json**: array of periods, ratios that do not apply are left out
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Example default: `taxilog_weekly_20250115_143022.csv`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let records = Records::new()?.load()?;

    if records.is_empty() {
        msg_warning!(Message::ExportEmpty);
        return Ok(());
    }

    let period = args.period.unwrap_or(config.default_period);
    let path = Exporter::new(args.format, args.output).export(&records, period)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
