//! Command-line interface for the taxilog application.
//!
//! Every subcommand lives in its own module with a clap `Args` struct and a
//! `cmd` function. `Cli::menu` parses the command line and dispatches.

pub mod add;
pub mod dashboard;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;

use crate::{libs::messages::Message, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log a working day")]
    Add(add::AddArgs),
    #[command(about = "Change the record of a day", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "List daily records")]
    List(list::ListArgs),
    #[command(about = "Show the overall summary and period aggregates")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "Export aggregated periods to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Import records from a JSON backup", arg_required_else_help = true)]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}

/// Parses a date argument: `today` (any case) or `YYYY-MM-DD`.
///
/// ```rust
/// use taxilog::commands::parse_date;
///
/// assert!(parse_date("today").is_ok());
/// assert_eq!(parse_date("2025-03-01")?.to_string(), "2025-03-01");
/// assert!(parse_date("01.03.2025").is_err());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
}
