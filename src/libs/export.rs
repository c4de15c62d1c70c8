//! Export of aggregated periods for external analysis.
//!
//! ## Formats
//!
//! - **CSV**: one row per period with a fixed column set; ratios that are
//!   not applicable are written as empty cells
//! - **JSON**: pretty-printed array of periods; ratios that are not
//!   applicable are omitted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taxilog::libs::aggregate::PeriodType;
//! use taxilog::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(&[], PeriodType::Monthly)?;
//! println!("written to {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::aggregate::{aggregate, AggregatedData, PeriodType};
use super::formatter::format_ratio_cell;
use super::record::DailyRecord;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat CSV row. Every column is always present so rows line up.
#[derive(Debug, Serialize)]
pub struct ExportRow {
    pub period: String,
    pub record_count: usize,
    pub gross_revenue: String,
    pub kilometers: String,
    pub fuel_liters: String,
    pub fuel_cost: String,
    pub other_expenses: String,
    pub net_earnings: String,
    pub work_hours: String,
    pub number_of_rides: u64,
    pub avg_net_earnings_per_km: String,
    pub avg_fuel_consumption_liters_per_100km: String,
    pub avg_net_earnings_per_hour: String,
    pub avg_gross_revenue_per_ride: String,
}

impl From<&AggregatedData> for ExportRow {
    fn from(item: &AggregatedData) -> Self {
        ExportRow {
            period: item.period.clone(),
            record_count: item.record_count,
            gross_revenue: format!("{:.2}", item.gross_revenue),
            kilometers: format!("{:.2}", item.kilometers),
            fuel_liters: format!("{:.2}", item.fuel_liters),
            fuel_cost: format!("{:.2}", item.fuel_cost),
            other_expenses: format!("{:.2}", item.other_expenses),
            net_earnings: format!("{:.2}", item.net_earnings),
            work_hours: format!("{:.2}", item.work_hours),
            number_of_rides: item.number_of_rides,
            avg_net_earnings_per_km: format_ratio_cell(item.avg_net_earnings_per_km),
            avg_fuel_consumption_liters_per_100km: format_ratio_cell(item.avg_fuel_consumption_liters_per_100km),
            avg_net_earnings_per_hour: format_ratio_cell(item.avg_net_earnings_per_hour),
            avg_gross_revenue_per_ride: format_ratio_cell(item.avg_gross_revenue_per_ride),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        Exporter { format, output_path }
    }

    /// Aggregates `records` by `period_type`, writes the series and returns
    /// the path written to.
    pub fn export(&self, records: &[DailyRecord], period_type: PeriodType) -> Result<PathBuf> {
        let aggregates = aggregate(records, period_type);
        let path = self.output_path(period_type);

        match self.format {
            ExportFormat::Csv => write_csv(&aggregates, &path)?,
            ExportFormat::Json => write_json(&aggregates, &path)?,
        }
        Ok(path)
    }

    /// Explicit path, or `taxilog_{period}_{timestamp}.{ext}` in the working directory.
    fn output_path(&self, period_type: PeriodType) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let timestamp = Local::now().format("%Y%m%d_%H%M%S");
                let period = period_type.to_string().to_lowercase();
                PathBuf::from(format!("taxilog_{}_{}.{}", period, timestamp, self.format.extension()))
            }
        }
    }
}

pub fn write_csv(aggregates: &[AggregatedData], path: &PathBuf) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in aggregates {
        writer.serialize(ExportRow::from(item))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json(aggregates: &[AggregatedData], path: &PathBuf) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, aggregates)?;
    Ok(())
}
