//! Period aggregation of daily records.
//!
//! Groups records into daily, ISO-weekly or calendar-monthly buckets, sums the
//! base measures of each bucket and derives the average ratios. The input is
//! never modified; every call builds a fresh series.
//!
//! ## Safe Division
//!
//! A ratio is only present when its denominator sum is strictly positive.
//! Otherwise the field is `None` ("not applicable"), never zero, NaN or
//! infinity:
//!
//! | Ratio | Formula | Present when |
//! |-------|---------|--------------|
//! | `avg_net_earnings_per_km` | net / km | km > 0 |
//! | `avg_fuel_consumption_liters_per_100km` | liters / km × 100 | km > 0 |
//! | `avg_net_earnings_per_hour` | net / hours | hours > 0 |
//! | `avg_gross_revenue_per_ride` | gross / rides | rides > 0 |
//!
//! ## Ordering
//!
//! The series is sorted by period key, newest first. Keys are zero-padded so
//! string order is chronological order for all three period types.

use super::record::DailyRecord;
use super::time::{daily_key, iso_week_key, month_key};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Size of the buckets records are grouped into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl PeriodType {
    pub const ALL: [PeriodType; 3] = [PeriodType::Daily, PeriodType::Weekly, PeriodType::Monthly];

    /// Period key of `date` for this period type.
    pub fn key(self, date: NaiveDate) -> String {
        match self {
            PeriodType::Daily => daily_key(date),
            PeriodType::Weekly => iso_week_key(date),
            PeriodType::Monthly => month_key(date),
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodType::Daily => "Daily",
            PeriodType::Weekly => "Weekly",
            PeriodType::Monthly => "Monthly",
        };
        write!(f, "{}", label)
    }
}

/// Totals and averages for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedData {
    pub period: String,
    pub record_count: usize,
    pub gross_revenue: f64,
    pub kilometers: f64,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub other_expenses: f64,
    pub net_earnings: f64,
    pub work_hours: f64,
    pub number_of_rides: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_net_earnings_per_km: Option<f64>,
    #[serde(
        default,
        rename = "avgFuelConsumptionLitersPer100Km",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_fuel_consumption_liters_per_100km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_net_earnings_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_gross_revenue_per_ride: Option<f64>,
}

impl AggregatedData {
    /// Fuel plus other expenses.
    pub fn total_costs(&self) -> f64 {
        self.fuel_cost + self.other_expenses
    }
}

/// Running sums of the base measures over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub gross_revenue: f64,
    pub kilometers: f64,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub other_expenses: f64,
    pub net_earnings: f64,
    pub work_hours: f64,
    pub number_of_rides: u64,
}

impl Totals {
    pub fn add(&mut self, record: &DailyRecord) {
        self.count += 1;
        self.gross_revenue += record.gross_revenue;
        self.kilometers += record.kilometers;
        self.fuel_liters += record.fuel_liters;
        self.fuel_cost += record.fuel_cost;
        self.other_expenses += record.other_expenses;
        self.net_earnings += record.net_earnings;
        self.work_hours += record.work_hours;
        self.number_of_rides += u64::from(record.number_of_rides);
    }

    pub fn net_earnings_per_km(&self) -> Option<f64> {
        safe_ratio(self.net_earnings, self.kilometers)
    }

    pub fn fuel_consumption_per_100km(&self) -> Option<f64> {
        safe_ratio(self.fuel_liters, self.kilometers).map(|liters_per_km| liters_per_km * 100.0)
    }

    pub fn net_earnings_per_hour(&self) -> Option<f64> {
        safe_ratio(self.net_earnings, self.work_hours)
    }

    pub fn gross_revenue_per_ride(&self) -> Option<f64> {
        safe_ratio(self.gross_revenue, self.number_of_rides as f64)
    }
}

impl<'a> FromIterator<&'a DailyRecord> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a DailyRecord>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for record in iter {
            totals.add(record);
        }
        totals
    }
}

/// `numerator / denominator` when the denominator is strictly positive and
/// the result is finite, `None` otherwise.
pub fn safe_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator).filter(|ratio| ratio.is_finite())
    } else {
        None
    }
}

/// Groups `records` by `period_type` and returns one entry per period,
/// newest period first. Empty input gives an empty series.
pub fn aggregate(records: &[DailyRecord], period_type: PeriodType) -> Vec<AggregatedData> {
    let mut groups: BTreeMap<String, Totals> = BTreeMap::new();
    for record in records {
        groups.entry(period_type.key(record.date)).or_default().add(record);
    }

    groups
        .into_iter()
        .rev()
        .map(|(period, totals)| AggregatedData {
            period,
            record_count: totals.count,
            gross_revenue: totals.gross_revenue,
            kilometers: totals.kilometers,
            fuel_liters: totals.fuel_liters,
            fuel_cost: totals.fuel_cost,
            other_expenses: totals.other_expenses,
            net_earnings: totals.net_earnings,
            work_hours: totals.work_hours,
            number_of_rides: totals.number_of_rides,
            avg_net_earnings_per_km: totals.net_earnings_per_km(),
            avg_fuel_consumption_liters_per_100km: totals.fuel_consumption_per_100km(),
            avg_net_earnings_per_hour: totals.net_earnings_per_hour(),
            avg_gross_revenue_per_ride: totals.gross_revenue_per_ride(),
        })
        .collect()
}
