//! All-time summary over the whole record set.
//!
//! Uses the same sums and the same safe-division policy as period
//! aggregation, without grouping. An empty record set has no summary at all,
//! so callers can tell "no data yet" apart from data that sums to zero.

use super::aggregate::Totals;
use super::record::DailyRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallSummary {
    pub record_count: usize,
    pub total_gross_revenue: f64,
    pub total_net_earnings: f64,
    pub total_kilometers: f64,
    pub total_fuel_liters: f64,
    pub total_work_hours: f64,
    pub total_rides: u64,
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
}

/// Collapses all records into one summary; `None` for an empty slice.
pub fn summarize(records: &[DailyRecord]) -> Option<OverallSummary> {
    if records.is_empty() {
        return None;
    }

    let totals: Totals = records.iter().collect();
    Some(OverallSummary {
        record_count: totals.count,
        total_gross_revenue: totals.gross_revenue,
        total_net_earnings: totals.net_earnings,
        total_kilometers: totals.kilometers,
        total_fuel_liters: totals.fuel_liters,
        total_work_hours: totals.work_hours,
        total_rides: totals.number_of_rides,
        avg_net_earnings_per_km: totals.net_earnings_per_km(),
        avg_fuel_consumption_liters_per_100km: totals.fuel_consumption_per_100km(),
        avg_net_earnings_per_hour: totals.net_earnings_per_hour(),
    })
}
