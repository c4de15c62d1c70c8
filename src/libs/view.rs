use super::aggregate::AggregatedData;
use super::formatter::{format_date, format_hours, format_hours_hhmm, format_money, format_ratio};
use super::record::DailyRecord;
use super::summary::OverallSummary;
use prettytable::{row, Table};

/// Terminal tables for records, aggregates and the overall summary.
pub struct View {}

impl View {
    /// Daily records, one row per day.
    pub fn records(records: &[DailyRecord], currency: &str, date_format: &str) {
        let mut table = Table::new();

        table.add_row(row![
            "DATE",
            "GROSS",
            "NET",
            "NET / H",
            "KM",
            "FUEL L",
            "FUEL COST",
            "OTHER",
            "HOURS",
            "RIDES",
            "SHIFTS"
        ]);
        for record in records {
            let shifts = record
                .shifts
                .iter()
                .map(|shift| format!("{}-{}", shift.start_time, shift.end_time))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(row![
                format_date(record.date, date_format),
                r->format_money(record.gross_revenue, currency),
                r->format_money(record.net_earnings, currency),
                r->format_ratio(record.net_earnings_per_hour()),
                r->format!("{:.1}", record.kilometers),
                r->format!("{:.2}", record.fuel_liters),
                r->format_money(record.fuel_cost, currency),
                r->format_money(record.other_expenses, currency),
                r->format_hours_hhmm(record.work_hours),
                r->record.number_of_rides,
                shifts
            ]);
        }
        table.printstd();
    }

    /// Aggregated periods, newest first.
    pub fn aggregates(aggregates: &[AggregatedData], currency: &str) {
        let mut table = Table::new();

        table.add_row(row![
            "PERIOD",
            "DAYS",
            "GROSS",
            "NET",
            "HOURS",
            "NET / H",
            "KM",
            "NET / KM",
            "L / 100KM",
            "RIDES",
            "GROSS / RIDE"
        ]);
        for item in aggregates {
            table.add_row(row![
                item.period,
                r->item.record_count,
                r->format_money(item.gross_revenue, currency),
                r->format_money(item.net_earnings, currency),
                r->format_hours(item.work_hours),
                r->format_ratio(item.avg_net_earnings_per_hour),
                r->format!("{:.1}", item.kilometers),
                r->format_ratio(item.avg_net_earnings_per_km),
                r->format_ratio(item.avg_fuel_consumption_liters_per_100km),
                r->item.number_of_rides,
                r->format_ratio(item.avg_gross_revenue_per_ride)
            ]);
        }
        table.printstd();
    }

    /// Income versus costs per period.
    pub fn income_costs(aggregates: &[AggregatedData], currency: &str) {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "REVENUE", "COSTS", "NET PROFIT", "HOURS", "NET / H"]);
        for item in aggregates {
            table.add_row(row![
                item.period,
                r->format_money(item.gross_revenue, currency),
                r->format_money(item.total_costs(), currency),
                r->format_money(item.net_earnings, currency),
                r->format!("{} h", format_hours(item.work_hours)),
                r->format_ratio(item.avg_net_earnings_per_hour)
            ]);
        }
        table.printstd();
    }

    pub fn summary(summary: &OverallSummary, currency: &str) {
        let mut table = Table::new();

        table.add_row(row!["Total gross revenue", r->format_money(summary.total_gross_revenue, currency)]);
        table.add_row(row!["Total net earnings", r->format_money(summary.total_net_earnings, currency)]);
        table.add_row(row!["Total work hours", r->format!("{} h", format_hours(summary.total_work_hours))]);
        table.add_row(row!["Avg. net per hour", r->format_ratio(summary.avg_net_earnings_per_hour)]);
        table.add_row(row!["Avg. net per km", r->format_ratio(summary.avg_net_earnings_per_km)]);
        table.add_row(row!["Avg. consumption (L/100km)", r->format_ratio(summary.avg_fuel_consumption_liters_per_100km)]);
        table.add_row(row!["Total rides", r->summary.total_rides]);
        table.add_row(row!["Days logged", r->summary.record_count]);
        table.printstd();
    }
}
