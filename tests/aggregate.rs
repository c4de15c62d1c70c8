#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taxilog::libs::aggregate::{aggregate, safe_ratio, PeriodType};
    use taxilog::libs::record::DailyRecord;

    struct Day {
        date: &'static str,
        gross: f64,
        fuel_cost: f64,
        other: f64,
        km: f64,
        liters: f64,
        hours: f64,
        rides: u32,
    }

    impl Default for Day {
        fn default() -> Self {
            Day {
                date: "2024-01-01",
                gross: 0.0,
                fuel_cost: 0.0,
                other: 0.0,
                km: 0.0,
                liters: 0.0,
                hours: 0.0,
                rides: 0,
            }
        }
    }

    fn record(day: Day) -> DailyRecord {
        DailyRecord {
            id: format!("id-{}", day.date),
            date: NaiveDate::parse_from_str(day.date, "%Y-%m-%d").unwrap(),
            gross_revenue: day.gross,
            kilometers: day.km,
            fuel_liters: day.liters,
            fuel_cost: day.fuel_cost,
            other_expenses: day.other,
            shifts: Vec::new(),
            work_hours: day.hours,
            number_of_rides: day.rides,
            net_earnings: day.gross - day.fuel_cost - day.other,
        }
    }

    fn sample() -> Vec<DailyRecord> {
        vec![
            record(Day { date: "2024-01-01", gross: 100.0, fuel_cost: 20.0, other: 10.0, km: 50.0, hours: 5.0, rides: 4, ..Default::default() }),
            record(Day { date: "2024-01-08", gross: 200.0, fuel_cost: 30.0, other: 10.0, km: 100.0, hours: 8.0, rides: 6, ..Default::default() }),
            record(Day { date: "2023-12-31", gross: 80.0, km: 40.0, liters: 3.0, hours: 4.0, rides: 2, ..Default::default() }),
            record(Day { date: "2024-02-15", gross: 50.0, ..Default::default() }),
        ]
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        for period in PeriodType::ALL {
            assert!(aggregate(&[], period).is_empty());
        }
    }

    #[test]
    fn test_monthly_example() {
        let records = vec![sample().remove(0), sample().remove(1)];
        let series = aggregate(&records, PeriodType::Monthly);

        assert_eq!(series.len(), 1);
        let january = &series[0];
        assert_eq!(january.period, "2024-01");
        assert_eq!(january.record_count, 2);
        assert_eq!(january.gross_revenue, 300.0);
        assert_eq!(january.net_earnings, 230.0);
        assert_eq!(january.work_hours, 13.0);
        assert_eq!(january.number_of_rides, 10);
        assert_eq!(january.total_costs(), 70.0);

        let per_hour = january.avg_net_earnings_per_hour.unwrap();
        assert!((per_hour - 230.0 / 13.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", per_hour), "17.69");
        assert_eq!(january.avg_gross_revenue_per_ride, Some(30.0));
    }

    #[test]
    fn test_record_counts_add_up() {
        let records = sample();
        for period in PeriodType::ALL {
            let total: usize = aggregate(&records, period).iter().map(|group| group.record_count).sum();
            assert_eq!(total, records.len(), "{} grouping lost records", period);
        }
    }

    #[test]
    fn test_series_sorted_strictly_descending() {
        let records = sample();
        for period in PeriodType::ALL {
            let series = aggregate(&records, period);
            for pair in series.windows(2) {
                assert!(pair[0].period > pair[1].period, "{} >= {}", pair[1].period, pair[0].period);
            }
        }
    }

    #[test]
    fn test_weekly_groups_follow_iso_weeks() {
        let series = aggregate(&sample(), PeriodType::Weekly);
        let keys: Vec<&str> = series.iter().map(|group| group.period.as_str()).collect();

        assert_eq!(keys, vec!["2024-W07", "2024-W02", "2024-W01", "2023-W52"]);
    }

    #[test]
    fn test_daily_groups_use_dates() {
        let series = aggregate(&sample(), PeriodType::Daily);
        let keys: Vec<&str> = series.iter().map(|group| group.period.as_str()).collect();

        assert_eq!(keys, vec!["2024-02-15", "2024-01-08", "2024-01-01", "2023-12-31"]);
        assert!(series.iter().all(|group| group.record_count == 1));
    }

    #[test]
    fn test_ratios_omitted_when_denominator_is_zero() {
        let series = aggregate(&sample(), PeriodType::Monthly);
        let february = series.iter().find(|group| group.period == "2024-02").unwrap();

        assert_eq!(february.avg_net_earnings_per_km, None);
        assert_eq!(february.avg_fuel_consumption_liters_per_100km, None);
        assert_eq!(february.avg_net_earnings_per_hour, None);
        assert_eq!(february.avg_gross_revenue_per_ride, None);
    }

    #[test]
    fn test_fuel_consumption_per_100km() {
        let series = aggregate(&sample(), PeriodType::Monthly);
        let december = series.iter().find(|group| group.period == "2023-12").unwrap();

        let consumption = december.avg_fuel_consumption_liters_per_100km.unwrap();
        assert!((consumption - 7.5).abs() < 1e-9);
        assert_eq!(december.avg_net_earnings_per_km, Some(2.0));
    }

    #[test]
    fn test_input_is_not_modified() {
        let records = sample();
        let before = records.clone();
        let _ = aggregate(&records, PeriodType::Weekly);
        assert_eq!(records, before);
    }

    #[test]
    fn test_absent_ratios_are_left_out_of_json() {
        let series = aggregate(&sample(), PeriodType::Monthly);
        let json = serde_json::to_value(&series).unwrap();

        let february = json.as_array().unwrap().iter().find(|group| group["period"] == "2024-02").unwrap();
        assert!(february.get("avgNetEarningsPerKm").is_none());
        assert!(february.get("avgFuelConsumptionLitersPer100Km").is_none());
        assert_eq!(february["recordCount"], 1);

        let january = json.as_array().unwrap().iter().find(|group| group["period"] == "2024-01").unwrap();
        assert!(january.get("avgFuelConsumptionLitersPer100Km").is_some());
    }

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(10.0, 4.0), Some(2.5));
        assert_eq!(safe_ratio(10.0, 0.0), None);
        assert_eq!(safe_ratio(10.0, -1.0), None);
        assert_eq!(safe_ratio(0.0, 5.0), Some(0.0));
        assert_eq!(safe_ratio(f64::MAX, f64::MIN_POSITIVE), None);
    }

    #[test]
    fn test_period_key_dispatch() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(PeriodType::Daily.key(date), "2024-12-30");
        assert_eq!(PeriodType::Weekly.key(date), "2025-W01");
        assert_eq!(PeriodType::Monthly.key(date), "2024-12");
        assert_eq!(PeriodType::default(), PeriodType::Weekly);
    }
}
