#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use taxilog::libs::shift::Shift;
    use taxilog::libs::time::{daily_key, iso_week_key, month_key, parse_time, shift_duration_hours, total_work_hours};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_time_valid() {
        assert_eq!(parse_time("00:00"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time("08:05"), NaiveTime::from_hms_opt(8, 5, 0));
        assert_eq!(parse_time("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
    }

    #[test]
    fn test_parse_time_rejects_loose_shapes() {
        for value in ["", "8:00", "08:0", "08:00:00", "0800", "08-00", " 08:00", "08:00 ", "ab:cd", "+8:00"] {
            assert_eq!(parse_time(value), None, "'{}' should be invalid", value);
        }
    }

    #[test]
    fn test_parse_time_rejects_out_of_range() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("08:60"), None);
        assert_eq!(parse_time("99:99"), None);
    }

    #[test]
    fn test_shift_duration_fractional_hours() {
        assert_eq!(shift_duration_hours("08:00", "16:30"), 8.5);
        assert_eq!(shift_duration_hours("06:15", "06:30"), 0.25);
        assert_eq!(shift_duration_hours("00:00", "23:59"), 1439.0 / 60.0);
    }

    #[test]
    fn test_shift_duration_same_time_is_zero() {
        assert_eq!(shift_duration_hours("12:00", "12:00"), 0.0);
    }

    #[test]
    fn test_shift_duration_overnight_is_zero() {
        assert_eq!(shift_duration_hours("22:00", "02:00"), 0.0);
        assert_eq!(shift_duration_hours("16:30", "08:00"), 0.0);
    }

    #[test]
    fn test_shift_duration_invalid_time_is_zero() {
        assert_eq!(shift_duration_hours("8:00", "16:00"), 0.0);
        assert_eq!(shift_duration_hours("08:00", ""), 0.0);
        assert_eq!(shift_duration_hours("08:00", "24:00"), 0.0);
    }

    #[test]
    fn test_total_work_hours() {
        assert_eq!(total_work_hours(&[]), 0.0);

        let shifts = vec![
            Shift::new("06:00", "10:30"),
            Shift::new("12:00", "15:00"),
            Shift::new("23:00", "01:00"),
        ];
        assert_eq!(total_work_hours(&shifts), 7.5);
    }

    #[test]
    fn test_iso_week_key_year_boundaries() {
        assert_eq!(iso_week_key(date(2024, 12, 30)), "2025-W01");
        assert_eq!(iso_week_key(date(2023, 1, 1)), "2022-W52");
        assert_eq!(iso_week_key(date(2021, 1, 3)), "2020-W53");
        assert_eq!(iso_week_key(date(2026, 1, 1)), "2026-W01");
    }

    #[test]
    fn test_iso_week_key_zero_padded() {
        assert_eq!(iso_week_key(date(2024, 1, 1)), "2024-W01");
        assert_eq!(iso_week_key(date(2024, 3, 4)), "2024-W10");
        assert_eq!(iso_week_key(date(2024, 1, 8)), "2024-W02");
    }

    #[test]
    fn test_month_key_uses_calendar_year() {
        assert_eq!(month_key(date(2024, 12, 30)), "2024-12");
        assert_eq!(month_key(date(2023, 1, 1)), "2023-01");
    }

    #[test]
    fn test_daily_key() {
        assert_eq!(daily_key(date(2024, 2, 29)), "2024-02-29");
        assert_eq!(daily_key(date(2025, 1, 5)), "2025-01-05");
    }
}
