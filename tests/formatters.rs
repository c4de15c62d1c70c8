#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taxilog::libs::formatter::{format_date, format_hours, format_hours_hhmm, format_money, format_ratio, format_ratio_cell, NOT_APPLICABLE};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "€"), "0.00 €");
        assert_eq!(format_money(1234.5, "€"), "1234.50 €");
        assert_eq!(format_money(-15.0, "$"), "-15.00 $");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(8.5), "8.5");
        assert_eq!(format_hours(0.0), "0.0");
        assert_eq!(format_hours(13.04), "13.0");
    }

    #[test]
    fn test_format_hours_hhmm() {
        assert_eq!(format_hours_hhmm(0.0), "00:00");
        assert_eq!(format_hours_hhmm(8.5), "08:30");
        assert_eq!(format_hours_hhmm(0.25), "00:15");
        assert_eq!(format_hours_hhmm(26.0), "26:00");
        assert_eq!(format_hours_hhmm(-1.0), "00:00");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(None), NOT_APPLICABLE);
        assert_eq!(format_ratio(Some(230.0 / 13.0)), "17.69");
        assert_eq!(format_ratio(Some(0.0)), "0.00");
    }

    #[test]
    fn test_format_ratio_cell() {
        assert_eq!(format_ratio_cell(None), "");
        assert_eq!(format_ratio_cell(Some(7.5)), "7.5000");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();

        assert_eq!(format_date(date, "%d.%m.%Y."), "07.03.2025.");
        assert_eq!(format_date(date, "%Y-%m-%d"), "2025-03-07");
    }

    #[test]
    fn test_format_date_falls_back_on_bad_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date, "%Q"), "2025-03-07");
    }
}
