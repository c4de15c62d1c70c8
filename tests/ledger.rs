#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taxilog::libs::ledger::{ensure_date_available, find_by_date, find_by_id, merge, upsert};
    use taxilog::libs::record::{DailyRecord, RecordError, RecordInput};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn record(id: &str, day: &str, gross: f64) -> DailyRecord {
        DailyRecord::create(
            RecordInput {
                date: date(day),
                gross_revenue: Some(gross),
                ..Default::default()
            },
            Some(id.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_date_taken_by_other_record() {
        let records = vec![record("a", "2025-03-01", 10.0)];

        assert_eq!(
            ensure_date_available(&records, date("2025-03-01"), None),
            Err(RecordError::DuplicateDate(date("2025-03-01")))
        );
        assert_eq!(
            ensure_date_available(&records, date("2025-03-01"), Some("b")),
            Err(RecordError::DuplicateDate(date("2025-03-01")))
        );
    }

    #[test]
    fn test_date_available_for_same_record_or_new_day() {
        let records = vec![record("a", "2025-03-01", 10.0)];

        assert_eq!(ensure_date_available(&records, date("2025-03-01"), Some("a")), Ok(()));
        assert_eq!(ensure_date_available(&records, date("2025-03-02"), None), Ok(()));
        assert_eq!(ensure_date_available(&[], date("2025-03-02"), None), Ok(()));
    }

    #[test]
    fn test_upsert_appends_and_sorts_newest_first() {
        let mut records = vec![record("a", "2025-03-01", 10.0)];
        upsert(&mut records, record("b", "2025-03-05", 20.0));
        upsert(&mut records, record("c", "2025-02-20", 30.0));

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut records = vec![record("a", "2025-03-01", 10.0), record("b", "2025-02-01", 20.0)];
        upsert(&mut records, record("b", "2025-03-10", 99.0));

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "b");
        assert_eq!(records[0].gross_revenue, 99.0);
        assert_eq!(records[0].date, date("2025-03-10"));
    }

    #[test]
    fn test_find() {
        let records = vec![record("a", "2025-03-01", 10.0), record("b", "2025-03-02", 20.0)];

        assert_eq!(find_by_date(&records, date("2025-03-02")).map(|r| r.id.as_str()), Some("b"));
        assert!(find_by_date(&records, date("2025-03-03")).is_none());
        assert_eq!(find_by_id(&records, "a").map(|r| r.date), Some(date("2025-03-01")));
        assert!(find_by_id(&records, "z").is_none());
    }

    #[test]
    fn test_merge_skips_date_collisions() {
        let mut records = vec![record("a", "2025-03-01", 10.0)];
        let incoming = vec![
            record("x", "2025-03-01", 50.0),
            record("y", "2025-03-02", 60.0),
            record("a", "2025-03-01", 15.0),
        ];

        let outcome = merge(&mut records, incoming);

        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.skipped, vec![date("2025-03-01")]);
        assert_eq!(records.len(), 2);
        assert_eq!(find_by_id(&records, "a").unwrap().gross_revenue, 15.0);
        assert!(find_by_id(&records, "x").is_none());
    }

    #[test]
    fn test_merge_recomputes_derived_fields() {
        let mut stale = record("a", "2025-03-01", 100.0);
        stale.fuel_cost = 30.0;
        stale.net_earnings = 0.0;

        let mut records = Vec::new();
        merge(&mut records, vec![stale]);

        assert_eq!(records[0].net_earnings, 70.0);
    }

    #[test]
    fn test_merge_rejects_invalid_amounts() {
        let mut negative = record("b", "2025-03-02", 40.0);
        negative.fuel_cost = -5.0;

        let mut records = Vec::new();
        let outcome = merge(&mut records, vec![negative, record("c", "2025-03-03", 60.0)]);

        assert_eq!(outcome.imported, 1);
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.invalid, vec![(date("2025-03-02"), RecordError::InvalidValue { field: "Fuel cost" })]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "c");
    }
}
