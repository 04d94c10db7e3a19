use chrono::NaiveDate;
use microstop_chart::core::{DateBucket, ErrorRecord, aggregate, date_key};

fn bucket_dates(buckets: &[DateBucket]) -> Vec<&str> {
    buckets.iter().map(|bucket| bucket.date.as_str()).collect()
}

#[test]
fn aggregate_groups_by_month_day_and_sums_per_type() {
    let records = vec![
        ErrorRecord::new("2024-12-01", "X", 5),
        ErrorRecord::new("2024-12-01", "Y", 3),
        ErrorRecord::new("2024-12-02", "X", 2),
    ];

    let series = aggregate(&records);

    assert_eq!(bucket_dates(&series.buckets), vec!["12-01", "12-02"]);
    assert_eq!(series.buckets[0].count("X"), 5);
    assert_eq!(series.buckets[0].count("Y"), 3);
    assert_eq!(series.buckets[1].count("X"), 2);
    assert!(!series.buckets[1].counts.contains_key("Y"));
    assert_eq!(series.error_types, vec!["X", "Y"]);
}

#[test]
fn aggregate_of_empty_input_is_empty() {
    let series = aggregate(&[]);
    assert!(series.is_empty());
    assert!(series.error_types.is_empty());
}

#[test]
fn repeated_records_for_same_day_and_type_accumulate() {
    let records = vec![
        ErrorRecord::new("2024-12-02", "jam", 11),
        ErrorRecord::new("2024-12-02", "jam", 13),
        ErrorRecord::new("2024-12-02", "jam", 0),
    ];

    let series = aggregate(&records);
    assert_eq!(series.buckets.len(), 1);
    assert_eq!(series.buckets[0].count("jam"), 24);
}

#[test]
fn buckets_keep_first_appearance_order_not_chronological() {
    let records = vec![
        ErrorRecord::new("2024-12-03", "X", 1),
        ErrorRecord::new("2024-12-01", "X", 1),
        ErrorRecord::new("2024-12-03", "Y", 1),
        ErrorRecord::new("2024-12-02", "Y", 1),
    ];

    let series = aggregate(&records);
    assert_eq!(
        bucket_dates(&series.buckets),
        vec!["12-03", "12-01", "12-02"]
    );
}

#[test]
fn error_types_keep_first_appearance_order() {
    let records = vec![
        ErrorRecord::new("2024-12-01", "B", 1),
        ErrorRecord::new("2024-12-01", "A", 1),
        ErrorRecord::new("2024-12-02", "B", 1),
        ErrorRecord::new("2024-12-02", "C", 1),
    ];

    let series = aggregate(&records);
    assert_eq!(series.error_types, vec!["B", "A", "C"]);
}

#[test]
fn bucket_counts_keep_type_order_of_the_day() {
    let records = vec![
        ErrorRecord::new("2024-12-01", "Y", 1),
        ErrorRecord::new("2024-12-01", "X", 2),
    ];

    let series = aggregate(&records);
    let keys: Vec<&str> = series.buckets[0]
        .counts
        .keys()
        .map(std::string::String::as_str)
        .collect();
    assert_eq!(keys, vec!["Y", "X"]);
}

#[test]
fn same_month_day_from_different_years_share_a_bucket() {
    let records = vec![
        ErrorRecord::new("2023-12-01", "X", 4),
        ErrorRecord::new("2024-12-01", "X", 6),
    ];

    let series = aggregate(&records);
    assert_eq!(series.buckets.len(), 1);
    assert_eq!(series.buckets[0].count("X"), 10);
}

#[test]
fn date_key_drops_only_the_leading_segment() {
    assert_eq!(date_key("2024-12-01"), "12-01");
    assert_eq!(date_key("2024-12"), "12");
    assert_eq!(date_key("-12-01"), "12-01");
    assert_eq!(date_key("2024-12-01-extra"), "12-01-extra");
}

#[test]
fn malformed_label_falls_back_to_raw_label() {
    assert_eq!(date_key("20241201"), "20241201");
    assert_eq!(date_key(""), "");

    let series = aggregate(&[ErrorRecord::new("yesterday", "X", 3)]);
    assert_eq!(bucket_dates(&series.buckets), vec!["yesterday"]);
    assert_eq!(series.buckets[0].count("X"), 3);
}

#[test]
fn record_from_date_uses_iso_label() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 9).expect("valid date");
    let record = ErrorRecord::from_date(date, "X", 7);

    assert_eq!(record.timestamp, "2024-01-09");
    assert_eq!(record.date_key(), "01-09");
}

#[test]
fn series_total_sums_across_buckets() {
    let records = vec![
        ErrorRecord::new("2024-12-01", "X", 5),
        ErrorRecord::new("2024-12-02", "X", 2),
        ErrorRecord::new("2024-12-02", "Y", 9),
    ];

    let series = aggregate(&records);
    assert_eq!(series.series_total("X"), 7);
    assert_eq!(series.series_total("Y"), 9);
    assert_eq!(series.series_total("missing"), 0);
    assert_eq!(series.bucket("12-02").map(DateBucket::total), Some(11));
    assert!(series.bucket("12-09").is_none());
}
