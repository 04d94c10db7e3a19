use std::collections::{HashMap, HashSet};

use microstop_chart::api::{MicroStopChart, MicroStopChartConfig};
use microstop_chart::core::{ErrorRecord, aggregate};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = ErrorRecord> {
    (
        prop_oneof![Just(2023u32), Just(2024u32)],
        1u32..=12,
        1u32..=28,
        prop_oneof![Just("jam"), Just("feed"), Just("sensor"), Just("align")],
        0u64..10_000,
    )
        .prop_map(|(year, month, day, error_type, count)| {
            ErrorRecord::new(format!("{year}-{month:02}-{day:02}"), error_type, count)
        })
}

proptest! {
    #[test]
    fn per_type_totals_are_preserved(records in prop::collection::vec(record_strategy(), 0..80)) {
        let series = aggregate(&records);

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for record in &records {
            *expected.entry(record.error_type_id.as_str()).or_insert(0) += record.count;
        }

        for (error_type, total) in expected {
            prop_assert_eq!(series.series_total(error_type), total);
        }
    }

    #[test]
    fn error_types_are_the_distinct_input_ids(records in prop::collection::vec(record_strategy(), 0..80)) {
        let series = aggregate(&records);

        let unique: HashSet<&str> = series.error_types.iter().map(String::as_str).collect();
        prop_assert_eq!(unique.len(), series.error_types.len());

        let input: HashSet<&str> = records.iter().map(|r| r.error_type_id.as_str()).collect();
        prop_assert_eq!(unique, input);
    }

    #[test]
    fn bucket_dates_are_distinct_and_in_first_seen_order(records in prop::collection::vec(record_strategy(), 0..80)) {
        let series = aggregate(&records);

        let mut first_seen: Vec<&str> = Vec::new();
        for record in &records {
            let key = record.date_key();
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        let dates: Vec<&str> = series.buckets.iter().map(|b| b.date.as_str()).collect();
        prop_assert_eq!(dates, first_seen);
    }

    #[test]
    fn visible_stack_total_matches_visible_counts(
        records in prop::collection::vec(record_strategy(), 1..60),
        clicks in prop::collection::vec(
            prop_oneof![Just("all"), Just("jam"), Just("feed"), Just("sensor"), Just("align")],
            0..8,
        )
    ) {
        let mut chart = MicroStopChart::with_records(MicroStopChartConfig::default(), &records);
        for click in clicks {
            chart.handle_legend_click(click);
        }

        for (bucket, stack) in chart.buckets().iter().zip(chart.stacks()) {
            let expected: u64 = chart
                .visible_error_types()
                .into_iter()
                .map(|error_type| bucket.count(error_type))
                .sum();
            prop_assert_eq!(stack.visible_total, expected);
        }
    }
}
