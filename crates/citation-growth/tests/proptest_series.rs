//! Property-based tests for the cumulative series.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use citation_growth::models::Granularity;
use citation_growth::series::build_cumulative_series;

/// Dates between 1990 and roughly 2035.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (726_468i32..743_000).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Week),
        Just(Granularity::Month),
        Just(Granularity::Quarter),
        Just(Granularity::Year),
    ]
}

proptest! {
    /// The running total never decreases and ends at the input length.
    #[test]
    fn series_is_monotonic_and_complete(
        dates in proptest::collection::vec(arb_date(), 1..200),
        granularity in arb_granularity(),
    ) {
        let series = build_cumulative_series(&dates, granularity).unwrap();

        prop_assert!(!series.is_empty());
        for pair in series.points().windows(2) {
            prop_assert!(pair[0].bucket_start < pair[1].bucket_start);
            prop_assert!(pair[0].cumulative <= pair[1].cumulative);
        }
        prop_assert_eq!(series.total(), dates.len());
    }

    /// Every bucket start is aligned and consecutive buckets are adjacent.
    #[test]
    fn buckets_are_aligned_and_contiguous(
        dates in proptest::collection::vec(arb_date(), 1..100),
        granularity in arb_granularity(),
    ) {
        let series = build_cumulative_series(&dates, granularity).unwrap();

        for point in series.iter() {
            prop_assert_eq!(granularity.bucket_start(point.bucket_start), point.bucket_start);
        }
        for pair in series.points().windows(2) {
            prop_assert_eq!(granularity.next_bucket(pair[0].bucket_start), Some(pair[1].bucket_start));
        }
    }

    /// First and last buckets hold the earliest and latest dates.
    #[test]
    fn series_spans_exactly_the_input(
        dates in proptest::collection::vec(arb_date(), 1..100),
        granularity in arb_granularity(),
    ) {
        let series = build_cumulative_series(&dates, granularity).unwrap();
        let min = *dates.iter().min().unwrap();
        let max = *dates.iter().max().unwrap();

        prop_assert_eq!(series.first().unwrap().bucket_start, granularity.bucket_start(min));
        prop_assert_eq!(series.last().unwrap().bucket_start, granularity.bucket_start(max));
    }

    /// Building twice yields the same series.
    #[test]
    fn series_is_deterministic(dates in proptest::collection::vec(arb_date(), 1..50)) {
        let a = build_cumulative_series(&dates, Granularity::Month).unwrap();
        let b = build_cumulative_series(&dates, Granularity::Month).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Month buckets always start on the first.
    #[test]
    fn month_bucket_starts_on_first(date in arb_date()) {
        let start = Granularity::Month.bucket_start(date);
        prop_assert_eq!(start.day(), 1);
        prop_assert_eq!(start.month(), date.month());
        prop_assert_eq!(start.year(), date.year());
    }
}
