//! Cumulative citation series.
//!
//! Dates are bucketed by [`Granularity`], counted, and summed in
//! chronological order. Empty buckets between the first and last populated
//! bucket carry the previous total forward.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{SeriesError, SeriesResult};
use crate::models::Granularity;

/// One bucket of a cumulative series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// First day of the bucket.
    pub bucket_start: NaiveDate,

    /// Citations dated on or before the end of this bucket.
    pub cumulative: usize,
}

/// Chronologically ordered running total of citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    granularity: Granularity,
    points: Vec<SeriesPoint>,
}

impl TimeSeries {
    /// Bucket granularity the series was built with.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// All points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a series returned by [`build_cumulative_series`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest bucket.
    #[must_use]
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// Latest bucket.
    #[must_use]
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Final cumulative count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.points.last().map_or(0, |p| p.cumulative)
    }

    /// Iterate over points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a SeriesPoint;
    type IntoIter = std::slice::Iter<'a, SeriesPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Build the cumulative citation series for `dates`.
///
/// Input order does not matter. Undated records must be filtered out by the
/// caller.
///
/// # Errors
///
/// Returns [`SeriesError::EmptyInput`] when `dates` is empty.
pub fn build_cumulative_series(
    dates: &[NaiveDate],
    granularity: Granularity,
) -> SeriesResult<TimeSeries> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in dates {
        *counts.entry(granularity.bucket_start(*date)).or_default() += 1;
    }

    let (Some((&first, _)), Some((&last, _))) = (counts.first_key_value(), counts.last_key_value())
    else {
        return Err(SeriesError::EmptyInput);
    };

    let mut points = Vec::new();
    let mut running = 0;
    let mut bucket = Some(first);

    while let Some(start) = bucket.filter(|b| *b <= last) {
        running += counts.get(&start).copied().unwrap_or(0);
        points.push(SeriesPoint { bucket_start: start, cumulative: running });
        bucket = granularity.next_bucket(start);
    }

    tracing::debug!(
        buckets = points.len(),
        total = running,
        granularity = %granularity,
        "Built cumulative series"
    );

    Ok(TimeSeries { granularity, points })
}
