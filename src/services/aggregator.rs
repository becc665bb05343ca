// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly and monthly bucketing of dated series.
//!
//! Each emitted bucket is dated by its most recent sample (so chart ticks
//! line up with real data) and carries provenance metadata: the bucket's
//! nominal calendar span and how many raw samples were averaged into it.
//! Buckets without samples are never emitted.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::{
    AggregatedPoint, AggregationMeta, DatedValue, Granularity, RelativeWindow, WeekStart,
};
use crate::services::date_range::{month_bounds, week_start_of};

/// Default number of windowed samples below which points are charted raw.
pub const DEFAULT_RAW_POINT_THRESHOLD: usize = 8;

impl Granularity {
    /// Bucket size charted for a window: weekly for the two shortest
    /// windows, monthly for the rest.
    pub fn for_window(window: RelativeWindow) -> Self {
        match window {
            RelativeWindow::Last30Days | RelativeWindow::Last3Months => Granularity::Weekly,
            RelativeWindow::Last6Months
            | RelativeWindow::Last1Year
            | RelativeWindow::Last3Years => Granularity::Monthly,
        }
    }
}

/// Decides whether a windowed series is bucketed or charted raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPolicy {
    /// Series with fewer points than this are passed through raw.
    pub raw_point_threshold: usize,
    pub week_start: WeekStart,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self {
            raw_point_threshold: DEFAULT_RAW_POINT_THRESHOLD,
            week_start: WeekStart::Monday,
        }
    }
}

impl AggregationPolicy {
    /// Granularity to use for `len` points, or `None` to chart them raw.
    pub fn granularity(&self, window: RelativeWindow, len: usize) -> Option<Granularity> {
        if len < self.raw_point_threshold {
            None
        } else {
            Some(Granularity::for_window(window))
        }
    }

    /// Apply the policy: bucket the series, or pass it through raw.
    pub fn apply(
        &self,
        series: &[DatedValue],
        granularity: Option<Granularity>,
    ) -> Vec<AggregatedPoint> {
        match granularity {
            Some(granularity) => aggregate(series, granularity, self.week_start),
            None => series.iter().copied().map(AggregatedPoint::from).collect(),
        }
    }
}

/// Running totals for one bucket.
struct Bucket {
    latest: NaiveDate,
    sum: f64,
    count: usize,
}

/// Average `series` into one point per week or month.
///
/// Output is ordered by each bucket's representative (latest sample) date.
pub fn aggregate(
    series: &[DatedValue],
    granularity: Granularity,
    week_start: WeekStart,
) -> Vec<AggregatedPoint> {
    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();

    for point in series {
        let key = bucket_start(point.date, granularity, week_start);
        let bucket = buckets.entry(key).or_insert(Bucket {
            latest: point.date,
            sum: 0.0,
            count: 0,
        });
        bucket.latest = bucket.latest.max(point.date);
        bucket.sum += point.value;
        bucket.count += 1;
    }

    // Keys are disjoint spans in ascending order, so representative dates
    // ascend as well.
    let points: Vec<AggregatedPoint> = buckets
        .into_iter()
        .map(|(start, bucket)| AggregatedPoint {
            date: bucket.latest,
            value: bucket.sum / bucket.count as f64,
            meta: Some(AggregationMeta {
                aggregation_type: granularity,
                point_count: bucket.count,
                start_date: Some(start),
                end_date: Some(bucket_end(start, granularity)),
            }),
        })
        .collect();

    tracing::trace!(
        granularity = granularity.as_str(),
        raw = series.len(),
        buckets = points.len(),
        "Aggregated series"
    );

    points
}

fn bucket_start(date: NaiveDate, granularity: Granularity, week_start: WeekStart) -> NaiveDate {
    match granularity {
        Granularity::Weekly => week_start_of(date, week_start),
        Granularity::Monthly => month_bounds(date).0,
    }
}

fn bucket_end(start: NaiveDate, granularity: Granularity) -> NaiveDate {
    match granularity {
        Granularity::Weekly => start + Duration::days(6),
        Granularity::Monthly => month_bounds(start).1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn point(date: &str, value: f64) -> DatedValue {
        DatedValue::new(day(date), value)
    }

    #[test]
    fn test_weekly_single_bucket() {
        let series = vec![
            point("2024-01-01", 10.0),
            point("2024-01-02", 20.0),
            point("2024-01-03", 30.0),
        ];

        let result = aggregate(&series, Granularity::Weekly, WeekStart::Monday);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, day("2024-01-03"));
        assert_eq!(result[0].value, 20.0);
        assert_eq!(
            result[0].meta,
            Some(AggregationMeta {
                aggregation_type: Granularity::Weekly,
                point_count: 3,
                start_date: Some(day("2024-01-01")),
                end_date: Some(day("2024-01-07")),
            })
        );
    }

    #[test]
    fn test_weekly_splits_on_monday() {
        // Sunday 2024-01-07 and Monday 2024-01-08 land in different weeks
        let series = vec![point("2024-01-07", 4.0), point("2024-01-08", 8.0)];

        let result = aggregate(&series, Granularity::Weekly, WeekStart::Monday);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].date, day("2024-01-07"));
        assert_eq!(result[1].date, day("2024-01-08"));

        let result = aggregate(&series, Granularity::Weekly, WeekStart::Sunday);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value, 6.0);
        assert_eq!(
            result[0].meta.as_ref().unwrap().start_date,
            Some(day("2024-01-07"))
        );
    }

    #[test]
    fn test_monthly_buckets_sparse() {
        let series = vec![
            point("2024-01-05", 70.0),
            point("2024-01-25", 72.0),
            // no samples in February or March
            point("2024-04-02", 69.0),
        ];

        let result = aggregate(&series, Granularity::Monthly, WeekStart::Monday);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].date, day("2024-01-25"));
        assert_eq!(result[0].value, 71.0);
        let meta = result[0].meta.as_ref().unwrap();
        assert_eq!(meta.start_date, Some(day("2024-01-01")));
        assert_eq!(meta.end_date, Some(day("2024-01-31")));
        assert_eq!(result[1].meta.as_ref().unwrap().point_count, 1);
    }

    #[test]
    fn test_monthly_february_leap_year() {
        let result = aggregate(
            &[point("2024-02-29", 1.0)],
            Granularity::Monthly,
            WeekStart::Monday,
        );
        assert_eq!(
            result[0].meta.as_ref().unwrap().end_date,
            Some(day("2024-02-29"))
        );
    }

    #[test]
    fn test_unsorted_input_is_ordered_and_dated_by_latest() {
        let series = vec![
            point("2024-03-20", 3.0),
            point("2024-01-10", 1.0),
            point("2024-03-02", 5.0),
        ];

        let result = aggregate(&series, Granularity::Monthly, WeekStart::Monday);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].date, day("2024-01-10"));
        assert_eq!(result[1].date, day("2024-03-20"));
        assert_eq!(result[1].value, 4.0);
    }

    #[test]
    fn test_point_count_conserved() {
        let series: Vec<DatedValue> = (0..100)
            .map(|i| DatedValue::new(day("2023-01-01") + Duration::days(i * 3), i as f64))
            .collect();

        for granularity in [Granularity::Weekly, Granularity::Monthly] {
            let result = aggregate(&series, granularity, WeekStart::Monday);
            let total: usize = result.iter().map(|p| p.point_count()).sum();
            assert_eq!(total, series.len());
        }
    }

    #[test]
    fn test_empty_series() {
        assert!(aggregate(&[], Granularity::Weekly, WeekStart::Monday).is_empty());
    }

    #[test]
    fn test_granularity_for_window() {
        assert_eq!(
            Granularity::for_window(RelativeWindow::Last30Days),
            Granularity::Weekly
        );
        assert_eq!(
            Granularity::for_window(RelativeWindow::Last3Months),
            Granularity::Weekly
        );
        assert_eq!(
            Granularity::for_window(RelativeWindow::Last6Months),
            Granularity::Monthly
        );
        assert_eq!(
            Granularity::for_window(RelativeWindow::Last3Years),
            Granularity::Monthly
        );
    }

    #[test]
    fn test_policy_passes_sparse_series_through_raw() {
        let policy = AggregationPolicy::default();
        let series = vec![point("2024-01-01", 1.0), point("2024-01-02", 2.0)];

        let granularity = policy.granularity(RelativeWindow::Last30Days, series.len());
        assert_eq!(granularity, None);

        let points = policy.apply(&series, granularity);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(AggregatedPoint::is_raw));
    }

    #[test]
    fn test_policy_threshold_zero_always_aggregates() {
        let policy = AggregationPolicy {
            raw_point_threshold: 0,
            week_start: WeekStart::Monday,
        };
        assert_eq!(
            policy.granularity(RelativeWindow::Last1Year, 1),
            Some(Granularity::Monthly)
        );
    }
}
