// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart-ready views over metric series and workouts.
//!
//! Handles the pipeline behind every dashboard widget:
//! 1. Order the series by date
//! 2. Select the relative window
//! 3. Bucket (or pass through raw) per the aggregation policy
//! 4. Derive the trend from exactly the points being charted

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{
    AggregatedPoint, DateRange, DatedValue, DayBucket, Granularity, HeatmapLevel, RelativeWindow,
    TrendDirection, TrendResult, WeekRange, WorkoutEvent,
};
use crate::services::aggregator::AggregationPolicy;
use crate::services::date_range::{current_week_range, lookback_range};
use crate::services::trend::trend;
use crate::services::weekly_count::count_active_days_this_week;
use crate::services::window_filter::select_window;
use crate::services::workout_days::{fill_range, group_by_day};

/// A windowed, aggregated series with its trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Window applied, or `None` when the series was passed through unfiltered
    pub window: Option<RelativeWindow>,
    /// Bucket size, or `None` when points are raw samples
    pub granularity: Option<Granularity>,
    pub points: Vec<AggregatedPoint>,
    pub trend: TrendResult,
    pub trend_direction: TrendDirection,
    pub change_percent: Option<f64>,
}

/// One heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    #[serde(flatten)]
    pub bucket: DayBucket,
    pub level: HeatmapLevel,
}

/// Dense workout calendar plus the current-week summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutCalendar {
    pub range: DateRange,
    pub days: Vec<CalendarDay>,
    pub week: WeekRange,
    pub active_days_this_week: u8,
}

/// Builds chart and calendar views with a fixed aggregation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartService {
    policy: AggregationPolicy,
}

impl ChartService {
    pub fn new(policy: AggregationPolicy) -> Self {
        Self { policy }
    }

    /// Chart data for `series` over `window`.
    ///
    /// With `window == None` the whole series is charted; it is bucketed
    /// monthly once it reaches the raw-point threshold.
    pub fn build(
        &self,
        series: &[DatedValue],
        window: Option<RelativeWindow>,
        now: DateTime<Utc>,
    ) -> ChartData {
        let mut sorted = series.to_vec();
        sorted.sort_by_key(|p| p.date);

        let (windowed, granularity) = match window {
            Some(window) => {
                let windowed = select_window(&sorted, window, now);
                let granularity = self.policy.granularity(window, windowed.len());
                (windowed, granularity)
            }
            None => {
                let granularity = (sorted.len() >= self.policy.raw_point_threshold)
                    .then_some(Granularity::Monthly);
                (sorted, granularity)
            }
        };

        let points = self.policy.apply(&windowed, granularity);
        let trend = trend(&points);

        tracing::debug!(
            window = window.map(|w| w.as_str()),
            raw = windowed.len(),
            points = points.len(),
            granularity = granularity.map(|g| g.as_str()),
            "Built chart data"
        );

        ChartData {
            window,
            granularity,
            points,
            trend_direction: trend.direction(),
            change_percent: trend.change_percent(),
            trend,
        }
    }

    /// Heatmap calendar covering `years` back from `today`.
    pub fn calendar(
        &self,
        events: &[WorkoutEvent],
        today: NaiveDate,
        years: u32,
    ) -> WorkoutCalendar {
        let range = lookback_range(today, years);
        let grouped = group_by_day(events);
        let active_days_this_week =
            count_active_days_this_week(&grouped, today, self.policy.week_start);

        let days = fill_range(&grouped, &range)
            .into_iter()
            .map(|bucket| CalendarDay {
                level: bucket.heatmap_level(),
                bucket,
            })
            .collect();

        WorkoutCalendar {
            range,
            days,
            week: current_week_range(today, self.policy.week_start),
            active_days_this_week,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-30T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// One sample per day for the last `days` days before `now()`.
    fn daily_series(days: i64) -> Vec<DatedValue> {
        let today = now().date_naive();
        (0..days)
            .rev()
            .map(|i| DatedValue::new(today - Duration::days(i), 50.0 + (i % 7) as f64))
            .collect()
    }

    #[test]
    fn test_short_window_uses_weekly_buckets() {
        let chart = ChartService::default().build(
            &daily_series(400),
            Some(RelativeWindow::Last30Days),
            now(),
        );

        assert_eq!(chart.granularity, Some(Granularity::Weekly));
        let folded: usize = chart.points.iter().map(|p| p.point_count()).sum();
        assert_eq!(folded, 31);
        assert!(chart.points.len() <= 6);
    }

    #[test]
    fn test_long_window_uses_monthly_buckets() {
        let chart = ChartService::default().build(
            &daily_series(400),
            Some(RelativeWindow::Last1Year),
            now(),
        );

        assert_eq!(chart.granularity, Some(Granularity::Monthly));
        // July 2023 through June 2024
        assert_eq!(chart.points.len(), 12);
    }

    #[test]
    fn test_trend_matches_charted_points() {
        let chart = ChartService::default().build(
            &daily_series(400),
            Some(RelativeWindow::Last3Months),
            now(),
        );

        let n = chart.points.len();
        assert!(chart.trend.has_data);
        assert_eq!(chart.trend.current, chart.points[n - 1].value);
        assert_eq!(chart.trend.previous, chart.points[n - 2].value);
    }

    #[test]
    fn test_sparse_window_is_raw() {
        let chart =
            ChartService::default().build(&daily_series(3), Some(RelativeWindow::Last1Year), now());

        assert_eq!(chart.granularity, None);
        assert_eq!(chart.points.len(), 3);
        assert!(chart.points.iter().all(AggregatedPoint::is_raw));
    }

    #[test]
    fn test_unsorted_series_is_sorted_before_charting() {
        let mut series = daily_series(3);
        series.reverse();

        let chart = ChartService::default().build(&series, Some(RelativeWindow::Last30Days), now());
        let dates: Vec<NaiveDate> = chart.points.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_no_window_charts_everything() {
        let chart = ChartService::default().build(&daily_series(400), None, now());
        let folded: usize = chart.points.iter().map(|p| p.point_count()).sum();
        assert_eq!(folded, 400);
        assert_eq!(chart.granularity, Some(Granularity::Monthly));
    }

    #[test]
    fn test_calendar_is_dense_and_counts_week() {
        let events = vec![
            WorkoutEvent {
                start_timestamp: "2024-06-24T07:00:00Z".to_string(),
                activity_type: "Running".to_string(),
                duration_seconds: 3600.0,
                energy_burned: Some(500.0),
            },
            WorkoutEvent {
                start_timestamp: "2024-06-27T07:00:00Z".to_string(),
                activity_type: "Swimming".to_string(),
                duration_seconds: 600.0,
                energy_burned: None,
            },
        ];

        let calendar = ChartService::default().calendar(&events, now().date_naive(), 1);

        assert_eq!(calendar.range.start_date, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
        assert_eq!(calendar.days.len(), 367);
        assert_eq!(calendar.active_days_this_week, 2);
        assert_eq!(calendar.week.week_start, NaiveDate::from_ymd_opt(2024, 6, 24).unwrap());

        let last = calendar.days.last().unwrap();
        assert_eq!(last.bucket.date, now().date_naive());
        assert_eq!(last.level, HeatmapLevel::None);

        let monday = &calendar.days[calendar.days.len() - 7];
        assert_eq!(monday.bucket.total_minutes, 60);
        assert_eq!(monday.level, HeatmapLevel::High);
    }
}
