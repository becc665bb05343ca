// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Day-indexed workout calendar.
//!
//! Workouts are grouped by the date prefix of their start timestamp, then
//! every day of the requested range is filled so the heatmap grid has no
//! gaps:
//! 1. Group events by day, summing rounded minutes
//! 2. Build one display detail per workout, in input order
//! 3. Fill missing days with empty placeholders

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DateRange, DayBucket, WorkoutDetail, WorkoutEvent};
use crate::services::date_range::range_days;
use crate::time_utils::date_prefix;

/// Group workouts by calendar day. Only days with workouts are present.
///
/// The day is the verbatim date prefix of the start timestamp; no timezone
/// conversion is performed. Events with an unparseable timestamp are skipped.
pub fn group_by_day(events: &[WorkoutEvent]) -> BTreeMap<NaiveDate, DayBucket> {
    let mut days: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for event in events {
        let Some(date) = date_prefix(&event.start_timestamp) else {
            tracing::warn!(
                start_timestamp = %event.start_timestamp,
                activity_type = %event.activity_type,
                "Skipping workout with invalid start timestamp"
            );
            continue;
        };

        let bucket = days.entry(date).or_insert_with(|| DayBucket::empty(date));
        bucket.total_minutes = bucket
            .total_minutes
            .saturating_add(rounded_minutes(event.duration_seconds));
        bucket.workouts.push(workout_detail(event));
    }

    days
}

/// One bucket per day of `range`, taking grouped days where present and
/// empty placeholders elsewhere.
pub fn fill_range(grouped: &BTreeMap<NaiveDate, DayBucket>, range: &DateRange) -> Vec<DayBucket> {
    range_days(range)
        .into_iter()
        .map(|date| {
            grouped
                .get(&date)
                .cloned()
                .unwrap_or_else(|| DayBucket::empty(date))
        })
        .collect()
}

/// Dense calendar of `events` over `range`.
pub fn build_day_buckets(events: &[WorkoutEvent], range: &DateRange) -> Vec<DayBucket> {
    fill_range(&group_by_day(events), range)
}

/// Whole minutes, rounding half up. Negative durations count as zero.
fn rounded_minutes(duration_seconds: f64) -> u32 {
    (duration_seconds.max(0.0) / 60.0).round() as u32
}

fn workout_detail(event: &WorkoutEvent) -> WorkoutDetail {
    WorkoutDetail {
        activity_type: event.activity_type.replace('_', " "),
        duration_label: format_duration(rounded_minutes(event.duration_seconds)),
        calories_label: event
            .energy_burned
            .map(f64::round)
            .filter(|kcal| *kcal > 0.0)
            .map(|kcal| format!("{} cal", kcal as u64)),
    }
}

/// "1h5m" for an hour or more, otherwise "45m".
fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h{}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
