// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Active-day counter for the current week.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{DayBucket, WeekStart};
use crate::services::date_range::current_week_days;

/// Number of days (0..=7) in the week containing `reference` that have at
/// least one workout. Empty placeholder buckets do not count.
pub fn count_active_days_this_week(
    days: &BTreeMap<NaiveDate, DayBucket>,
    reference: NaiveDate,
    week_start: WeekStart,
) -> u8 {
    current_week_days(reference, week_start)
        .iter()
        .filter(|date| days.get(*date).is_some_and(DayBucket::has_workouts))
        .count() as u8
}
