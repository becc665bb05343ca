// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar arithmetic for lookback windows, day enumeration and weeks.
//!
//! Everything here is a pure function of its arguments.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::{DateRange, WeekRange, WeekStart};

/// Range ending at `reference` and starting `years` calendar years earlier.
///
/// Feb 29 steps back to Feb 28 when the target year is not a leap year.
pub fn lookback_range(reference: NaiveDate, years: u32) -> DateRange {
    let start_date = reference
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    DateRange {
        start_date,
        end_date: reference,
    }
}

/// Every calendar day from `start` to `end`, both inclusive.
///
/// Returns an empty vector when `start > end`.
pub fn enumerate_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Days in a [`DateRange`].
pub fn range_days(range: &DateRange) -> Vec<NaiveDate> {
    enumerate_days(range.start_date, range.end_date)
}

/// First day of the week containing `date`.
pub fn week_start_of(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    date - Duration::days(i64::from(offset))
}

/// The week containing `reference`.
pub fn current_week_range(reference: NaiveDate, week_start: WeekStart) -> WeekRange {
    let start = week_start_of(reference, week_start);
    WeekRange {
        week_start: start,
        week_end: start + Duration::days(6),
    }
}

/// The seven days of the week containing `reference`, in order.
pub fn current_week_days(reference: NaiveDate, week_start: WeekStart) -> [NaiveDate; 7] {
    let start = week_start_of(reference, week_start);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// First and last calendar day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}
