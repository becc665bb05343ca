// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Relative time-window selection over dated series.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{DatedValue, RelativeWindow};

/// First calendar day included in `window` as seen from `now`.
pub fn window_cutoff(window: RelativeWindow, now: DateTime<Utc>) -> NaiveDate {
    (now - Duration::days(window.offset_days())).date_naive()
}

/// Entries on or after the window cutoff, in input order.
pub fn select_window(
    series: &[DatedValue],
    window: RelativeWindow,
    now: DateTime<Utc>,
) -> Vec<DatedValue> {
    let cutoff = window_cutoff(window, now);
    series
        .iter()
        .filter(|point| point.date >= cutoff)
        .copied()
        .collect()
}

/// Like [`select_window`], but takes a window identifier.
///
/// Unknown identifiers return the series unchanged.
pub fn select_window_named(
    series: &[DatedValue],
    name: &str,
    now: DateTime<Utc>,
) -> Vec<DatedValue> {
    match RelativeWindow::parse(name) {
        Some(window) => select_window(series, window, now),
        None => {
            tracing::debug!(window = name, "Unknown window, returning series unfiltered");
            series.to_vec()
        }
    }
}
