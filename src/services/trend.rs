// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period-over-period trend of a charted series.

use crate::models::{AggregatedPoint, TrendResult};

/// Compare the last two points of the series being charted.
///
/// Takes the already-aggregated points so the badge always agrees with the
/// plot. No smoothing or outlier rejection is applied.
pub fn trend(points: &[AggregatedPoint]) -> TrendResult {
    match points {
        [.., previous, current] => TrendResult {
            has_data: true,
            current: current.value,
            previous: previous.value,
        },
        _ => TrendResult::empty(),
    }
}
