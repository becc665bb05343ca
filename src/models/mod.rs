// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod series;
pub mod window;
pub mod workout;

pub use series::{
    AggregatedPoint, AggregationMeta, DatedValue, Granularity, TrendDirection, TrendResult,
};
pub use window::{DateRange, RelativeWindow, WeekRange, WeekStart};
pub use workout::{DayBucket, HeatmapLevel, WorkoutDetail, WorkoutEvent};
