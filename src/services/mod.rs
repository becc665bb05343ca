// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - time-series and calendar engine.

pub mod aggregator;
pub mod chart;
pub mod date_range;
pub mod trend;
pub mod weekly_count;
pub mod window_filter;
pub mod workout_days;

pub use aggregator::{aggregate, AggregationPolicy};
pub use chart::{CalendarDay, ChartData, ChartService, WorkoutCalendar};
pub use date_range::{current_week_days, current_week_range, enumerate_days, lookback_range};
pub use trend::trend;
pub use weekly_count::count_active_days_this_week;
pub use window_filter::{select_window, select_window_named};
pub use workout_days::{build_day_buckets, fill_range, group_by_day};
