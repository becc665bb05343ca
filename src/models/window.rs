// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Relative lookback windows, week conventions and date spans.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Named lookback period measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RelativeWindow {
    #[serde(rename = "last30days")]
    Last30Days,
    #[serde(rename = "last3months")]
    Last3Months,
    #[serde(rename = "last6months")]
    Last6Months,
    #[serde(rename = "last1year")]
    Last1Year,
    #[serde(rename = "last3years")]
    Last3Years,
}

impl RelativeWindow {
    pub const ALL: [RelativeWindow; 5] = [
        RelativeWindow::Last30Days,
        RelativeWindow::Last3Months,
        RelativeWindow::Last6Months,
        RelativeWindow::Last1Year,
        RelativeWindow::Last3Years,
    ];

    /// Parse a window identifier. Unknown identifiers yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeWindow::Last30Days => "last30days",
            RelativeWindow::Last3Months => "last3months",
            RelativeWindow::Last6Months => "last6months",
            RelativeWindow::Last1Year => "last1year",
            RelativeWindow::Last3Years => "last3years",
        }
    }

    /// Days measured back from "now".
    pub fn offset_days(&self) -> i64 {
        match self {
            RelativeWindow::Last30Days => 30,
            RelativeWindow::Last3Months => 90,
            RelativeWindow::Last6Months => 180,
            RelativeWindow::Last1Year => 365,
            RelativeWindow::Last3Years => 1095,
        }
    }
}

/// First day of the week, shared by weekly aggregation and week counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO week: Monday through Sunday
    #[default]
    Monday,
    /// Sunday through Saturday
    Sunday,
}

impl WeekStart {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" | "iso" => Some(WeekStart::Monday),
            "sunday" | "sun" => Some(WeekStart::Sunday),
            _ => None,
        }
    }

    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The seven-day week containing a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}
