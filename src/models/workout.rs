// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout events and the per-day calendar buckets built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A single workout as supplied by the upstream data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEvent {
    /// Start time (ISO 8601). Only the date prefix is used for grouping.
    pub start_timestamp: String,
    /// Activity type (e.g. "Traditional_Strength_Training")
    pub activity_type: String,
    /// Duration in seconds
    #[serde(default)]
    pub duration_seconds: f64,
    /// Active energy burned in kilocalories
    #[serde(default)]
    pub energy_burned: Option<f64>,
}

/// Display summary of one workout within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDetail {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub duration_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_label: Option<String>,
}

/// One calendar day of workouts. Days without workouts are placeholders
/// with `total_minutes == 0` and no workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub total_minutes: u32,
    pub workouts: Vec<WorkoutDetail>,
}

impl DayBucket {
    /// Placeholder for a day without workouts.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_minutes: 0,
            workouts: Vec::new(),
        }
    }

    pub fn has_workouts(&self) -> bool {
        !self.workouts.is_empty()
    }

    pub fn heatmap_level(&self) -> HeatmapLevel {
        HeatmapLevel::from_minutes(self.total_minutes)
    }
}

/// Shading class of a calendar heatmap cell, serialized as 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeatmapLevel {
    None,
    Light,
    Moderate,
    High,
    Peak,
}

impl HeatmapLevel {
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0 => HeatmapLevel::None,
            1..=29 => HeatmapLevel::Light,
            30..=59 => HeatmapLevel::Moderate,
            60..=89 => HeatmapLevel::High,
            _ => HeatmapLevel::Peak,
        }
    }
}

impl From<HeatmapLevel> for u8 {
    fn from(level: HeatmapLevel) -> Self {
        match level {
            HeatmapLevel::None => 0,
            HeatmapLevel::Light => 1,
            HeatmapLevel::Moderate => 2,
            HeatmapLevel::High => 3,
            HeatmapLevel::Peak => 4,
        }
    }
}

impl TryFrom<u8> for HeatmapLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HeatmapLevel::None),
            1 => Ok(HeatmapLevel::Light),
            2 => Ok(HeatmapLevel::Moderate),
            3 => Ok(HeatmapLevel::High),
            4 => Ok(HeatmapLevel::Peak),
            other => Err(format!("invalid heatmap level: {}", other)),
        }
    }
}
