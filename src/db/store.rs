// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only store of metric series and workout events.
//!
//! The store is loaded once at startup from a snapshot directory:
//! - `metrics/<metric>.json` - `DatedValue[]` per dashboard metric
//! - `blood/<marker>.json` - `DatedValue[]` per blood marker
//! - `workouts.json` - `WorkoutEvent[]`
//!
//! Missing files are treated as empty data.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::db::files;
use crate::error::AppError;
use crate::models::{DatedValue, WorkoutEvent};

const MAX_MARKER_NAME_LEN: usize = 64;

/// Dashboard metrics charted from dated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Hrv,
    Vo2Max,
    Weight,
    BodyFat,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Hrv,
        MetricKind::Vo2Max,
        MetricKind::Weight,
        MetricKind::BodyFat,
    ];

    pub fn parse(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// URL path segment and file stem.
    pub fn slug(&self) -> &'static str {
        match self {
            MetricKind::Hrv => "hrv",
            MetricKind::Vo2Max => "vo2max",
            MetricKind::Weight => "weight",
            MetricKind::BodyFat => "body-fat",
        }
    }
}

/// Check a blood marker name before it is used as a lookup key.
///
/// Allowed: lowercase ASCII letters, digits, `-` and `_`, at most 64 chars.
pub fn is_valid_marker_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_MARKER_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// In-memory snapshot of all dashboard data.
#[derive(Debug, Clone, Default)]
pub struct HealthStore {
    metrics: HashMap<MetricKind, Vec<DatedValue>>,
    blood_markers: HashMap<String, Vec<DatedValue>>,
    workouts: Vec<WorkoutEvent>,
}

impl HealthStore {
    /// Build a store from already-parsed data (tests, seeding).
    pub fn in_memory(
        metrics: HashMap<MetricKind, Vec<DatedValue>>,
        blood_markers: HashMap<String, Vec<DatedValue>>,
        workouts: Vec<WorkoutEvent>,
    ) -> Self {
        Self {
            metrics,
            blood_markers,
            workouts,
        }
    }

    /// Load every metric, blood marker and workout file under `dir`.
    pub async fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();

        let mut metrics = HashMap::new();
        for metric in MetricKind::ALL {
            let path = dir
                .join(files::METRICS_DIR)
                .join(format!("{}.json", metric.slug()));
            let series: Vec<DatedValue> = read_json_or_default(&path).await?;
            tracing::debug!(metric = metric.slug(), points = series.len(), "Loaded metric");
            metrics.insert(metric, series);
        }

        let blood_markers = load_blood_markers(&dir.join(files::BLOOD_DIR)).await?;
        let workouts: Vec<WorkoutEvent> =
            read_json_or_default(&dir.join(files::WORKOUTS_FILE)).await?;

        tracing::info!(
            dir = %dir.display(),
            blood_markers = blood_markers.len(),
            workouts = workouts.len(),
            "Health data loaded"
        );

        Ok(Self {
            metrics,
            blood_markers,
            workouts,
        })
    }

    /// Series for a dashboard metric (empty when no samples exist).
    pub fn metric_series(&self, metric: MetricKind) -> &[DatedValue] {
        self.metrics.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Series for a blood marker.
    pub fn blood_marker_series(&self, marker: &str) -> Result<&[DatedValue], AppError> {
        if !is_valid_marker_name(marker) {
            return Err(AppError::BadRequest(format!(
                "Invalid blood marker name: {}",
                marker
            )));
        }
        self.blood_markers
            .get(marker)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::NotFound(format!("Blood marker {} not found", marker)))
    }

    /// Blood marker names, sorted.
    pub fn blood_markers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.blood_markers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn workouts(&self) -> &[WorkoutEvent] {
        &self.workouts
    }
}

async fn load_blood_markers(dir: &Path) -> Result<HashMap<String, Vec<DatedValue>>, AppError> {
    let mut markers = HashMap::new();

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(markers),
        Err(e) => {
            return Err(AppError::Storage(format!(
                "Failed to list {}: {}",
                dir.display(),
                e
            )))
        }
    };

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::Storage(format!("Failed to list {}: {}", dir.display(), e)))?
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        if !is_valid_marker_name(name) {
            tracing::warn!(path = %path.display(), "Skipping blood marker with invalid name");
            continue;
        }

        let series: Vec<DatedValue> = read_json_or_default(&path).await?;
        markers.insert(name.to_string(), series);
    }

    Ok(markers)
}

async fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T, AppError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Data file not found, using empty data");
            return Ok(T::default());
        }
        Err(e) => {
            return Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Invalid JSON in {}: {}", path.display(), e))
    })
}
