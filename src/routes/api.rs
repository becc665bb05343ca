// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard API routes.

use crate::config::MAX_HEATMAP_YEARS;
use crate::db::MetricKind;
use crate::error::{AppError, Result};
use crate::models::RelativeWindow;
use crate::services::{ChartData, WorkoutCalendar};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const DEFAULT_WINDOW: RelativeWindow = RelativeWindow::Last3Months;

/// Dashboard API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/metrics/{metric}", get(get_metric_chart))
        .route("/api/blood", get(list_blood_markers))
        .route("/api/blood/{marker}", get(get_blood_marker_chart))
        .route("/api/workouts/calendar", get(get_workout_calendar))
}

// ─── Query Parsing ───────────────────────────────────────────

#[derive(Deserialize)]
struct ChartQuery {
    /// Relative window identifier (e.g. "last30days")
    window: Option<String>,
    /// Reference instant (RFC3339 or YYYY-MM-DD); defaults to now
    now: Option<String>,
}

#[derive(Deserialize)]
struct CalendarQuery {
    now: Option<String>,
    /// Heatmap lookback in years
    years: Option<u32>,
}

/// Resolve the `now` parameter, defaulting to the current time.
///
/// Bare dates are taken as midnight UTC.
fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    let Some(raw) = now else {
        return Ok(Utc::now());
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Invalid 'now' parameter: must be RFC3339 datetime or YYYY-MM-DD".to_string(),
            )
        })
}

/// Resolve the `window` parameter.
///
/// A missing window means the default; an unknown identifier yields `None`,
/// which charts the series unfiltered.
fn resolve_window(window: Option<&str>) -> Option<RelativeWindow> {
    match window {
        None => Some(DEFAULT_WINDOW),
        Some(name) => {
            let parsed = RelativeWindow::parse(name);
            if parsed.is_none() {
                tracing::debug!(window = name, "Unknown window, charting full series");
            }
            parsed
        }
    }
}

// ─── Metric Charts ───────────────────────────────────────────

/// Chart data for a dashboard metric (HRV, VO2max, weight, body fat).
async fn get_metric_chart(
    State(state): State<Arc<AppState>>,
    Path(metric): Path<String>,
    Query(params): Query<ChartQuery>,
) -> Result<Json<ChartData>> {
    let metric = MetricKind::parse(&metric)
        .ok_or_else(|| AppError::NotFound(format!("Unknown metric: {}", metric)))?;
    let now = parse_now(params.now.as_deref())?;
    let window = resolve_window(params.window.as_deref());

    tracing::debug!(
        metric = metric.slug(),
        window = ?window,
        now = %now,
        "Fetching metric chart"
    );

    let series = state.store.metric_series(metric);
    Ok(Json(state.charts.build(series, window, now)))
}

// ─── Blood Markers ───────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BloodMarkersResponse {
    pub markers: Vec<String>,
}

/// List available blood markers.
async fn list_blood_markers(State(state): State<Arc<AppState>>) -> Json<BloodMarkersResponse> {
    Json(BloodMarkersResponse {
        markers: state
            .store
            .blood_markers()
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Chart data for one blood marker panel.
async fn get_blood_marker_chart(
    State(state): State<Arc<AppState>>,
    Path(marker): Path<String>,
    Query(params): Query<ChartQuery>,
) -> Result<Json<ChartData>> {
    let series = state.store.blood_marker_series(&marker)?;
    let now = parse_now(params.now.as_deref())?;
    let window = resolve_window(params.window.as_deref());

    tracing::debug!(marker = %marker, window = ?window, "Fetching blood marker chart");

    Ok(Json(state.charts.build(series, window, now)))
}

// ─── Workout Calendar ────────────────────────────────────────

/// Dense workout heatmap with the current-week active day count.
async fn get_workout_calendar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CalendarQuery>,
) -> Result<Json<WorkoutCalendar>> {
    let now = parse_now(params.now.as_deref())?;
    let years = params.years.unwrap_or(state.config.heatmap_years);

    if years == 0 || years > MAX_HEATMAP_YEARS {
        return Err(AppError::BadRequest(format!(
            "'years' must be between 1 and {}",
            MAX_HEATMAP_YEARS
        )));
    }

    let calendar = state
        .charts
        .calendar(state.store.workouts(), now.date_naive(), years);

    tracing::debug!(
        years,
        days = calendar.days.len(),
        active_days_this_week = calendar.active_days_this_week,
        "Built workout calendar"
    );

    Ok(Json(calendar))
}
