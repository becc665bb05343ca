// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, NaiveDate};
use healthboard::config::Config;
use healthboard::db::{HealthStore, MetricKind};
use healthboard::models::{DatedValue, WorkoutEvent};
use healthboard::routes::create_router;
use healthboard::AppState;
use std::collections::HashMap;
use std::sync::Arc;

/// Reference instant used by tests that pass `now` explicitly.
#[allow(dead_code)]
pub const TEST_NOW: &str = "2024-06-30T12:00:00Z";

#[allow(dead_code)]
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// One HRV sample per day for the 400 days up to 2024-06-30.
#[allow(dead_code)]
pub fn daily_hrv() -> Vec<DatedValue> {
    let end = day("2024-06-30");
    (0..400)
        .rev()
        .map(|i| DatedValue::new(end - Duration::days(i), 40.0 + (i % 10) as f64))
        .collect()
}

#[allow(dead_code)]
pub fn workout(ts: &str, kind: &str, seconds: f64, energy: Option<f64>) -> WorkoutEvent {
    WorkoutEvent {
        start_timestamp: ts.to_string(),
        activity_type: kind.to_string(),
        duration_seconds: seconds,
        energy_burned: energy,
    }
}

/// In-memory store with HRV, a sparse weight series, one blood marker and
/// workouts in the week of 2024-06-24.
#[allow(dead_code)]
pub fn test_store() -> HealthStore {
    let mut metrics = HashMap::new();
    metrics.insert(MetricKind::Hrv, daily_hrv());
    metrics.insert(
        MetricKind::Weight,
        vec![
            DatedValue::new(day("2024-06-10"), 81.2),
            DatedValue::new(day("2024-06-25"), 80.4),
        ],
    );

    let mut blood = HashMap::new();
    blood.insert(
        "ldl".to_string(),
        vec![
            DatedValue::new(day("2023-03-01"), 131.0),
            DatedValue::new(day("2023-11-20"), 118.0),
            DatedValue::new(day("2024-05-02"), 104.0),
        ],
    );

    let workouts = vec![
        workout("2024-06-24T06:30:00Z", "Running", 1800.0, Some(320.0)),
        workout("2024-06-24T18:00:00Z", "Traditional_Strength_Training", 2700.0, None),
        workout("2024-06-26T07:00:00Z", "Cycling", 3900.0, Some(612.6)),
        workout("2024-02-29T07:00:00Z", "Swimming", 1500.0, Some(0.0)),
    ];

    HealthStore::in_memory(metrics, blood, workouts)
}

/// Create a test app backed by the in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::test_default(), test_store()));
    (create_router(state.clone()), state)
}

/// GET `uri` and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
