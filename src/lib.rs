// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Healthboard: time-series engine behind a personal health dashboard
//!
//! This crate windows and aggregates dated health metrics into chart
//! points with trends, and turns workout events into a dense calendar
//! heatmap. A small JSON API serves those views to the frontend.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::HealthStore;
use services::ChartService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: HealthStore,
    pub charts: ChartService,
}

impl AppState {
    pub fn new(config: Config, store: HealthStore) -> Self {
        let charts = ChartService::new(services::AggregationPolicy {
            raw_point_threshold: config.raw_point_threshold,
            week_start: config.week_start,
        });
        Self {
            config,
            store,
            charts,
        }
    }
}
