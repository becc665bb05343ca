// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Dated metric samples and their aggregated chart points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One sample of a health metric (HRV, VO2max, weight, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DatedValue {
    /// Calendar day of the sample (YYYY-MM-DD)
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Bucket size used when aggregating a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

/// Provenance of an aggregated point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct AggregationMeta {
    pub aggregation_type: Granularity,
    /// Number of raw samples folded into this bucket (always >= 1)
    pub point_count: usize,
    /// First calendar day of the bucket's week or month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Last calendar day of the bucket's week or month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// A chart point. `meta == None` means the point is a raw sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AggregatedPoint {
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AggregationMeta>,
}

impl From<DatedValue> for AggregatedPoint {
    fn from(raw: DatedValue) -> Self {
        Self {
            date: raw.date,
            value: raw.value,
            meta: None,
        }
    }
}

impl AggregatedPoint {
    pub fn is_raw(&self) -> bool {
        self.meta.is_none()
    }

    /// Raw samples represented by this point (1 for a raw point).
    pub fn point_count(&self) -> usize {
        self.meta.as_ref().map_or(1, |m| m.point_count)
    }
}

/// Direction shown on a trend badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Current-vs-previous comparison of the two most recent chart points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub has_data: bool,
    pub current: f64,
    pub previous: f64,
}

impl TrendResult {
    /// Result for a series with fewer than two points.
    pub fn empty() -> Self {
        Self {
            has_data: false,
            current: 0.0,
            previous: 0.0,
        }
    }

    pub fn direction(&self) -> TrendDirection {
        if !self.has_data || self.current == self.previous {
            TrendDirection::Flat
        } else if self.current > self.previous {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    /// Relative change from `previous` to `current`, in percent.
    ///
    /// `None` when there is no data or `previous` is zero.
    pub fn change_percent(&self) -> Option<f64> {
        if !self.has_data || self.previous == 0.0 {
            return None;
        }
        Some((self.current - self.previous) / self.previous.abs() * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_raw_point_serializes_without_meta() {
        let point = AggregatedPoint::from(DatedValue::new(day("2024-01-15"), 52.5));
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["value"], 52.5);
        assert!(json.get("meta").is_none());
        assert_eq!(point.point_count(), 1);
    }

    #[test]
    fn test_meta_uses_camel_case() {
        let point = AggregatedPoint {
            date: day("2024-01-03"),
            value: 20.0,
            meta: Some(AggregationMeta {
                aggregation_type: Granularity::Weekly,
                point_count: 3,
                start_date: Some(day("2024-01-01")),
                end_date: None,
            }),
        };
        let json = serde_json::to_value(&point).unwrap();

        assert_eq!(json["meta"]["aggregationType"], "weekly");
        assert_eq!(json["meta"]["pointCount"], 3);
        assert_eq!(json["meta"]["startDate"], "2024-01-01");
        assert!(json["meta"].get("endDate").is_none());
    }

    #[test]
    fn test_trend_direction() {
        let up = TrendResult {
            has_data: true,
            current: 55.0,
            previous: 50.0,
        };
        assert_eq!(up.direction(), TrendDirection::Up);
        assert_eq!(up.change_percent(), Some(10.0));

        let down = TrendResult {
            has_data: true,
            current: 40.0,
            previous: 50.0,
        };
        assert_eq!(down.direction(), TrendDirection::Down);

        assert_eq!(TrendResult::empty().direction(), TrendDirection::Flat);
        assert_eq!(TrendResult::empty().change_percent(), None);
    }

    #[test]
    fn test_change_percent_zero_previous() {
        let trend = TrendResult {
            has_data: true,
            current: 3.0,
            previous: 0.0,
        };
        assert_eq!(trend.change_percent(), None);
        assert_eq!(trend.direction(), TrendDirection::Up);
    }
}
