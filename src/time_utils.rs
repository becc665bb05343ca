// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar day as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

/// Calendar day of an ISO 8601 timestamp, taken verbatim from its date
/// prefix. No timezone conversion is applied.
///
/// "2024-01-15T23:30:00+09:00" -> 2024-01-15
pub fn date_prefix(timestamp: &str) -> Option<NaiveDate> {
    timestamp.get(..10).and_then(parse_iso_date)
}
