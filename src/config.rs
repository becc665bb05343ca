//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

use crate::models::WeekStart;
use crate::services::aggregator::DEFAULT_RAW_POINT_THRESHOLD;

/// Longest heatmap lookback, in years.
pub const MAX_HEATMAP_YEARS: u32 = 5;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Snapshot directory with metric, blood marker and workout files
    pub data_dir: PathBuf,
    /// First day of the week for weekly buckets and week counting
    pub week_start: WeekStart,
    /// Windowed series shorter than this are charted as raw points
    pub raw_point_threshold: usize,
    /// Default lookback of the workout heatmap
    pub heatmap_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            data_dir: PathBuf::from("data"),
            week_start: WeekStart::Monday,
            raw_point_threshold: DEFAULT_RAW_POINT_THRESHOLD,
            heatmap_years: 1,
        }
    }
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let week_start = match env::var("WEEK_START") {
            Ok(raw) => WeekStart::parse(&raw).ok_or(ConfigError::Invalid {
                name: "WEEK_START",
                value: raw,
            })?,
            Err(_) => defaults.week_start,
        };

        let heatmap_years = parse_or("HEATMAP_YEARS", defaults.heatmap_years)?;
        if heatmap_years == 0 || heatmap_years > MAX_HEATMAP_YEARS {
            return Err(ConfigError::Invalid {
                name: "HEATMAP_YEARS",
                value: heatmap_years.to_string(),
            });
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            week_start,
            raw_point_threshold: parse_or("RAW_POINT_THRESHOLD", defaults.raw_point_threshold)?,
            heatmap_years,
        })
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
