//! Data source layer (JSON snapshot directory).

pub mod store;

pub use store::{HealthStore, MetricKind};

/// File layout of the data directory.
pub mod files {
    /// One `<metric>.json` file per dashboard metric
    pub const METRICS_DIR: &str = "metrics";
    /// One `<marker>.json` file per blood marker
    pub const BLOOD_DIR: &str = "blood";
    /// All workout events
    pub const WORKOUTS_FILE: &str = "workouts.json";
}
