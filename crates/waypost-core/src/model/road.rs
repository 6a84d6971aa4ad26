//! Roads: the ingestion record and the stored road with derived timings.

use serde::{Deserialize, Serialize};

/// One road as it appears in a network file.
///
/// This is both the ingestion shape and the export shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub start: String,
    pub end: String,
    pub distance_km: f64,
    pub min_speed_kmh: f64,
    pub max_speed_kmh: f64,
}

/// A validated road with travel times fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Road {
    #[serde(flatten)]
    pub record: RoadRecord,
    /// Hours to walk the road at the network walking speed.
    pub walk_time_hours: f64,
    /// Hours to drive the road at the mean of its min and max speed.
    pub drive_time_hours: f64,
}

impl Road {
    /// Derive timings for an already validated record.
    #[must_use]
    pub fn new(record: RoadRecord, walking_speed_kmh: f64) -> Self {
        let walk_time_hours = record.distance_km / walking_speed_kmh;
        let drive_time_hours =
            record.distance_km / ((record.min_speed_kmh + record.max_speed_kmh) / 2.0);
        Self {
            record,
            walk_time_hours,
            drive_time_hours,
        }
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.record.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.record.end
    }

    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.record.distance_km
    }
}

/// Render a duration in hours as `"{h}h {m}m"`, minutes rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
