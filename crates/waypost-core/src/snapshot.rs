//! Export and re-ingestion of a whole network.
//!
//! A [`NetworkSnapshot`] uses the same [`RoadRecord`] shape roads are
//! ingested from. [`RoadNetwork::from_snapshot`] replays it through the
//! normal validation, so exporting and re-importing reproduces the same
//! vertices, roads, weights and timings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::NetworkError;
use crate::model::{PointOfInterest, RoadRecord};
use crate::network::RoadNetwork;

/// Serializable contents of a [`RoadNetwork`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub points: Vec<PointOfInterest>,
    /// Names of the points that are on the road network.
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub roads: Vec<RoadRecord>,
}

impl RoadNetwork {
    /// Export points, network vertices and roads.
    #[must_use]
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            points: self.points().cloned().collect(),
            vertices: self
                .graph()
                .vertices()
                .into_iter()
                .map(str::to_string)
                .collect(),
            roads: self.roads().map(|road| road.record.clone()).collect(),
        }
    }

    /// Rebuild a network, validating every point, vertex and road.
    ///
    /// # Errors
    ///
    /// Returns the first entity that fails validation, or a validation
    /// failure if `walking_speed_kmh` is not a finite positive number.
    pub fn from_snapshot(snapshot: NetworkSnapshot, walking_speed_kmh: f64) -> Result<Self, NetworkError> {
        let mut network = Self::with_walking_speed(walking_speed_kmh)?;
        for point in snapshot.points {
            network.add_point(point)?;
        }
        for vertex in &snapshot.vertices {
            network.add_vertex(vertex)?;
        }
        for road in snapshot.roads {
            network.add_road(road)?;
        }
        info!(
            points = network.points().count(),
            vertices = network.graph().node_count(),
            roads = network.graph().edge_count(),
            "loaded network"
        );
        Ok(network)
    }
}

/// Read a snapshot from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_json(path: &Path) -> Result<NetworkSnapshot> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a snapshot to a JSON file, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_json(path: &Path, snapshot: &NetworkSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize network")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
