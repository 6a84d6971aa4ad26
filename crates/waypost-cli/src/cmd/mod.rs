//! Command handlers. Each takes the loaded [`Context`] and its parsed
//! arguments, and renders through [`crate::output`].

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;

use waypost_core::RoadNetwork;
use waypost_core::config::WaypostConfig;
use waypost_core::snapshot::save_json;

use crate::output::OutputMode;

pub mod itinerary;
pub mod listing;
pub mod nearby;
pub mod point;
pub mod points;
pub mod rank;
pub mod reroute;
pub mod road;
pub mod tree;
pub mod vertex;

/// Everything a command needs: the network, where it came from, and how to
/// behave and print.
pub struct Context {
    pub network: RoadNetwork,
    pub network_path: PathBuf,
    pub config: WaypostConfig,
    pub output: OutputMode,
}

impl Context {
    /// Write the network back to the file it was loaded from.
    pub fn save(&self) -> anyhow::Result<()> {
        save_json(&self.network_path, &self.network.snapshot())
            .with_context(|| format!("saving network to {}", self.network_path.display()))?;
        info!(path = %self.network_path.display(), "saved network");
        Ok(())
    }
}
