use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ValidationFailure;
use crate::graph::PathBudget;

/// File name looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "waypost.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypostConfig {
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Cap on complete paths per enumeration. 0 means unbounded.
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,
    /// Cap on edges per path. Absent means unbounded.
    #[serde(default)]
    pub max_hops: Option<usize>,
    #[serde(default = "default_walking_speed")]
    pub walking_speed_kmh: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_paths: default_max_paths(),
            max_hops: None,
            walking_speed_kmh: default_walking_speed(),
        }
    }
}

impl RoutingConfig {
    #[must_use]
    pub fn budget(&self) -> PathBudget {
        PathBudget {
            max_paths: (self.max_paths > 0).then_some(self.max_paths),
            max_hops: self.max_hops,
        }
    }

    /// Reject settings no network could be built with.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::NonPositiveWalkingSpeed`] unless the
    /// walking speed is finite and positive.
    pub const fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        if self.walking_speed_kmh.is_finite() && self.walking_speed_kmh > 0.0 {
            Ok(())
        } else {
            Err(ValidationFailure::NonPositiveWalkingSpeed(self.walking_speed_kmh))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    #[serde(default = "default_radius")]
    pub radius_m: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            radius_m: default_radius(),
        }
    }
}

/// Load configuration from an explicit file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or
/// holds settings that fail [`RoutingConfig::validate`].
pub fn load_config(path: &Path) -> Result<WaypostConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = toml::from_str::<WaypostConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    config
        .routing
        .validate()
        .with_context(|| format!("Invalid [routing] in {}", path.display()))?;
    Ok(config)
}

/// Resolve configuration for a run.
///
/// Precedence: `explicit` path, then `waypost.toml` under `project_root`,
/// then the user config dir, then defaults. Only an explicit path is
/// required to exist.
///
/// # Errors
///
/// Returns an error if a chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>, project_root: &Path) -> Result<WaypostConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let candidates = [Some(project_root.join(PROJECT_CONFIG_FILE)), user_config_path()];
    for path in candidates.into_iter().flatten() {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            return load_config(&path);
        }
    }

    Ok(WaypostConfig::default())
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("waypost/config.toml"))
}

const fn default_max_paths() -> usize {
    10_000
}

const fn default_walking_speed() -> f64 {
    5.0
}

const fn default_radius() -> f64 {
    5000.0
}
