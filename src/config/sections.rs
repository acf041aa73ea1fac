//! Configuration sections.
//!
//! These are the serde-backed construction-time settings; the runtime
//! equivalents ([`crate::pathfinding::SearchConfig`],
//! [`crate::pathfinding::OptimizerConfig`]) are built from them via
//! `from_settings`.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::Result;
use crate::pathfinding::Heuristic;

/// Grid settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSettings {
    /// World units per cell
    #[serde(default = "defaults::cell_size")]
    pub cell_size: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: defaults::cell_size(),
        }
    }
}

/// Search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Distance heuristic
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Enable 8-directional movement
    #[serde(default = "defaults::enabled")]
    pub allow_diagonal: bool,

    /// Reject diagonal moves that clip wall corners
    #[serde(default = "defaults::enabled")]
    pub prevent_corner_cutting: bool,

    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum nodes to expand before aborting
    #[serde(default = "defaults::node_budget")]
    pub node_budget: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            allow_diagonal: true,
            prevent_corner_cutting: true,
            diagonal_cost: defaults::diagonal_cost(),
            node_budget: defaults::node_budget(),
        }
    }
}

/// Path optimizer settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Greedy scan lookahead window, in points
    #[serde(default = "defaults::lookahead")]
    pub lookahead: usize,

    /// Minimum raw path length that triggers midpoint re-insertion
    #[serde(default = "defaults::midpoint_threshold")]
    pub midpoint_threshold: usize,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            lookahead: defaults::lookahead(),
            midpoint_threshold: defaults::midpoint_threshold(),
        }
    }
}

/// Full navigation configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavConfig {
    /// Grid settings (cell size)
    #[serde(default)]
    pub grid: GridSettings,
    /// Search settings
    #[serde(default)]
    pub search: SearchSettings,
    /// Optimizer settings
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

impl NavConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &std::path::Path) -> Result<()> {
        Ok(std::fs::write(path, self.to_yaml()?)?)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.grid.cell_size, 32);
        assert_eq!(config.search.heuristic, Heuristic::Octile);
        assert!(config.search.allow_diagonal);
        assert!(config.search.prevent_corner_cutting);
        assert_eq!(config.search.node_budget, 2_000);
        assert_eq!(config.optimizer.lookahead, 10);
        assert_eq!(config.optimizer.midpoint_threshold, 8);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = NavConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = NavConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.grid.cell_size, config.grid.cell_size);
        assert_eq!(parsed.search.heuristic, config.search.heuristic);
        assert_eq!(parsed.optimizer.lookahead, config.optimizer.lookahead);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = NavConfig::from_yaml(
            "search:\n  heuristic: manhattan\n  allow_diagonal: false\n",
        )
        .unwrap();
        assert_eq!(config.search.heuristic, Heuristic::Manhattan);
        assert!(!config.search.allow_diagonal);
        // Everything unspecified falls back to defaults
        assert!(config.search.prevent_corner_cutting);
        assert_eq!(config.grid.cell_size, 32);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(NavConfig::from_yaml("search: [not, a, map]").is_err());
    }
}
