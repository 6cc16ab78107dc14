//! Preset scenario catalog

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigResult};
use crate::features::safety_analysis::Snapshot;

/// Named snapshot source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// 3 processes × 3 resources, every process completes
    ///
    /// Safe sequence with index-order scanning: P0 → P2 → P1
    Safe,

    /// 3 processes × 3 resources, all three mutually blocked
    Dead1,

    /// 4 processes × 2 resources, cyclic wait over two resource types
    Dead2,

    /// Dimensions and entries drawn from the configured random bounds
    Random,
}

impl ScenarioKind {
    /// Parse scenario from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "safe" => Ok(Self::Safe),
            "dead1" => Ok(Self::Dead1),
            "dead2" => Ok(Self::Dead2),
            "random" => Ok(Self::Random),
            _ => Err(ConfigError::UnknownScenario(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Dead1 => "dead1",
            Self::Dead2 => "dead2",
            Self::Random => "random",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Self::Safe => "known-safe system, every process completes",
            Self::Dead1 => "three processes mutually blocked",
            Self::Dead2 => "cyclic wait between four processes over two resources",
            Self::Random => "randomly generated system within configured bounds",
        }
    }

    /// The fixed scenarios, in catalog order
    pub fn all_presets() -> [ScenarioKind; 3] {
        [Self::Safe, Self::Dead1, Self::Dead2]
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot for a fixed scenario; `None` for [`ScenarioKind::Random`]
pub fn preset(kind: ScenarioKind) -> Option<Snapshot> {
    match kind {
        ScenarioKind::Safe => Some(Snapshot::new(
            vec![vec![0, 1, 0], vec![2, 0, 0], vec![3, 0, 3]],
            vec![vec![0, 0, 0], vec![2, 1, 1], vec![0, 0, 0]],
            vec![0, 0, 1],
        )),
        ScenarioKind::Dead1 => Some(Snapshot::new(
            vec![vec![1, 0, 1], vec![0, 1, 0], vec![1, 0, 0]],
            vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]],
            vec![0, 0, 0],
        )),
        ScenarioKind::Dead2 => Some(Snapshot::new(
            vec![vec![1, 0], vec![0, 1], vec![1, 0], vec![0, 1]],
            vec![vec![0, 1], vec![1, 0], vec![0, 1], vec![1, 0]],
            vec![0, 0],
        )),
        ScenarioKind::Random => None,
    }
}
