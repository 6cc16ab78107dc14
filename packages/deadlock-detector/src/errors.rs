//! Error types for deadlock-detector
//!
//! Provides unified error handling for callers that cross several slices
//! (the CLI, batch runs). Each slice keeps its own narrower error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::input::InputError;
use crate::features::safety_analysis::AnalyzerError;

/// Main error type for deadlock-detector operations
#[derive(Debug, Error)]
pub enum DetectorError {
    /// Snapshot rejected by the analyzer
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// Form input could not become a snapshot
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or report (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot document in YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DetectorError {
    /// True when the failure came from the analyzer's dimension check
    pub fn is_invalid_dimensions(&self) -> bool {
        matches!(self, DetectorError::Analyzer(AnalyzerError::InvalidDimensions(_)))
    }
}

/// Result type alias for deadlock-detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;
