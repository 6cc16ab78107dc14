//! Detector configuration
//!
//! Versioned YAML configuration with defaults for every field:
//!
//! ```rust,ignore
//! use deadlock_detector::config::DetectorConfig;
//!
//! // Defaults (no file)
//! let config = DetectorConfig::default();
//!
//! // From YAML
//! let config = DetectorConfig::from_yaml("detector.yaml")?;
//! ```
//!
//! ```yaml
//! version: 1
//! random:
//!   min_processes: 3
//!   max_processes: 5
//! output:
//!   format: json
//! ```

pub mod detector_config;
pub mod error;
pub mod validation;

// Re-exports
pub use detector_config::{
    DetectorConfig, LabelConfig, OutputConfig, OutputFormat, RandomScenarioConfig,
    CONFIG_VERSION, MAX_DIMENSION, MAX_UNITS,
};
pub use error::{ConfigError, ConfigResult};
pub use validation::Validatable;
