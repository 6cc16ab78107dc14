/*
 * Deadlock Detector - Work/Finish Safety Analysis
 *
 * Feature-First Hexagonal Architecture:
 * - features/safety_analysis : Snapshot → AnalysisResult (pure, synchronous)
 * - features/input           : Lenient form-input normalization
 * - features/scenarios       : Preset catalog + random generator
 * - features/report          : Status, load metric, textual graph view, rendering
 * - config/                  : Versioned YAML configuration
 *
 * The analyzer holds no state between calls. Everything stateful
 * (argument parsing, log subscriber, output) lives in the CLI binary.
 */

#![allow(clippy::needless_range_loop)] // Range loop for matrix indexing
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod errors;
pub mod features;

pub use config::{ConfigError, ConfigResult, DetectorConfig};
pub use errors::{DetectorError, Result};
pub use features::input::{FormInput, InputError};
pub use features::report::{DetectionReport, DetectionStatus};
pub use features::safety_analysis::{
    analyze, AnalysisResult, AnalyzerError, DeadlockDetectionUseCase, SafetyAnalyzerPort,
    Snapshot, TraceStep, WorkFinishAnalyzer,
};
pub use features::scenarios::{RandomScenarioGenerator, ScenarioKind};
