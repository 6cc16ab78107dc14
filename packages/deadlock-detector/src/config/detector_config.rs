//! Detector configuration types and YAML I/O

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

/// Current YAML schema version
pub const CONFIG_VERSION: u32 = 1;

/// Upper bound for generated process/resource counts
pub const MAX_DIMENSION: usize = 64;

/// Upper bound for generated unit counts
pub const MAX_UNITS: u32 = 1000;

// ═══════════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════════

/// Bounds for random scenario generation (all inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomScenarioConfig {
    pub min_processes: usize,
    pub max_processes: usize,
    pub min_resources: usize,
    pub max_resources: usize,
    /// Matrix and vector entries are drawn from `0..=max_units`
    pub max_units: u32,
}

impl Default for RandomScenarioConfig {
    fn default() -> Self {
        Self {
            min_processes: 3,
            max_processes: 5,
            min_resources: 2,
            max_resources: 4,
            max_units: 2,
        }
    }
}

impl Validatable for RandomScenarioConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_bounds(
            "random.min_processes",
            "random.max_processes",
            self.min_processes,
            self.max_processes,
        )?;
        check_bounds(
            "random.min_resources",
            "random.max_resources",
            self.min_resources,
            self.max_resources,
        )?;
        if self.max_units > MAX_UNITS {
            return Err(ConfigError::range_with_hint(
                "random.max_units",
                self.max_units,
                0,
                MAX_UNITS,
                "Unit counts above this only make the tables harder to read.",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "RandomScenarioConfig"
    }
}

fn check_bounds(min_field: &str, max_field: &str, min: usize, max: usize) -> ConfigResult<()> {
    if min == 0 || min > MAX_DIMENSION {
        return Err(ConfigError::range_with_hint(
            min_field,
            min,
            1,
            MAX_DIMENSION,
            "A system needs at least one process and one resource.",
        ));
    }
    if max < min || max > MAX_DIMENSION {
        return Err(ConfigError::range_with_hint(
            max_field,
            max,
            min,
            MAX_DIMENSION,
            format!("Must not be below {}.", min_field),
        ));
    }
    Ok(())
}

/// Prefixes used when labelling processes and resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
    pub process_prefix: String,
    pub resource_prefix: String,
}

impl LabelConfig {
    /// Label for process `i` (e.g. "P0")
    pub fn process(&self, i: usize) -> String {
        format!("{}{}", self.process_prefix, i)
    }

    /// Label for resource `j` (e.g. "R2")
    pub fn resource(&self, j: usize) -> String {
        format!("{}{}", self.resource_prefix, j)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            process_prefix: "P".to_string(),
            resource_prefix: "R".to_string(),
        }
    }
}

impl Validatable for LabelConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.process_prefix.trim().is_empty() {
            return Err(ConfigError::validation(
                "labels.process_prefix must not be empty",
            ));
        }
        if self.resource_prefix.trim().is_empty() {
            return Err(ConfigError::validation(
                "labels.resource_prefix must not be empty",
            ));
        }
        if self.process_prefix == self.resource_prefix {
            return Err(ConfigError::validation(
                "labels.process_prefix and labels.resource_prefix must differ",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "LabelConfig"
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the report renderer prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_trace: bool,
    pub show_graph: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_trace: true,
            show_graph: true,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DetectorConfig
// ═══════════════════════════════════════════════════════════════════════════

/// Complete detector configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorConfig {
    pub random: RandomScenarioConfig,
    pub labels: LabelConfig,
    pub output: OutputConfig,
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    random: Option<RandomScenarioConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    labels: Option<LabelConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output: Option<OutputConfig>,
}

impl DetectorConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("loading detector config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let config = Self {
            random: file.random.unwrap_or_default(),
            labels: file.labels.unwrap_or_default(),
            output: file.output.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (schema v1, every section written out)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(CONFIG_VERSION),
            random: Some(self.random.clone()),
            labels: Some(self.labels.clone()),
            output: Some(self.output.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Override the output format (CLI `--format`)
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

impl Validatable for DetectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.random.validate()?;
        self.labels.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "DetectorConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_random_bounds() {
        let config = DetectorConfig::default();
        assert_eq!(config.random.min_processes, 3);
        assert_eq!(config.random.max_processes, 5);
        assert_eq!(config.random.min_resources, 2);
        assert_eq!(config.random.max_resources, 4);
        assert_eq!(config.random.max_units, 2);
        assert_eq!(config.labels.process(3), "P3");
        assert_eq!(config.labels.resource(0), "R0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = DetectorConfig::default().with_format(OutputFormat::Json);
        config.random.max_units = 7;

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("format: json"));
        assert!(yaml.contains("max_units: 7"));

        let recovered = DetectorConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(recovered, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
version: 1
random:
  max_processes: 8
"#;
        let config = DetectorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.random.max_processes, 8);
        assert_eq!(config.random.min_processes, 3);
        assert_eq!(config.labels, LabelConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version: 1\nlabels:\n  process_prefix: T").unwrap();

        let config = DetectorConfig::from_yaml(file.path()).unwrap();
        assert_eq!(config.labels.process(1), "T1");
    }

    #[test]
    fn test_missing_version() {
        let err = DetectorConfig::from_yaml_str("random:\n  max_units: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_unsupported_version() {
        let err = DetectorConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion { found: 2, .. }
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DetectorConfig::from_yaml_str("version: 1\nrandom:\n  max_depth: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let yaml = "version: 1\nrandom:\n  min_resources: 4\n  max_resources: 2\n";
        let err = DetectorConfig::from_yaml_str(yaml).unwrap_err();
        match err {
            ConfigError::Range { field, .. } => assert_eq!(field, "random.max_resources"),
            other => panic!("expected range error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let config = RandomScenarioConfig {
            min_processes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_label_prefixes_must_differ() {
        let labels = LabelConfig {
            process_prefix: "X".to_string(),
            resource_prefix: "X".to_string(),
        };
        assert!(labels.validate().is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::UnknownFormat(_))
        ));
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
