//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use deadlock_detector::config::Validatable;
///
/// fn load<C: Validatable>(config: C) -> Result<C, ConfigError> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DetectorConfig, RandomScenarioConfig};

    #[test]
    fn test_default_config_validates() {
        assert!(DetectorConfig::default().validate().is_ok());
        assert_eq!(DetectorConfig::default().config_name(), "DetectorConfig");
    }

    #[test]
    fn test_option_validation() {
        let none: Option<RandomScenarioConfig> = None;
        assert!(none.validate().is_ok());

        let invalid = Some(RandomScenarioConfig {
            max_processes: 1,
            ..Default::default()
        });
        assert!(invalid.validate().is_err());
    }
}
