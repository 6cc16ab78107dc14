/// Safety analysis errors
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// Declared dimensions are zero or the matrices/vector do not match them
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl AnalyzerError {
    /// A declared count that must be at least one
    pub fn empty_dimension(what: &str) -> Self {
        AnalyzerError::InvalidDimensions(format!("{} must be at least 1", what))
    }

    /// A length that does not match its declared dimension
    pub fn mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        AnalyzerError::InvalidDimensions(format!(
            "{} has length {}, expected {}",
            what.into(),
            found,
            expected
        ))
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
