use thiserror::Error;

/// Form input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Process or resource count missing, unparseable, or not positive
    #[error("{field} must be a positive number (got '{raw}'). Set the dimensions before running detection.")]
    DimensionsNotSet { field: String, raw: String },

    /// Process or resource count above the supported maximum
    #[error("{field} {value} exceeds the maximum of {max}")]
    DimensionTooLarge { field: String, value: u64, max: usize },
}
