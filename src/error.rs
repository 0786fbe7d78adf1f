//! Error types for sdt-roc
//!
//! Degenerate rates are not errors: they surface as 0.0 rates or as
//! non-finite d'/criterion values. Only structural problems with an
//! experiment are reported here.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// sdt-roc error types
#[derive(Error, Debug)]
pub enum Error {
    /// Operation needs at least one condition but the experiment is empty
    #[error("No conditions in experiment\nAdd at least one measurement with add_condition() before querying")]
    EmptyInput,

    /// Too few ROC points for trapezoidal integration
    #[error("Not enough points to compute AUC: need at least {required}, found {found}")]
    InsufficientData {
        /// Minimum number of points the operation needs
        required: usize,
        /// Number of points actually available
        found: usize,
    },

    /// JSON export failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let error = Error::InsufficientData {
            required: 2,
            found: 1,
        };
        let msg = error.to_string();
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("found 1"));
    }
}
