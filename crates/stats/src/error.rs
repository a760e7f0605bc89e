//! Error types for the anniv-stats crate.

/// Error type for all fallible operations in the anniv-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when paired arrays have different lengths.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched input.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when there are too few observations to estimate a model.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum required.
        min: usize,
    },

    /// Returned when input contains NaN or infinity.
    #[error("non-finite value in {field}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        field: &'static str,
    },

    /// Returned when the design matrix is singular or nearly so.
    #[error("numerical instability: {reason}")]
    NumericalInstability {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a reference distribution cannot be built.
    ///
    /// The message is a `String` because statrs errors do not implement
    /// `Clone`.
    #[error("distribution error: {reason}")]
    Distribution {
        /// Description of the underlying statrs failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_data() {
        assert_eq!(StatsError::EmptyData.to_string(), "input data is empty");
    }

    #[test]
    fn display_length_mismatch() {
        let e = StatsError::LengthMismatch {
            field: "y",
            expected: 10,
            got: 9,
        };
        assert_eq!(e.to_string(), "y: expected 10 elements, got 9");
    }

    #[test]
    fn display_insufficient_data() {
        let e = StatsError::InsufficientData { n: 2, min: 3 };
        assert_eq!(
            e.to_string(),
            "insufficient data: got 2 observations, need at least 3"
        );
    }

    #[test]
    fn display_numerical_instability() {
        let e = StatsError::NumericalInstability {
            reason: "column 1 is collinear".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "numerical instability: column 1 is collinear"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<StatsError>();
    }
}
