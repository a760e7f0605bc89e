//! Error types for the anniv-resample crate.

/// Error type for all fallible operations in the anniv-resample crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when one of the two groups has no values.
    #[error("group {group} is empty")]
    EmptyGroup {
        /// Name of the empty group.
        group: &'static str,
    },

    /// Returned when input contains NaN or infinity.
    #[error(
        "non-finite value in {field}{}",
        .first_bad_index.map(|i| format!(" at index {i}")).unwrap_or_default()
    )]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        field: &'static str,
        /// Index of the first non-finite element, if known.
        first_bad_index: Option<usize>,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
