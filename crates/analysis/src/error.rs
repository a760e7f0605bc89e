//! Analysis error types.

/// Errors that can occur while running or reporting an analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The analysis configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Message from the serializer.
        reason: String,
    },

    /// Annotation or partition error.
    #[error(transparent)]
    Series(#[from] anniv_series::SeriesError),

    /// Bootstrap or permutation error.
    #[error(transparent)]
    Resample(#[from] anniv_resample::ResampleError),

    /// Regression error.
    #[error(transparent)]
    Stats(#[from] anniv_stats::StatsError),
}
