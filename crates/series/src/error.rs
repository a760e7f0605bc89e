//! Error types for the anniv-series crate.

use std::fmt;

/// The two sides of a window partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionSide {
    /// Observations within the window radius of the anniversary.
    InWindow,
    /// Observations outside the window.
    Baseline,
}

impl fmt::Display for PartitionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionSide::InWindow => f.write_str("anniversary window"),
            PartitionSide::Baseline => f.write_str("baseline"),
        }
    }
}

/// Error type for all fallible operations in the anniv-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the observation sequence is empty.
    #[error("observation series is empty")]
    EmptyData,

    /// Returned when an observation value is NaN or infinite.
    #[error("non-finite value at row {row}")]
    NonFiniteInput {
        /// Zero-based position of the offending observation.
        row: usize,
    },

    /// Returned when a window configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when one side of a partition has no members.
    #[error("{side} partition is empty (radius {radius})")]
    EmptyPartition {
        /// The side without members.
        side: PartitionSide,
        /// The window radius that produced it.
        radius: u32,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] anniv_calendar::CalendarError),
}
