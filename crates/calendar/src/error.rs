//! Error types for the anniv-calendar crate.

/// Error type for all fallible operations in the anniv-calendar crate.
///
/// Covers malformed anniversary specifications (month, day, or text form)
/// and dates whose neighbouring anniversary falls outside the representable
/// calendar range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=366.
    #[error("invalid day of year: {doy} (must be 1..=366)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an anniversary string is not in `MM-DD` or `MM/DD` form.
    #[error("invalid anniversary {input:?}: expected MM-DD (e.g. 05-25)")]
    Parse {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when an anniversary occurrence cannot be represented.
    #[error("anniversary occurrence in year {year} is out of the supported date range")]
    OutOfRange {
        /// The year whose occurrence could not be built.
        year: i32,
    },
}
