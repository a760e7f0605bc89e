//! Day-of-year newtype over the 366-day reference calendar.
//!
//! The reference calendar is the leap year 2000, so February 29 has its own
//! slot (60) and every later date sits one ordinal after its position in a
//! common year.

use crate::error::CalendarError;

/// Day-of-year in the 366-day reference calendar (1..=366).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Length of the reference year.
pub const REFERENCE_YEAR_DAYS: u16 = 366;

/// Number of days in each month of the reference (leap) year.
///
/// Index 0 is unused, index 1 = January, ..., index 12 = December.
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts in the reference year.
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 61, 92, 122, 153, 183, 214, 245, 275, 306, 336];

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=366.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=REFERENCE_YEAR_DAYS).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Creates a new `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// given month of a leap year.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = max_day(month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(MONTH_START_DOY[month as usize] + u16::from(day) - 1))
    }

    /// Returns the inner day-of-year value (1..=366).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Unsigned circular distance to `other`, treating the year as 366 days.
    pub fn circular_distance(self, other: Doy) -> u16 {
        let diff = self.0.abs_diff(other.0);
        diff.min(REFERENCE_YEAR_DAYS - diff)
    }
}

/// Returns the number of days in `month` of the reference leap year.
pub(crate) fn max_day(month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert_eq!(Doy::new(1).unwrap().get(), 1);
        assert_eq!(Doy::new(366).unwrap().get(), 366);
    }

    #[test]
    fn new_invalid() {
        assert_eq!(
            Doy::new(0).unwrap_err(),
            CalendarError::InvalidDoy { doy: 0 }
        );
        assert_eq!(
            Doy::new(367).unwrap_err(),
            CalendarError::InvalidDoy { doy: 367 }
        );
    }

    #[test]
    fn from_month_day_valid() {
        assert_eq!(Doy::from_month_day(1, 1).unwrap().get(), 1);
        assert_eq!(Doy::from_month_day(2, 29).unwrap().get(), 60);
        assert_eq!(Doy::from_month_day(3, 1).unwrap().get(), 61);
        assert_eq!(Doy::from_month_day(12, 31).unwrap().get(), 366);
    }

    #[test]
    fn from_month_day_invalid() {
        assert_eq!(
            Doy::from_month_day(13, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            Doy::from_month_day(2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                max_day: 29,
            }
        );
        assert_eq!(
            Doy::from_month_day(6, 0).unwrap_err(),
            CalendarError::InvalidDay {
                day: 0,
                month: 6,
                max_day: 30,
            }
        );
    }

    #[test]
    fn circular_distance_wraps() {
        let jan1 = Doy::new(1).unwrap();
        let dec31 = Doy::new(366).unwrap();
        assert_eq!(jan1.circular_distance(dec31), 1);
        assert_eq!(dec31.circular_distance(jan1), 1);
        assert_eq!(jan1.circular_distance(jan1), 0);
        assert_eq!(jan1.circular_distance(Doy::new(184).unwrap()), 183);
    }

    #[test]
    fn table_integrity_days_per_month() {
        let total: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, REFERENCE_YEAR_DAYS);
    }

    #[test]
    fn table_integrity_month_start() {
        for m in 1..12usize {
            assert_eq!(
                MONTH_START_DOY[m] + u16::from(DAYS_PER_MONTH[m]),
                MONTH_START_DOY[m + 1],
                "MONTH_START_DOY mismatch at month {m}"
            );
        }
    }
}
