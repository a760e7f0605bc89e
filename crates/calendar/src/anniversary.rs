//! Year-agnostic anniversary reference and its distance arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::doy::{Doy, max_day};
use crate::error::CalendarError;

/// Largest same-year offset (in days) kept before re-anchoring to the
/// neighbouring year's occurrence.
pub const HALF_YEAR: i32 = 182;

/// How the distance between a date and an anniversary is measured.
///
/// | Mode | Formula | Signed |
/// |------|---------|--------|
/// | `Calendar` | days to the nearest real occurrence | yes |
/// | `DayOfYear` | `min(d, 366 - d)` with `d = |ordinal - target|` | no |
///
/// `Calendar` is canonical. `DayOfYear` compares ordinals against the
/// 366-day reference calendar, so in common years every date after
/// February 28 sits one day earlier than in leap years and windows that
/// straddle late February drift by a day. It is only meaningful for window
/// membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMode {
    /// Exact days to the nearest dated occurrence.
    #[default]
    Calendar,
    /// Wrapped day-of-year difference in a 366-day year.
    DayOfYear,
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMode::Calendar => f.write_str("calendar"),
            DistanceMode::DayOfYear => f.write_str("day-of-year"),
        }
    }
}

/// A recurring calendar date (month and day, no year).
///
/// February 29 is a valid anniversary. In common years its occurrence is
/// March 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anniversary {
    month: u8,
    day: u8,
}

impl Anniversary {
    /// Creates a new `Anniversary`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the pair does not exist in a leap year.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = max_day(month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if `date` falls on this month/day.
    pub fn matches(self, date: NaiveDate) -> bool {
        date.month() == u32::from(self.month) && date.day() == u32::from(self.day)
    }

    /// Returns the position of this anniversary in the 366-day reference year.
    pub fn doy(self) -> Doy {
        Doy::from_month_day(self.month, self.day)
            .expect("Anniversary is validated on construction")
    }

    /// Returns the dated occurrence of this anniversary in `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the date cannot be represented.
    pub fn occurrence(self, year: i32) -> Result<NaiveDate, CalendarError> {
        let (month, day) = (u32::from(self.month), u32::from(self.day));
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| {
                if month == 2 && day == 29 {
                    NaiveDate::from_ymd_opt(year, 3, 1)
                } else {
                    None
                }
            })
            .ok_or(CalendarError::OutOfRange { year })
    }

    /// Signed days from the nearest occurrence of this anniversary to `date`.
    ///
    /// Negative values fall before the occurrence, positive values after it.
    /// The same-year occurrence is kept while the offset is within
    /// [`HALF_YEAR`]; beyond that the following (offset > 182) or previous
    /// (offset < -182) year's occurrence is used, so `+183` resolves forward.
    /// The result always lies in `-183..=183`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] at the edges of the supported
    /// date range.
    pub fn signed_distance(self, date: NaiveDate) -> Result<i32, CalendarError> {
        let year = date.year();
        let diff = days_between(date, self.occurrence(year)?);
        if diff > HALF_YEAR {
            Ok(days_between(date, self.occurrence(year + 1)?))
        } else if diff < -HALF_YEAR {
            Ok(days_between(date, self.occurrence(year - 1)?))
        } else {
            Ok(diff)
        }
    }

    /// Unsigned circular day-of-year distance to `date` (see [`DistanceMode`]).
    pub fn doy_distance(self, date: NaiveDate) -> u32 {
        let ordinal = Doy::new(date.ordinal() as u16).expect("chrono ordinals are 1..=366");
        u32::from(ordinal.circular_distance(self.doy()))
    }

    /// Unsigned distance to `date` under the given `mode`.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarError::OutOfRange`] from [`Self::signed_distance`].
    pub fn distance(self, date: NaiveDate, mode: DistanceMode) -> Result<u32, CalendarError> {
        match mode {
            DistanceMode::Calendar => Ok(self.signed_distance(date)?.unsigned_abs()),
            DistanceMode::DayOfYear => Ok(self.doy_distance(date)),
        }
    }
}

fn days_between(date: NaiveDate, anchor: NaiveDate) -> i32 {
    date.signed_duration_since(anchor).num_days() as i32
}

impl fmt::Display for Anniversary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for Anniversary {
    type Err = CalendarError;

    /// Parses `MM-DD` or `MM/DD` (single-digit fields are accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse {
            input: s.to_string(),
        };
        let normalized = s.trim().replace('/', "-");
        let (month, day) = normalized.split_once('-').ok_or_else(parse_err)?;
        let month: u8 = month.trim().parse().map_err(|_| parse_err())?;
        let day: u8 = day.trim().parse().map_err(|_| parse_err())?;
        Self::new(month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_rejects_bad_pairs() {
        assert_eq!(
            Anniversary::new(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Anniversary::new(4, 31).unwrap_err(),
            CalendarError::InvalidDay {
                day: 31,
                month: 4,
                max_day: 30,
            }
        );
        assert!(Anniversary::new(2, 29).is_ok());
    }

    #[test]
    fn parse_dash_and_slash() {
        let a: Anniversary = "05-25".parse().unwrap();
        assert_eq!((a.month(), a.day()), (5, 25));
        let b: Anniversary = "01/06".parse().unwrap();
        assert_eq!((b.month(), b.day()), (1, 6));
        let c: Anniversary = " 9-1 ".parse().unwrap();
        assert_eq!((c.month(), c.day()), (9, 1));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "0525".parse::<Anniversary>(),
            Err(CalendarError::Parse { .. })
        ));
        assert!(matches!(
            "May-25".parse::<Anniversary>(),
            Err(CalendarError::Parse { .. })
        ));
        assert!(matches!(
            "13-01".parse::<Anniversary>(),
            Err(CalendarError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(Anniversary::new(1, 6).unwrap().to_string(), "01-06");
    }

    #[test]
    fn occurrence_feb_29_falls_back_to_mar_1() {
        let a = Anniversary::new(2, 29).unwrap();
        assert_eq!(a.occurrence(2024).unwrap(), date(2024, 2, 29));
        assert_eq!(a.occurrence(2023).unwrap(), date(2023, 3, 1));
    }

    #[test]
    fn signed_distance_on_anniversary_is_zero() {
        let a = Anniversary::new(9, 11).unwrap();
        assert_eq!(a.signed_distance(date(2015, 9, 11)).unwrap(), 0);
    }

    #[test]
    fn signed_distance_sign_convention() {
        let a = Anniversary::new(9, 11).unwrap();
        assert_eq!(a.signed_distance(date(2015, 9, 8)).unwrap(), -3);
        assert_eq!(a.signed_distance(date(2015, 9, 14)).unwrap(), 3);
    }

    #[test]
    fn signed_distance_wraps_year_boundary() {
        let new_year = Anniversary::new(1, 1).unwrap();
        assert_eq!(new_year.signed_distance(date(2019, 12, 31)).unwrap(), -1);

        let dec31 = Anniversary::new(12, 31).unwrap();
        assert_eq!(dec31.signed_distance(date(2020, 1, 2)).unwrap(), 2);
    }

    #[test]
    fn signed_distance_tie_break_at_183() {
        // 2021 is a common year: Jan 1 + 183 days = Jul 3.
        let a = Anniversary::new(1, 1).unwrap();
        assert_eq!(a.signed_distance(date(2021, 7, 2)).unwrap(), 182);
        assert_eq!(a.signed_distance(date(2021, 7, 3)).unwrap(), -182);
        // 2020 is a leap year: Jul 2 is 183 days after Jan 1, 183 before next Jan 1.
        assert_eq!(a.signed_distance(date(2020, 7, 2)).unwrap(), -183);
    }

    #[test]
    fn doy_distance_wraps() {
        let a = Anniversary::new(1, 1).unwrap();
        assert_eq!(a.doy_distance(date(2020, 12, 31)), 1);
        // Common-year Dec 31 has ordinal 365, two slots from reference Jan 1.
        assert_eq!(a.doy_distance(date(2019, 12, 31)), 2);
        assert_eq!(a.doy_distance(date(2020, 1, 4)), 3);
    }

    #[test]
    fn doy_distance_drifts_after_february_in_common_years() {
        let a = Anniversary::new(3, 10).unwrap();
        assert_eq!(a.doy_distance(date(2020, 3, 10)), 0);
        // Common-year Mar 10 has ordinal 69, reference Mar 10 is 70.
        assert_eq!(a.doy_distance(date(2021, 3, 10)), 1);
        assert_eq!(a.distance(date(2021, 3, 10), DistanceMode::Calendar).unwrap(), 0);
    }

    #[test]
    fn distance_dispatches_on_mode() {
        let a = Anniversary::new(7, 4).unwrap();
        let d = date(2020, 7, 1);
        assert_eq!(a.distance(d, DistanceMode::Calendar).unwrap(), 3);
        assert_eq!(a.distance(d, DistanceMode::DayOfYear).unwrap(), 3);
        let common = date(2018, 7, 1);
        assert_eq!(a.distance(common, DistanceMode::Calendar).unwrap(), 3);
        assert_eq!(a.distance(common, DistanceMode::DayOfYear).unwrap(), 4);
    }

    #[test]
    fn distance_mode_default_and_display() {
        assert_eq!(DistanceMode::default(), DistanceMode::Calendar);
        assert_eq!(DistanceMode::DayOfYear.to_string(), "day-of-year");
    }

    #[test]
    fn matches_month_day() {
        let a = Anniversary::new(4, 15).unwrap();
        assert!(a.matches(date(2013, 4, 15)));
        assert!(!a.matches(date(2013, 4, 16)));
    }
}
