//! Fixed-schema observation records and their distance annotation.

use anniv_calendar::Anniversary;
use chrono::NaiveDate;
use tracing::debug;

use crate::error::SeriesError;

/// One daily measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    date: NaiveDate,
    value: f64,
}

impl Observation {
    /// Creates a new `Observation`.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the measured value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// An [`Observation`] with its calendar distance to the anniversary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedObservation {
    observation: Observation,
    signed_distance: i32,
}

impl AnnotatedObservation {
    /// Returns the underlying observation.
    pub fn observation(&self) -> Observation {
        self.observation
    }

    /// Returns the observation date.
    pub fn date(&self) -> NaiveDate {
        self.observation.date
    }

    /// Returns the measured value.
    pub fn value(&self) -> f64 {
        self.observation.value
    }

    /// Days from the nearest anniversary occurrence (negative = before).
    pub fn signed_distance(&self) -> i32 {
        self.signed_distance
    }

    /// Magnitude of [`Self::signed_distance`].
    pub fn abs_distance(&self) -> u32 {
        self.signed_distance.unsigned_abs()
    }
}

/// A series annotated against one anniversary, in input order.
#[derive(Debug, Clone)]
pub struct AnnotatedSeries {
    anniversary: Anniversary,
    rows: Vec<AnnotatedObservation>,
}

impl AnnotatedSeries {
    /// Returns the anniversary the distances refer to.
    pub fn anniversary(&self) -> Anniversary {
        self.anniversary
    }

    /// Returns the annotated rows.
    pub fn rows(&self) -> &[AnnotatedObservation] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the values in row order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(AnnotatedObservation::value).collect()
    }

    /// Returns the signed distances in row order, as `f64` covariates.
    pub fn signed_distances(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| f64::from(r.signed_distance))
            .collect()
    }

    /// Returns the absolute distances in row order, as `f64` covariates.
    pub fn abs_distances(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| f64::from(r.abs_distance()))
            .collect()
    }
}

/// Annotates every observation with its calendar distance to `anniversary`.
///
/// Row order is preserved so that partition indices refer back to
/// `observations`.
///
/// # Errors
///
/// - [`SeriesError::EmptyData`] if `observations` is empty.
/// - [`SeriesError::NonFiniteInput`] for a NaN or infinite value.
/// - [`SeriesError::Calendar`] if an occurrence falls outside the supported
///   date range.
pub fn annotate(
    observations: &[Observation],
    anniversary: Anniversary,
) -> Result<AnnotatedSeries, SeriesError> {
    if observations.is_empty() {
        return Err(SeriesError::EmptyData);
    }
    let rows = observations
        .iter()
        .enumerate()
        .map(|(row, &observation)| {
            if !observation.value.is_finite() {
                return Err(SeriesError::NonFiniteInput { row });
            }
            let signed_distance = anniversary.signed_distance(observation.date)?;
            Ok(AnnotatedObservation {
                observation,
                signed_distance,
            })
        })
        .collect::<Result<Vec<_>, SeriesError>>()?;

    debug!(rows = rows.len(), %anniversary, "annotated series");
    Ok(AnnotatedSeries { anniversary, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(y: i32, m: u32, d: u32, v: f64) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), v)
    }

    #[test]
    fn annotate_preserves_order_and_values() {
        let a = Anniversary::new(1, 1).unwrap();
        let input = [obs(2020, 1, 3, 5.0), obs(2019, 12, 31, 2.0), obs(2020, 1, 1, 9.0)];
        let series = annotate(&input, a).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), vec![5.0, 2.0, 9.0]);
        assert_eq!(series.signed_distances(), vec![2.0, -1.0, 0.0]);
        assert_eq!(series.abs_distances(), vec![2.0, 1.0, 0.0]);
        assert_eq!(series.rows()[1].observation(), input[1]);
    }

    #[test]
    fn annotate_rejects_empty() {
        let a = Anniversary::new(1, 1).unwrap();
        assert_eq!(annotate(&[], a).unwrap_err(), SeriesError::EmptyData);
    }

    #[test]
    fn annotate_rejects_nan_with_row() {
        let a = Anniversary::new(1, 1).unwrap();
        let input = [obs(2020, 1, 1, 1.0), obs(2020, 1, 2, f64::NAN)];
        assert_eq!(
            annotate(&input, a).unwrap_err(),
            SeriesError::NonFiniteInput { row: 1 }
        );
    }

    #[test]
    fn abs_distance_is_magnitude() {
        let a = Anniversary::new(6, 15).unwrap();
        let series = annotate(&[obs(2021, 6, 10, 0.0)], a).unwrap();
        let row = series.rows()[0];
        assert_eq!(row.signed_distance(), -5);
        assert_eq!(row.abs_distance(), 5);
    }
}
