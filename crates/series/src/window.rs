//! Window configuration and the in-window / baseline partition.

use anniv_calendar::{DistanceMode, HALF_YEAR};
use tracing::debug;

use crate::error::{PartitionSide, SeriesError};
use crate::observation::AnnotatedSeries;

/// Largest radius that can leave a non-empty baseline.
const MAX_RADIUS: u32 = HALF_YEAR as u32;

/// Anniversary window: a half-width in days and how distance is measured.
///
/// # Example
///
/// ```
/// use anniv_calendar::DistanceMode;
/// use anniv_series::WindowConfig;
///
/// let window = WindowConfig::new()
///     .with_radius(3)
///     .with_mode(DistanceMode::DayOfYear);
/// assert!(window.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    radius: u32,
    mode: DistanceMode,
}

impl WindowConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `radius = 0` (the anniversary itself only),
    /// `mode = Calendar`.
    pub fn new() -> Self {
        Self {
            radius: 0,
            mode: DistanceMode::Calendar,
        }
    }

    /// Sets the window half-width in days.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the distance used for window membership.
    pub fn with_mode(mut self, mode: DistanceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the window half-width in days.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Returns the distance mode.
    pub fn mode(&self) -> DistanceMode {
        self.mode
    }

    /// Validates this configuration.
    ///
    /// A radius of 183 or more places every date inside the window.
    pub fn validate(&self) -> Result<(), SeriesError> {
        if self.radius > MAX_RADIUS {
            return Err(SeriesError::InvalidConfig {
                reason: format!(
                    "radius must be <= {MAX_RADIUS} days, got {}",
                    self.radius
                ),
            });
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Disjoint split of a series into anniversary-window and baseline values.
///
/// Every source row lands on exactly one side; the index vectors record
/// which rows, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    in_window: Vec<f64>,
    baseline: Vec<f64>,
    in_window_indices: Vec<usize>,
    baseline_indices: Vec<usize>,
    window: WindowConfig,
}

impl Partition {
    /// Returns the values inside the window.
    pub fn in_window(&self) -> &[f64] {
        &self.in_window
    }

    /// Returns the values outside the window.
    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    /// Returns the source rows of [`Self::in_window`].
    pub fn in_window_indices(&self) -> &[usize] {
        &self.in_window_indices
    }

    /// Returns the source rows of [`Self::baseline`].
    pub fn baseline_indices(&self) -> &[usize] {
        &self.baseline_indices
    }

    /// Returns the window that produced this partition.
    pub fn window(&self) -> WindowConfig {
        self.window
    }

    /// Returns the total number of rows across both sides.
    pub fn total(&self) -> usize {
        self.in_window.len() + self.baseline.len()
    }

    /// Concatenates both sides, window values first.
    pub fn pooled(&self) -> Vec<f64> {
        let mut pooled = Vec::with_capacity(self.total());
        pooled.extend_from_slice(&self.in_window);
        pooled.extend_from_slice(&self.baseline);
        pooled
    }
}

/// Splits `series` into rows with `distance <= radius` and the rest.
///
/// The boundary is inclusive. In [`DistanceMode::Calendar`] the distance is
/// the row's annotated calendar distance; in [`DistanceMode::DayOfYear`] it
/// is recomputed from the row's ordinal.
///
/// # Errors
///
/// - [`SeriesError::InvalidConfig`] if `window` fails validation.
/// - [`SeriesError::EmptyPartition`] if either side has no rows.
pub fn partition(series: &AnnotatedSeries, window: &WindowConfig) -> Result<Partition, SeriesError> {
    window.validate()?;
    let anniversary = series.anniversary();
    let mut out = Partition {
        in_window: Vec::new(),
        baseline: Vec::new(),
        in_window_indices: Vec::new(),
        baseline_indices: Vec::new(),
        window: *window,
    };

    for (i, row) in series.rows().iter().enumerate() {
        let distance = match window.mode() {
            DistanceMode::Calendar => row.abs_distance(),
            DistanceMode::DayOfYear => anniversary.doy_distance(row.date()),
        };
        if distance <= window.radius() {
            out.in_window.push(row.value());
            out.in_window_indices.push(i);
        } else {
            out.baseline.push(row.value());
            out.baseline_indices.push(i);
        }
    }

    debug!(
        radius = window.radius(),
        mode = %window.mode(),
        in_window = out.in_window.len(),
        baseline = out.baseline.len(),
        "partitioned series"
    );

    if out.in_window.is_empty() {
        return Err(SeriesError::EmptyPartition {
            side: PartitionSide::InWindow,
            radius: window.radius(),
        });
    }
    if out.baseline.is_empty() {
        return Err(SeriesError::EmptyPartition {
            side: PartitionSide::Baseline,
            radius: window.radius(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{Observation, annotate};
    use anniv_calendar::Anniversary;
    use chrono::NaiveDate;

    fn daily(start: NaiveDate, values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Observation::new(start + chrono::Days::new(i as u64), v))
            .collect()
    }

    #[test]
    fn defaults() {
        let w = WindowConfig::default();
        assert_eq!(w.radius(), 0);
        assert_eq!(w.mode(), DistanceMode::Calendar);
    }

    #[test]
    fn validate_rejects_oversized_radius() {
        assert!(WindowConfig::new().with_radius(182).validate().is_ok());
        assert!(matches!(
            WindowConfig::new().with_radius(183).validate(),
            Err(SeriesError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn boundary_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let obs = daily(start, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let series = annotate(&obs, Anniversary::new(3, 4).unwrap()).unwrap();
        let p = partition(&series, &WindowConfig::new().with_radius(2)).unwrap();
        assert_eq!(p.in_window(), &[2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(p.in_window_indices(), &[1, 2, 3, 4, 5]);
        assert_eq!(p.baseline(), &[1.0, 7.0]);
        assert_eq!(p.baseline_indices(), &[0, 6]);
    }

    #[test]
    fn empty_window_side_is_named() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let obs = daily(start, &[1.0, 2.0]);
        let series = annotate(&obs, Anniversary::new(9, 1).unwrap()).unwrap();
        assert_eq!(
            partition(&series, &WindowConfig::new()).unwrap_err(),
            SeriesError::EmptyPartition {
                side: PartitionSide::InWindow,
                radius: 0,
            }
        );
    }

    #[test]
    fn empty_baseline_side_is_named() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 3).unwrap();
        let obs = daily(start, &[1.0, 2.0, 3.0]);
        let series = annotate(&obs, Anniversary::new(3, 4).unwrap()).unwrap();
        let err = partition(&series, &WindowConfig::new().with_radius(1)).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::EmptyPartition {
                side: PartitionSide::Baseline,
                ..
            }
        ));
    }

    #[test]
    fn day_of_year_mode_shifts_in_common_years() {
        // Common year: Mar 9 has ordinal 68, reference Mar 10 is 70.
        let start = NaiveDate::from_ymd_opt(2021, 3, 8).unwrap();
        let obs = daily(start, &[1.0, 2.0, 3.0, 4.0]);
        let series = annotate(&obs, Anniversary::new(3, 10).unwrap()).unwrap();

        let calendar = partition(&series, &WindowConfig::new().with_radius(1)).unwrap();
        assert_eq!(calendar.in_window_indices(), &[1, 2, 3]);

        let doy = WindowConfig::new()
            .with_radius(1)
            .with_mode(DistanceMode::DayOfYear);
        let shifted = partition(&series, &doy).unwrap();
        assert_eq!(shifted.in_window_indices(), &[2, 3]);
    }

    #[test]
    fn pooled_puts_window_first() {
        let start = NaiveDate::from_ymd_opt(2021, 12, 30).unwrap();
        let obs = daily(start, &[1.0, 2.0, 3.0, 4.0]);
        let series = annotate(&obs, Anniversary::new(1, 1).unwrap()).unwrap();
        let p = partition(&series, &WindowConfig::new()).unwrap();
        assert_eq!(p.pooled(), vec![3.0, 1.0, 2.0, 4.0]);
        assert_eq!(p.total(), 4);
    }
}
