//! Analysis configuration.

use anniv_calendar::Anniversary;
use anniv_resample::{BootstrapConfig, PermutationConfig, ResampleError};
use anniv_series::{SeriesError, WindowConfig};

use crate::error::AnalysisError;

/// Configuration for one anniversary-effect analysis.
///
/// # Example
///
/// ```
/// use anniv_analysis::AnalysisConfig;
/// use anniv_resample::BootstrapConfig;
/// use anniv_series::WindowConfig;
///
/// let config = AnalysisConfig::new("09-11".parse().unwrap())
///     .with_window(WindowConfig::new().with_radius(2))
///     .with_bootstrap(BootstrapConfig::new().with_n_resamples(5_000));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    anniversary: Anniversary,
    window: WindowConfig,
    bootstrap: BootstrapConfig,
    permutation: PermutationConfig,
    include_distributions: bool,
}

impl AnalysisConfig {
    /// Creates a configuration for `anniversary` with defaults elsewhere.
    ///
    /// Defaults: window radius 0 in calendar mode, 10 000 bootstrap
    /// resamples at 95%, 10 000 permutations, distributions left out of
    /// reports.
    pub fn new(anniversary: Anniversary) -> Self {
        Self {
            anniversary,
            window: WindowConfig::new(),
            bootstrap: BootstrapConfig::new(),
            permutation: PermutationConfig::new(),
            include_distributions: false,
        }
    }

    /// Set the anniversary window.
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Set the bootstrap configuration.
    pub fn with_bootstrap(mut self, bootstrap: BootstrapConfig) -> Self {
        self.bootstrap = bootstrap;
        self
    }

    /// Set the permutation configuration.
    pub fn with_permutation(mut self, permutation: PermutationConfig) -> Self {
        self.permutation = permutation;
        self
    }

    /// Include the bootstrap and null distributions in reports.
    pub fn with_include_distributions(mut self, include: bool) -> Self {
        self.include_distributions = include;
        self
    }

    /// Returns the anniversary.
    pub fn anniversary(&self) -> Anniversary {
        self.anniversary
    }

    /// Returns the window configuration.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// Returns the bootstrap configuration.
    pub fn bootstrap(&self) -> &BootstrapConfig {
        &self.bootstrap
    }

    /// Returns the permutation configuration.
    pub fn permutation(&self) -> &PermutationConfig {
        &self.permutation
    }

    /// Returns whether reports carry the full distributions.
    pub fn include_distributions(&self) -> bool {
        self.include_distributions
    }

    /// Validates every nested configuration.
    ///
    /// Nested `InvalidConfig` errors are lifted to
    /// [`AnalysisError::InvalidConfig`] with their reason unchanged.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.window.validate().map_err(|e| match e {
            SeriesError::InvalidConfig { reason } => AnalysisError::InvalidConfig { reason },
            other => other.into(),
        })?;
        self.bootstrap
            .validate()
            .and_then(|()| self.permutation.validate())
            .map_err(|e| match e {
                ResampleError::InvalidConfig { reason } => AnalysisError::InvalidConfig { reason },
                other => other.into(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anniv() -> Anniversary {
        Anniversary::new(5, 25).unwrap()
    }

    #[test]
    fn defaults() {
        let c = AnalysisConfig::new(anniv());
        assert_eq!(c.anniversary(), anniv());
        assert_eq!(c.window().radius(), 0);
        assert_eq!(c.bootstrap().n_resamples(), 10_000);
        assert_eq!(c.permutation().n_permutations(), 10_000);
        assert!(!c.include_distributions());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_reports_nested_problem() {
        let c = AnalysisConfig::new(anniv())
            .with_permutation(PermutationConfig::new().with_n_permutations(0));
        let err = c.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: n_permutations must be >= 1"
        );
    }

    #[test]
    fn validate_rejects_bad_window() {
        let c = AnalysisConfig::new(anniv()).with_window(WindowConfig::new().with_radius(400));
        assert!(matches!(
            c.validate(),
            Err(AnalysisError::InvalidConfig { .. })
        ));
    }
}
