//! Configuration for bootstrap and permutation inference.

use crate::error::ResampleError;

/// Configuration for the percentile bootstrap.
///
/// # Example
///
/// ```
/// use anniv_resample::BootstrapConfig;
///
/// let config = BootstrapConfig::new()
///     .with_n_resamples(2_000)
///     .with_confidence_level(0.9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapConfig {
    n_resamples: usize,
    confidence_level: f64,
}

impl BootstrapConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `n_resamples = 10_000`, `confidence_level = 0.95`.
    pub fn new() -> Self {
        Self {
            n_resamples: 10_000,
            confidence_level: 0.95,
        }
    }

    /// Sets the number of bootstrap resamples.
    pub fn with_n_resamples(mut self, n: usize) -> Self {
        self.n_resamples = n;
        self
    }

    /// Sets the two-sided confidence level, in (0, 1).
    pub fn with_confidence_level(mut self, c: f64) -> Self {
        self.confidence_level = c;
        self
    }

    /// Returns the number of bootstrap resamples.
    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the `(lower, upper)` percentile probabilities.
    pub fn tail_probabilities(&self) -> (f64, f64) {
        let alpha = 1.0 - self.confidence_level;
        (alpha / 2.0, 1.0 - alpha / 2.0)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.n_resamples == 0 {
            return Err(ResampleError::InvalidConfig {
                reason: "n_resamples must be >= 1".to_string(),
            });
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ResampleError::InvalidConfig {
                reason: format!(
                    "confidence_level must be in (0, 1), got {}",
                    self.confidence_level
                ),
            });
        }
        Ok(())
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the two-sided permutation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationConfig {
    n_permutations: usize,
}

impl PermutationConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `n_permutations = 10_000`.
    pub fn new() -> Self {
        Self {
            n_permutations: 10_000,
        }
    }

    /// Sets the number of random relabelings.
    pub fn with_n_permutations(mut self, n: usize) -> Self {
        self.n_permutations = n;
        self
    }

    /// Returns the number of random relabelings.
    pub fn n_permutations(&self) -> usize {
        self.n_permutations
    }

    /// Returns the smallest attainable p-value, `1 / (N + 1)`.
    pub fn min_p_value(&self) -> f64 {
        1.0 / (self.n_permutations as f64 + 1.0)
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ResampleError> {
        if self.n_permutations == 0 {
            return Err(ResampleError::InvalidConfig {
                reason: "n_permutations must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PermutationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bootstrap_defaults() {
        let c = BootstrapConfig::new();
        assert_eq!(c.n_resamples(), 10_000);
        assert_relative_eq!(c.confidence_level(), 0.95);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn bootstrap_tail_probabilities() {
        let (lo, hi) = BootstrapConfig::new().tail_probabilities();
        assert_relative_eq!(lo, 0.025, epsilon = 1e-12);
        assert_relative_eq!(hi, 0.975, epsilon = 1e-12);
    }

    #[test]
    fn bootstrap_rejects_zero_resamples() {
        let c = BootstrapConfig::new().with_n_resamples(0);
        assert!(matches!(
            c.validate(),
            Err(ResampleError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn bootstrap_rejects_bad_confidence() {
        for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = BootstrapConfig::new().with_confidence_level(c);
            assert!(config.validate().is_err(), "accepted confidence {c}");
        }
    }

    #[test]
    fn permutation_defaults_and_floor() {
        let c = PermutationConfig::new().with_n_permutations(999);
        assert_eq!(c.n_permutations(), 999);
        assert_relative_eq!(c.min_p_value(), 0.001);
        assert!(PermutationConfig::default().validate().is_ok());
    }

    #[test]
    fn permutation_rejects_zero() {
        assert!(
            PermutationConfig::new()
                .with_n_permutations(0)
                .validate()
                .is_err()
        );
    }
}
