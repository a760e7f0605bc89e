//! Output types for bootstrap and permutation inference.

/// Percentile-bootstrap interval for `mean(A) - mean(B)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapResult {
    observed: f64,
    lower: f64,
    upper: f64,
    confidence_level: f64,
    distribution: Vec<f64>,
}

impl BootstrapResult {
    pub(crate) fn new(
        observed: f64,
        lower: f64,
        upper: f64,
        confidence_level: f64,
        distribution: Vec<f64>,
    ) -> Self {
        Self {
            observed,
            lower,
            upper,
            confidence_level,
            distribution,
        }
    }

    /// Returns the observed difference of means.
    pub fn observed(&self) -> f64 {
        self.observed
    }

    /// Returns the lower interval bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper interval bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the confidence level the bounds were taken at.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns every resampled difference, in draw order.
    pub fn distribution(&self) -> &[f64] {
        &self.distribution
    }

    /// Returns `true` if zero lies strictly outside `[lower, upper]`.
    pub fn excludes_zero(&self) -> bool {
        self.lower > 0.0 || self.upper < 0.0
    }
}

/// Two-sided permutation test of `mean(A) - mean(B)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationResult {
    observed: f64,
    p_value: f64,
    null_distribution: Vec<f64>,
}

impl PermutationResult {
    pub(crate) fn new(observed: f64, p_value: f64, null_distribution: Vec<f64>) -> Self {
        Self {
            observed,
            p_value,
            null_distribution,
        }
    }

    /// Returns the observed difference of means.
    pub fn observed(&self) -> f64 {
        self.observed
    }

    /// Returns the two-sided p-value, in `[1/(N+1), 1]`.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Returns the relabeled differences, in draw order.
    pub fn null_distribution(&self) -> &[f64] {
        &self.null_distribution
    }

    /// Returns `true` if `p_value < alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_zero_on_either_side() {
        assert!(BootstrapResult::new(1.0, 0.5, 1.5, 0.95, vec![]).excludes_zero());
        assert!(BootstrapResult::new(-1.0, -1.5, -0.5, 0.95, vec![]).excludes_zero());
        assert!(!BootstrapResult::new(0.1, -0.2, 0.4, 0.95, vec![]).excludes_zero());
        assert!(!BootstrapResult::new(0.0, 0.0, 0.4, 0.95, vec![]).excludes_zero());
    }

    #[test]
    fn significance_is_strict() {
        let r = PermutationResult::new(2.0, 0.05, vec![0.0]);
        assert!(!r.is_significant(0.05));
        assert!(r.is_significant(0.051));
    }
}
