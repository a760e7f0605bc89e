//! Pearson correlation between a series and a distance covariate.

use crate::descriptive::mean;

/// Pearson product-moment correlation of paired `x` and `y`.
///
/// Inputs are expected to be finite and of equal length; series values are
/// checked when they are annotated. Returns `None` for fewer than two pairs
/// or when either variable is constant, since r is undefined there.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    debug_assert_eq!(x.len(), y.len());
    if x.len() < 2 {
        return None;
    }
    let (mx, my) = (mean(x), mean(y));
    let (sxy, sxx, syy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (&xi, &yi)| {
        let (dx, dy) = (xi - mx, yi - my);
        (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
    });
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    // Rounding can push |r| a hair past 1.
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}
