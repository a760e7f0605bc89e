//! Percentile bootstrap of a difference in means.

use anniv_stats::{mean, quantiles};
use rand::Rng;
use tracing::debug;

use crate::chunked::run_chunked;
use crate::config::BootstrapConfig;
use crate::error::ResampleError;
use crate::result::BootstrapResult;

/// Bootstraps a confidence interval for `mean(a) - mean(b)`.
///
/// Each of the `n_resamples` iterations draws `a.len()` values from `a` and
/// `b.len()` values from `b`, both with replacement, and records the
/// difference of their means. The bounds are the type-7 percentiles at
/// `(1 - C)/2` and `1 - (1 - C)/2`.
///
/// This is the plain percentile interval, without bias correction. A group
/// of one value is accepted, but its resamples are constant and the
/// interval then reflects only the other group's variability.
///
/// The output is a pure function of the configuration, the inputs, and the
/// state of `rng`; see the crate docs for how iterations are parallelised.
///
/// # Errors
///
/// - [`ResampleError::InvalidConfig`] if `config` fails validation.
/// - [`ResampleError::EmptyGroup`] if either group is empty.
/// - [`ResampleError::NonFiniteInput`] if either group contains NaN or
///   infinity.
#[tracing::instrument(skip_all, fields(n_a = a.len(), n_b = b.len(), n = config.n_resamples()))]
pub fn bootstrap(
    a: &[f64],
    b: &[f64],
    config: &BootstrapConfig,
    rng: &mut impl Rng,
) -> Result<BootstrapResult, ResampleError> {
    config.validate()?;
    check_group(a, "a")?;
    check_group(b, "b")?;

    let observed = mean(a) - mean(b);
    let distribution = run_chunked(config.n_resamples(), rng, |chunk_rng, len| {
        (0..len)
            .map(|_| resampled_mean(a, chunk_rng) - resampled_mean(b, chunk_rng))
            .collect()
    });

    let (p_lo, p_hi) = config.tail_probabilities();
    let bounds = quantiles(&distribution, &[p_lo, p_hi])
        .expect("n_resamples >= 1 is validated");
    let (lower, upper) = (bounds[0], bounds[1]);

    debug!(observed, lower, upper, "bootstrap interval");
    Ok(BootstrapResult::new(
        observed,
        lower,
        upper,
        config.confidence_level(),
        distribution,
    ))
}

/// Mean of `data.len()` draws from `data` with replacement.
fn resampled_mean(data: &[f64], rng: &mut impl Rng) -> f64 {
    let n = data.len();
    let sum: f64 = (0..n).map(|_| data[rng.random_range(0..n)]).sum();
    sum / n as f64
}

pub(crate) fn check_group(values: &[f64], group: &'static str) -> Result<(), ResampleError> {
    if values.is_empty() {
        return Err(ResampleError::EmptyGroup { group });
    }
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(ResampleError::NonFiniteInput {
            field: group,
            first_bad_index: Some(idx),
        });
    }
    Ok(())
}
