//! Two-sided permutation test of a difference in means.

use anniv_stats::mean;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::bootstrap::check_group;
use crate::chunked::run_chunked;
use crate::config::PermutationConfig;
use crate::error::ResampleError;
use crate::result::PermutationResult;

/// Relative tolerance on `|null| >= |observed|`.
const TIE_REL_TOL: f64 = 1e-12;

/// Tests `mean(a) - mean(b)` against random relabelings of the pooled values.
///
/// Convenience wrapper over [`permutation_test_pooled`] that pools `a`
/// followed by `b` and computes the observed difference.
///
/// # Errors
///
/// See [`permutation_test_pooled`].
pub fn permutation_test(
    a: &[f64],
    b: &[f64],
    config: &PermutationConfig,
    rng: &mut impl Rng,
) -> Result<PermutationResult, ResampleError> {
    check_group(a, "a")?;
    check_group(b, "b")?;
    let mut pooled = Vec::with_capacity(a.len() + b.len());
    pooled.extend_from_slice(a);
    pooled.extend_from_slice(b);
    permutation_test_pooled(&pooled, a.len(), mean(a) - mean(b), config, rng)
}

/// Tests an observed difference against random relabelings of `pooled`.
///
/// Each iteration draws a uniformly random relabeling of `pooled` (without
/// replacement), takes `n_a` values as group A and the remaining
/// `pooled.len() - n_a` as group B, and records `mean(A') - mean(B')`.
///
/// The p-value is `(#{|null| >= |observed|} + 1) / (N + 1)`, so it lies in
/// `[1/(N+1), 1]` and never reports zero. The comparison allows a relative
/// slack of `1e-12 * max(1, |observed|)` so relabelings that reproduce the
/// observed split count as ties despite summation order.
///
/// # Errors
///
/// - [`ResampleError::InvalidConfig`] if `config` fails validation.
/// - [`ResampleError::EmptyGroup`] if `n_a` is zero or covers all of
///   `pooled`.
/// - [`ResampleError::NonFiniteInput`] if `pooled` or `observed` is not
///   finite.
#[tracing::instrument(skip_all, fields(n_a = n_a, n_b = pooled.len().saturating_sub(n_a), n = config.n_permutations()))]
pub fn permutation_test_pooled(
    pooled: &[f64],
    n_a: usize,
    observed: f64,
    config: &PermutationConfig,
    rng: &mut impl Rng,
) -> Result<PermutationResult, ResampleError> {
    config.validate()?;
    if n_a == 0 {
        return Err(ResampleError::EmptyGroup { group: "a" });
    }
    if n_a >= pooled.len() {
        return Err(ResampleError::EmptyGroup { group: "b" });
    }
    if let Some(idx) = pooled.iter().position(|v| !v.is_finite()) {
        return Err(ResampleError::NonFiniteInput {
            field: "pooled",
            first_bad_index: Some(idx),
        });
    }
    if !observed.is_finite() {
        return Err(ResampleError::NonFiniteInput {
            field: "observed",
            first_bad_index: None,
        });
    }

    let null_distribution = run_chunked(config.n_permutations(), rng, |chunk_rng, len| {
        let mut scratch = pooled.to_vec();
        (0..len)
            .map(|_| {
                // The shuffled head is a uniform random subset of size n_a.
                let (group_a, group_b) = scratch.partial_shuffle(chunk_rng, n_a);
                mean(group_a) - mean(group_b)
            })
            .collect()
    });

    let threshold = observed.abs() - TIE_REL_TOL * observed.abs().max(1.0);
    let extreme = null_distribution
        .iter()
        .filter(|d| d.abs() >= threshold)
        .count();
    let p_value = (extreme as f64 + 1.0) / (null_distribution.len() as f64 + 1.0);

    debug!(observed, extreme, p_value, "permutation test");
    Ok(PermutationResult::new(observed, p_value, null_distribution))
}
