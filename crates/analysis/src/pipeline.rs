//! End-to-end analysis of one series against one anniversary.

use anniv_resample::{BootstrapResult, PermutationResult, bootstrap, permutation_test};
use anniv_series::{AnnotatedSeries, Observation, Partition, annotate, partition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::regression::{RegressionResult, distance_regression};

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    series: AnnotatedSeries,
    partition: Partition,
    bootstrap: BootstrapResult,
    permutation: PermutationResult,
    regression: RegressionResult,
}

impl Analysis {
    /// Returns the distance-annotated series.
    pub fn series(&self) -> &AnnotatedSeries {
        &self.series
    }

    /// Returns the window/baseline partition.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Returns the bootstrap interval.
    pub fn bootstrap(&self) -> &BootstrapResult {
        &self.bootstrap
    }

    /// Returns the permutation test.
    pub fn permutation(&self) -> &PermutationResult {
        &self.permutation
    }

    /// Returns the distance regression.
    pub fn regression(&self) -> &RegressionResult {
        &self.regression
    }
}

/// Annotates and partitions `observations`, then runs the bootstrap, the
/// permutation test, and the distance regression.
///
/// The three procedures only read the annotated series and run
/// concurrently. Two sub-seeds are drawn from `rng` up front (bootstrap
/// first), so the outcome depends only on the caller's stream.
///
/// # Errors
///
/// Returns the first failure among configuration validation, annotation,
/// partitioning, and the three procedures, wrapped in [`AnalysisError`].
pub fn analyze(
    observations: &[Observation],
    config: &AnalysisConfig,
    rng: &mut impl Rng,
) -> Result<Analysis, AnalysisError> {
    let _span = info_span!("analyze", anniversary = %config.anniversary()).entered();
    config.validate()?;

    let series = annotate(observations, config.anniversary())?;
    let partition = partition(&series, config.window())?;
    info!(
        rows = series.len(),
        in_window = partition.in_window().len(),
        baseline = partition.baseline().len(),
        radius = config.window().radius(),
        "partitioned series"
    );

    let mut boot_rng = StdRng::seed_from_u64(rng.random());
    let mut perm_rng = StdRng::seed_from_u64(rng.random());

    let ((boot, perm), regression) = rayon::join(
        || {
            rayon::join(
                || {
                    info_span!("bootstrap").in_scope(|| {
                        bootstrap(
                            partition.in_window(),
                            partition.baseline(),
                            config.bootstrap(),
                            &mut boot_rng,
                        )
                    })
                },
                || {
                    info_span!("permutation").in_scope(|| {
                        permutation_test(
                            partition.in_window(),
                            partition.baseline(),
                            config.permutation(),
                            &mut perm_rng,
                        )
                    })
                },
            )
        },
        || info_span!("regression").in_scope(|| distance_regression(&series)),
    );
    let bootstrap = boot?;
    let permutation = perm?;
    let regression = regression?;

    info!(
        observed = bootstrap.observed(),
        lower = bootstrap.lower(),
        upper = bootstrap.upper(),
        p_value = permutation.p_value(),
        slope = regression.slope(),
        "analysis complete"
    );

    Ok(Analysis {
        series,
        partition,
        bootstrap,
        permutation,
        regression,
    })
}
