//! JSON report structures for analysis results.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::pipeline::Analysis;
use crate::regression::RegressionResult;

/// Top-level analysis report.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// Sizes of the two partition sides.
    pub partition: PartitionSummary,
    pub bootstrap: BootstrapSummary,
    pub permutation: PermutationSummary,
    pub regression: RegressionResult,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub anniversary: String,
    pub radius: u32,
    pub distance_mode: String,
    pub n_resamples: usize,
    pub confidence_level: f64,
    pub n_permutations: usize,
    /// `None` when the run drew its seed from the operating system.
    pub seed: Option<u64>,
}

/// Partition counts.
#[derive(Debug, Serialize)]
pub struct PartitionSummary {
    pub n_in_window: usize,
    pub n_baseline: usize,
    pub mean_in_window: f64,
    pub mean_baseline: f64,
}

/// Bootstrap interval for the difference in means.
#[derive(Debug, Serialize)]
pub struct BootstrapSummary {
    pub observed: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<Vec<f64>>,
}

/// Permutation test of the difference in means.
#[derive(Debug, Serialize)]
pub struct PermutationSummary {
    pub observed: f64,
    pub p_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_distribution: Option<Vec<f64>>,
}

impl AnalysisReport {
    /// Builds a report from a finished analysis.
    pub fn new(analysis: &Analysis, config: &AnalysisConfig, seed: Option<u64>) -> Self {
        let include = config.include_distributions();
        let partition = analysis.partition();
        let bootstrap = analysis.bootstrap();
        let permutation = analysis.permutation();
        Self {
            config: ConfigSummary {
                anniversary: config.anniversary().to_string(),
                radius: config.window().radius(),
                distance_mode: config.window().mode().to_string(),
                n_resamples: config.bootstrap().n_resamples(),
                confidence_level: config.bootstrap().confidence_level(),
                n_permutations: config.permutation().n_permutations(),
                seed,
            },
            partition: PartitionSummary {
                n_in_window: partition.in_window().len(),
                n_baseline: partition.baseline().len(),
                mean_in_window: anniv_stats::mean(partition.in_window()),
                mean_baseline: anniv_stats::mean(partition.baseline()),
            },
            bootstrap: BootstrapSummary {
                observed: bootstrap.observed(),
                lower: bootstrap.lower(),
                upper: bootstrap.upper(),
                confidence_level: bootstrap.confidence_level(),
                distribution: include.then(|| bootstrap.distribution().to_vec()),
            },
            permutation: PermutationSummary {
                observed: permutation.observed(),
                p_value: permutation.p_value(),
                null_distribution: include.then(|| permutation.null_distribution().to_vec()),
            },
            regression: analysis.regression().clone(),
        }
    }
}

/// Serialize an analysis report to a JSON string.
pub fn to_json(report: &AnalysisReport) -> Result<String, AnalysisError> {
    serde_json::to_string_pretty(report).map_err(|e| AnalysisError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regression() -> RegressionResult {
        RegressionResult {
            corr_signed: Some(0.1),
            corr_abs: None,
            coefficients: vec![2.0, -0.5],
            std_errors: vec![0.1, 0.01],
            t_values: vec![Some(20.0), Some(-50.0)],
            p_values: vec![Some(0.001), None],
            r_squared: Some(0.4),
            adj_r_squared: Some(0.39),
            f_statistic: Some(12.0),
            f_p_value: Some(0.002),
            n_obs: 100,
            df_resid: 98,
        }
    }

    #[test]
    fn test_to_json_shape() {
        let report = AnalysisReport {
            config: ConfigSummary {
                anniversary: "05-25".to_string(),
                radius: 3,
                distance_mode: "calendar".to_string(),
                n_resamples: 100,
                confidence_level: 0.95,
                n_permutations: 200,
                seed: Some(42),
            },
            partition: PartitionSummary {
                n_in_window: 7,
                n_baseline: 93,
                mean_in_window: 50.0,
                mean_baseline: 10.0,
            },
            bootstrap: BootstrapSummary {
                observed: 40.0,
                lower: 30.0,
                upper: 50.0,
                confidence_level: 0.95,
                distribution: None,
            },
            permutation: PermutationSummary {
                observed: 40.0,
                p_value: 0.005,
                null_distribution: Some(vec![1.0, -1.0]),
            },
            regression: regression(),
        };

        let json = to_json(&report).unwrap();
        assert!(json.contains("\"anniversary\": \"05-25\""));
        assert!(json.contains("\"seed\": 42"));
        assert!(json.contains("\"n_in_window\": 7"));
        assert!(!json.contains("\"distribution\""));
        assert!(json.contains("\"null_distribution\""));
        assert!(json.contains("\"corr_abs\": null"));
    }

    #[test]
    fn test_regression_serializes_options() {
        let json = serde_json::to_string(&regression()).unwrap();
        assert!(json.contains("\"p_values\":[0.001,null]"));
        assert!(json.contains("\"df_resid\":98"));
    }
}
