//! Distance regression: how values vary with distance from the anniversary.
//!
//! Fits `value = β0 + β1 · |distance| + ε` by ordinary least squares over the
//! whole annotated series (not the partition), alongside Pearson
//! correlations of value with signed and absolute distance.
//!
//! The fit assumes a linear relationship and independent, homoscedastic,
//! normally distributed residuals. Daily traffic is usually autocorrelated,
//! so the reported p-values are optimistic. The result describes
//! association with calendar proximity, never a causal effect.

use anniv_series::AnnotatedSeries;
use anniv_stats::{design_with_intercept, ols, pearson_correlation};
use serde::Serialize;
use tracing::debug;

use crate::error::AnalysisError;

/// Term names in coefficient order.
pub const TERMS: [&str; 2] = ["intercept", "abs_distance"];

/// Correlations and OLS fit of value against distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    /// Pearson r of value vs signed distance; `None` if either is constant.
    pub corr_signed: Option<f64>,
    /// Pearson r of value vs absolute distance; `None` if either is constant.
    pub corr_abs: Option<f64>,
    /// `[β0, β1]`.
    pub coefficients: Vec<f64>,
    pub std_errors: Vec<f64>,
    pub t_values: Vec<Option<f64>>,
    /// Two-sided, Student t with `df_resid` degrees of freedom.
    pub p_values: Vec<Option<f64>>,
    pub r_squared: Option<f64>,
    pub adj_r_squared: Option<f64>,
    pub f_statistic: Option<f64>,
    pub f_p_value: Option<f64>,
    pub n_obs: usize,
    pub df_resid: usize,
}

impl RegressionResult {
    /// Returns the slope on absolute distance.
    pub fn slope(&self) -> f64 {
        self.coefficients[1]
    }

    /// Renders a fixed-width text summary of the fit.
    ///
    /// Undefined statistics are shown as `n/a`.
    pub fn summary_table(&self) -> String {
        let rule = "-".repeat(64);
        let row = |term: &str, cells: [Option<f64>; 4]| {
            let [coef, se, t, p] = cells.map(fmt_num);
            format!("{term:<14}{coef:>12}{se:>12}{t:>12}{p:>12}")
        };
        let pair = |l: &str, lv: String, r: &str, rv: String| {
            format!("{l:<22}{lv:>10}    {r:<22}{rv:>10}")
        };

        let mut lines = vec![
            "OLS regression: value ~ intercept + abs_distance".to_string(),
            rule.clone(),
            format!(
                "{:<14}{:>12}{:>12}{:>12}{:>12}",
                "term", "coef", "std err", "t", "P>|t|"
            ),
        ];
        lines.extend(TERMS.iter().enumerate().map(|(i, &term)| {
            row(
                term,
                [
                    Some(self.coefficients[i]),
                    Some(self.std_errors[i]),
                    self.t_values[i],
                    self.p_values[i],
                ],
            )
        }));
        lines.extend([
            rule.clone(),
            pair(
                "R-squared:",
                fmt_num(self.r_squared),
                "Adj. R-squared:",
                fmt_num(self.adj_r_squared),
            ),
            pair(
                "F-statistic:",
                fmt_num(self.f_statistic),
                "Prob (F-statistic):",
                fmt_num(self.f_p_value),
            ),
            pair(
                "Observations:",
                self.n_obs.to_string(),
                "Df residuals:",
                self.df_resid.to_string(),
            ),
            rule,
            format!(
                "{:<36}{:>10}",
                "Pearson r (value, signed distance):",
                fmt_num(self.corr_signed)
            ),
            format!(
                "{:<36}{:>10}",
                "Pearson r (value, abs distance):",
                fmt_num(self.corr_abs)
            ),
        ]);
        lines.join("\n") + "\n"
    }
}

fn fmt_num(v: Option<f64>) -> String {
    match v {
        Some(x) if x != 0.0 && (x.abs() < 1e-4 || x.abs() >= 1e6) => format!("{x:.3e}"),
        Some(x) => format!("{x:.4}"),
        None => "n/a".to_string(),
    }
}

/// Regresses values on absolute distance and correlates them with both
/// distances.
///
/// # Errors
///
/// - [`AnalysisError::Stats`] wrapping
///   [`anniv_stats::StatsError::InsufficientData`] for fewer than three
///   rows, or [`anniv_stats::StatsError::NumericalInstability`] when every
///   row sits at the same distance.
pub fn distance_regression(series: &AnnotatedSeries) -> Result<RegressionResult, AnalysisError> {
    let values = series.values();
    let signed = series.signed_distances();
    let abs = series.abs_distances();

    let corr_signed = pearson_correlation(&values, &signed);
    let corr_abs = pearson_correlation(&values, &abs);

    let design = design_with_intercept(&[&abs])?;
    let fit = ols(&design, &values)?;

    debug!(
        n = fit.n_obs(),
        slope = fit.coefficients()[1],
        r_squared = ?fit.r_squared(),
        "distance regression"
    );

    Ok(RegressionResult {
        corr_signed,
        corr_abs,
        coefficients: fit.coefficients().to_vec(),
        std_errors: fit.std_errors().to_vec(),
        t_values: fit.t_values().to_vec(),
        p_values: fit.p_values().to_vec(),
        r_squared: fit.r_squared(),
        adj_r_squared: fit.adj_r_squared(),
        f_statistic: fit.f_statistic(),
        f_p_value: fit.f_p_value(),
        n_obs: fit.n_obs(),
        df_resid: fit.df_resid(),
    })
}
