//! Ordinary least squares via Householder QR.
//!
//! The design matrix is factored as `X = QR` without ever forming `XᵀX`,
//! so conditioning is that of `X` rather than its square. Inference assumes
//! independent, homoscedastic, normally distributed residuals: coefficient
//! p-values come from Student's t with `n - p` degrees of freedom and the
//! overall test from Fisher's F.

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::StatsError;

/// Relative size below which a pivot of `R` counts as zero.
const RANK_TOL: f64 = 1e-10;

/// Relative size below which a sum of squares counts as zero.
const ZERO_SS_TOL: f64 = 1e-20;

/// Builds an `n x (k + 1)` design matrix: a leading intercept column of ones
/// followed by one column per covariate.
///
/// # Errors
///
/// Returns [`StatsError::EmptyData`] for zero rows and
/// [`StatsError::LengthMismatch`] if covariates differ in length.
pub fn design_with_intercept(covariates: &[&[f64]]) -> Result<Array2<f64>, StatsError> {
    let n = covariates.first().map_or(0, |c| c.len());
    if n == 0 {
        return Err(StatsError::EmptyData);
    }
    let mut x = Array2::<f64>::ones((n, covariates.len() + 1));
    for (j, col) in covariates.iter().enumerate() {
        if col.len() != n {
            return Err(StatsError::LengthMismatch {
                field: "covariate",
                expected: n,
                got: col.len(),
            });
        }
        for (i, &v) in col.iter().enumerate() {
            x[[i, j + 1]] = v;
        }
    }
    Ok(x)
}

/// A fitted linear model `y = Xβ + ε`.
///
/// Values that are undefined for the data at hand are `None`:
/// - `t_values` / `p_values` when the coefficient's standard error is zero
///   (an exact fit);
/// - `r_squared` / `adj_r_squared` when `y` is constant (zero total sum of
///   squares);
/// - `f_statistic` / `f_p_value` when there is no covariate besides the
///   intercept, or the fit is exact.
#[derive(Debug, Clone)]
pub struct OlsFit {
    coefficients: Vec<f64>,
    std_errors: Vec<f64>,
    t_values: Vec<Option<f64>>,
    p_values: Vec<Option<f64>>,
    r_squared: Option<f64>,
    adj_r_squared: Option<f64>,
    f_statistic: Option<f64>,
    f_p_value: Option<f64>,
    residual_variance: f64,
    n_obs: usize,
    df_resid: usize,
}

impl OlsFit {
    /// Returns the coefficient estimates, intercept first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the standard error of each coefficient.
    pub fn std_errors(&self) -> &[f64] {
        &self.std_errors
    }

    /// Returns the t statistic of each coefficient.
    pub fn t_values(&self) -> &[Option<f64>] {
        &self.t_values
    }

    /// Returns the two-sided p-value of each coefficient.
    pub fn p_values(&self) -> &[Option<f64>] {
        &self.p_values
    }

    /// Returns the coefficient of determination.
    pub fn r_squared(&self) -> Option<f64> {
        self.r_squared
    }

    /// Returns R² adjusted for the number of coefficients.
    pub fn adj_r_squared(&self) -> Option<f64> {
        self.adj_r_squared
    }

    /// Returns the overall F statistic.
    pub fn f_statistic(&self) -> Option<f64> {
        self.f_statistic
    }

    /// Returns the p-value of the overall F test.
    pub fn f_p_value(&self) -> Option<f64> {
        self.f_p_value
    }

    /// Returns the residual variance estimate `SSR / (n - p)`.
    pub fn residual_variance(&self) -> f64 {
        self.residual_variance
    }

    /// Returns the number of observations.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Returns the residual degrees of freedom `n - p`.
    pub fn df_resid(&self) -> usize {
        self.df_resid
    }

    /// Returns the model degrees of freedom (coefficients minus intercept).
    pub fn df_model(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// Fits `y = Xβ + ε` by least squares.
///
/// `x` must already contain the intercept column (see
/// [`design_with_intercept`]); R², adjusted R², and the F test assume it is
/// there.
///
/// # Errors
///
/// - [`StatsError::LengthMismatch`] if `y` and `x` disagree on row count.
/// - [`StatsError::NonFiniteInput`] if either contains NaN or infinity.
/// - [`StatsError::InsufficientData`] if there are not more rows than
///   columns.
/// - [`StatsError::NumericalInstability`] if a column is (nearly) a linear
///   combination of the previous ones.
pub fn ols(x: &Array2<f64>, y: &[f64]) -> Result<OlsFit, StatsError> {
    let (n, p) = x.dim();
    if y.len() != n {
        return Err(StatsError::LengthMismatch {
            field: "y",
            expected: n,
            got: y.len(),
        });
    }
    if p == 0 || n <= p {
        return Err(StatsError::InsufficientData { n, min: p + 1 });
    }
    if !x.iter().all(|v| v.is_finite()) {
        return Err(StatsError::NonFiniteInput { field: "x" });
    }
    if !y.iter().all(|v| v.is_finite()) {
        return Err(StatsError::NonFiniteInput { field: "y" });
    }

    let (r, qty) = householder_qr(x, y)?;
    let beta = back_substitute(&r, &qty);
    let r_inv = upper_inverse(&r);

    // Residuals against the original design.
    let fitted = x.dot(&beta);
    let ssr: f64 = y
        .iter()
        .zip(fitted.iter())
        .map(|(yi, fi)| (yi - fi) * (yi - fi))
        .sum();
    let y_mean = y.iter().sum::<f64>() / n as f64;
    let tss: f64 = y.iter().map(|yi| (yi - y_mean) * (yi - y_mean)).sum();
    let scale = y.iter().map(|yi| yi * yi).sum::<f64>().max(1.0);

    let df_resid = n - p;
    let exact_fit = ssr <= ZERO_SS_TOL * scale;
    let sigma2 = if exact_fit { 0.0 } else { ssr / df_resid as f64 };

    let std_errors: Vec<f64> = (0..p)
        .map(|j| {
            let row_norm_sq: f64 = (j..p).map(|k| r_inv[[j, k]] * r_inv[[j, k]]).sum();
            (sigma2 * row_norm_sq).sqrt()
        })
        .collect();

    let t_dist = StudentsT::new(0.0, 1.0, df_resid as f64).map_err(|e| {
        StatsError::Distribution {
            reason: e.to_string(),
        }
    })?;
    let t_values: Vec<Option<f64>> = beta
        .iter()
        .zip(&std_errors)
        .map(|(&b, &se)| (se > 0.0).then(|| b / se))
        .collect();
    let p_values: Vec<Option<f64>> = t_values
        .iter()
        .map(|t| t.map(|t| (2.0 * t_dist.sf(t.abs())).min(1.0)))
        .collect();

    let constant_y = tss <= ZERO_SS_TOL * scale;
    let r_squared = (!constant_y).then(|| (1.0 - ssr / tss).clamp(0.0, 1.0));
    let adj_r_squared =
        r_squared.map(|r2| 1.0 - (1.0 - r2) * (n - 1) as f64 / df_resid as f64);

    let df_model = p - 1;
    let (f_statistic, f_p_value) = if df_model == 0 || exact_fit || constant_y {
        (None, None)
    } else {
        let f = ((tss - ssr) / df_model as f64) / sigma2;
        let f_dist = FisherSnedecor::new(df_model as f64, df_resid as f64).map_err(|e| {
            StatsError::Distribution {
                reason: e.to_string(),
            }
        })?;
        (Some(f), Some(f_dist.sf(f.max(0.0))))
    };

    Ok(OlsFit {
        coefficients: beta.to_vec(),
        std_errors,
        t_values,
        p_values,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        residual_variance: sigma2,
        n_obs: n,
        df_resid,
    })
}

/// Reduces `x` to upper-triangular `R` (p x p) with Householder reflections,
/// applying the same reflections to `y`. Returns `(R, (Qᵀy)[..p])`.
fn householder_qr(x: &Array2<f64>, y: &[f64]) -> Result<(Array2<f64>, Array1<f64>), StatsError> {
    let (n, p) = x.dim();
    let mut a = x.clone();
    let mut b = Array1::from(y.to_vec());

    let col_norm_max = (0..p)
        .map(|j| a.column(j).iter().map(|v| v * v).sum::<f64>().sqrt())
        .fold(0.0_f64, f64::max);

    for k in 0..p {
        let norm = (k..n).map(|i| a[[i, k]] * a[[i, k]]).sum::<f64>().sqrt();
        if norm <= RANK_TOL * col_norm_max {
            return Err(StatsError::NumericalInstability {
                reason: format!("design column {k} is collinear with the preceding columns"),
            });
        }
        let alpha = if a[[k, k]] > 0.0 { -norm } else { norm };

        let mut v: Vec<f64> = (k..n).map(|i| a[[i, k]]).collect();
        v[0] -= alpha;
        let v_norm_sq: f64 = v.iter().map(|vi| vi * vi).sum();

        for j in k..p {
            let dot: f64 = v.iter().zip(k..n).map(|(vi, i)| vi * a[[i, j]]).sum();
            let factor = 2.0 * dot / v_norm_sq;
            for (vi, i) in v.iter().zip(k..n) {
                a[[i, j]] -= factor * vi;
            }
        }
        let dot: f64 = v.iter().zip(k..n).map(|(vi, i)| vi * b[i]).sum();
        let factor = 2.0 * dot / v_norm_sq;
        for (vi, i) in v.iter().zip(k..n) {
            b[i] -= factor * vi;
        }
    }

    let r = a.slice(ndarray::s![..p, ..p]).to_owned();
    let qty = b.slice(ndarray::s![..p]).to_owned();
    Ok((r, qty))
}

/// Solves `Rβ = c` for upper-triangular `R`.
fn back_substitute(r: &Array2<f64>, c: &Array1<f64>) -> Array1<f64> {
    let p = c.len();
    let mut beta = Array1::<f64>::zeros(p);
    for i in (0..p).rev() {
        let tail: f64 = ((i + 1)..p).map(|k| r[[i, k]] * beta[k]).sum();
        beta[i] = (c[i] - tail) / r[[i, i]];
    }
    beta
}

/// Inverts an upper-triangular matrix column by column.
///
/// `(XᵀX)⁻¹ = R⁻¹R⁻ᵀ`, so the variance of `β_j` is `σ²` times the squared
/// norm of row `j` of `R⁻¹`.
fn upper_inverse(r: &Array2<f64>) -> Array2<f64> {
    let p = r.nrows();
    let mut inv = Array2::<f64>::zeros((p, p));
    for col in 0..p {
        let mut e = Array1::<f64>::zeros(p);
        e[col] = 1.0;
        let x = back_substitute(r, &e);
        inv.column_mut(col).assign(&x);
    }
    inv
}
