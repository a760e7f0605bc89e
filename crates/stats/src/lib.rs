//! # anniv-stats
//!
//! Numeric kernels shared by the inference crates: means,
//! type-7 quantiles, Pearson correlation, and ordinary least squares with
//! classical inference.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `descriptive` | Mean, sorting, type-7 quantiles |
//! | `correlation` | Pearson product-moment correlation |
//! | `ols` | Householder-QR least squares, t and F tests |
//! | `error` | Error types |
//!
//! ## Quick Start
//!
//! ```
//! use anniv_stats::{design_with_intercept, ols};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 5.0, 4.0, 5.0];
//! let fit = ols(&design_with_intercept(&[&x]).unwrap(), &y).unwrap();
//! assert!((fit.coefficients()[1] - 0.6).abs() < 1e-12);
//! ```

mod correlation;
mod descriptive;
mod error;
mod ols;

pub use correlation::pearson_correlation;
pub use descriptive::{mean, quantile_type7, quantiles, sorted};
pub use error::StatsError;
pub use ols::{OlsFit, design_with_intercept, ols};
