//! # anniv-resample
//!
//! Monte Carlo inference for the difference in means of two groups: a
//! percentile bootstrap confidence interval and a two-sided permutation
//! test.
//!
//! ## Determinism
//!
//! Every entry point takes an explicit `&mut impl Rng`. Iterations run in
//! parallel on [`rayon`], split into fixed-size chunks that each own a
//! `StdRng` seeded from one `u64` drawn off the caller's stream. Chunk
//! outputs are merged in chunk order, so a given caller stream always
//! yields the same distribution, whatever the thread count.
//!
//! ```text
//!  caller rng ──▶ seed₀ seed₁ … seedₖ ──par──▶ [chunk₀][chunk₁]…[chunkₖ] ──concat──▶ Vec<f64>
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use anniv_resample::{BootstrapConfig, PermutationConfig, bootstrap, permutation_test};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let window = [100.0, 98.0, 104.0];
//! let baseline = [10.0, 12.0, 9.0, 11.0, 10.0, 8.0];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let ci = bootstrap(&window, &baseline, &BootstrapConfig::new().with_n_resamples(500), &mut rng).unwrap();
//! assert!(ci.excludes_zero());
//!
//! let test = permutation_test(&window, &baseline, &PermutationConfig::new().with_n_permutations(500), &mut rng).unwrap();
//! assert!(test.p_value() < 0.05);
//! ```

mod bootstrap;
mod chunked;
mod config;
mod error;
mod permutation;
mod result;

pub use bootstrap::bootstrap;
pub use config::{BootstrapConfig, PermutationConfig};
pub use error::ResampleError;
pub use permutation::{permutation_test, permutation_test_pooled};
pub use result::{BootstrapResult, PermutationResult};
