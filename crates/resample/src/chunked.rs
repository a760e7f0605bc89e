//! Thread-count-independent parallel Monte Carlo driver.
//!
//! Iterations are cut into fixed-size chunks. One `u64` sub-seed per chunk
//! is drawn sequentially from the caller's stream, each chunk runs on its own
//! [`StdRng`], and chunk outputs are concatenated in chunk order. The result
//! depends only on the caller's stream, never on scheduling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Iterations per chunk.
pub(crate) const CHUNK_SIZE: usize = 256;

/// Runs `n` iterations of a statistic in parallel chunks.
///
/// `chunk` receives the chunk's private generator and the number of
/// iterations it must produce, and returns exactly that many values.
pub(crate) fn run_chunked<F>(n: usize, rng: &mut impl Rng, chunk: F) -> Vec<f64>
where
    F: Fn(&mut StdRng, usize) -> Vec<f64> + Sync,
{
    let n_chunks = n.div_ceil(CHUNK_SIZE);
    let seeds: Vec<u64> = (0..n_chunks).map(|_| rng.random()).collect();

    let parts: Vec<Vec<f64>> = seeds
        .par_iter()
        .enumerate()
        .map(|(c, &seed)| {
            let len = CHUNK_SIZE.min(n - c * CHUNK_SIZE);
            let mut chunk_rng = StdRng::seed_from_u64(seed);
            let out = chunk(&mut chunk_rng, len);
            debug_assert_eq!(out.len(), len);
            out
        })
        .collect();

    parts.concat()
}
