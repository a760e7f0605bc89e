//! Location and type-7 quantile helpers for resampled statistics.

/// Arithmetic mean. An empty slice yields 0.0.
pub fn mean(data: &[f64]) -> f64 {
    match data.len() {
        0 => 0.0,
        n => data.iter().sum::<f64>() / n as f64,
    }
}

/// Copy of `data` in ascending total order (NaN sorts last).
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_unstable_by(f64::total_cmp);
    out
}

/// Type-7 quantile of ascending `sorted` at probability `p` in `[0, 1]`.
///
/// Linear interpolation between the order statistics at `h = (n - 1) p`;
/// the default of R's `quantile()` and numpy's `percentile()`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    let last = sorted
        .len()
        .checked_sub(1)
        .expect("quantile_type7 needs at least one value");
    let h = last as f64 * p;
    let below = (h.floor() as usize).min(last);
    let above = (below + 1).min(last);
    let frac = h - below as f64;
    sorted[below] + frac * (sorted[above] - sorted[below])
}

/// Type-7 quantiles of unsorted `data` at each probability in `probs`.
///
/// Returns `None` for empty input.
pub fn quantiles(data: &[f64], probs: &[f64]) -> Option<Vec<f64>> {
    if data.is_empty() {
        return None;
    }
    let ordered = sorted(data);
    Some(probs.iter().map(|&p| quantile_type7(&ordered, p)).collect())
}
