pub mod handicap;

pub use handicap::*;

/// Arithmetic mean, `0.0` for an empty slice.
#[must_use]
pub fn average(scores: &[i32]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: f64 = scores.iter().copied().map(f64::from).sum();
    total / scores.len() as f64
}

/// Least-squares line through `(index, score)`, returned as `[slope, intercept]`.
///
/// Empty input gives `[0, 0]`; a single round gives a flat line through it.
#[must_use]
pub fn trend(scores: &[i32]) -> [f64; 2] {
    if scores.is_empty() {
        return [0.0, 0.0];
    }

    let n = scores.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
    for (i, score) in scores.iter().enumerate() {
        let x = i as f64;
        let y = f64::from(*score);
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return [0.0, sum_y / n];
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    [slope, intercept]
}
