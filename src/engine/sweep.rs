//! Evenly spaced sweep generation.

/// Generate `count` evenly spaced values from `start` to `stop` inclusive.
///
/// Each value is rounded to two decimal places to suppress floating-point
/// noise in downstream comparison and display. A `count` of zero or one
/// collapses to the single-element sweep `[start]`. `start` above `stop`
/// yields a descending sweep, and `start == stop` a constant one; both
/// degenerate shapes are produced as-is.
#[must_use]
pub fn sweep(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }

    let step = (stop - start) / (count - 1) as f64;
    (0..count)
        .map(|i| round2(start + step * i as f64))
        .collect()
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
