//! Piecewise-linear interpolation over sampled curves.

/// Linearly interpolate `y` at `x_new` from sampled points `(xs, ys)`.
///
/// Scans `xs` left to right for the first sample at or above `x_new` and
/// solves the line through that sample and its left neighbor. A target
/// beyond the last sample extrapolates from the final segment; a target at
/// or before the first sample extrapolates from the first segment (the
/// bracket's right index never drops below 1, so a left neighbor always
/// exists).
///
/// The same primitive serves the inverse lookup: callers solving "x at a
/// given y" pass the y samples as `xs` and the x samples as `ys`. Both
/// orientations therefore share identical rounding and edge behavior.
///
/// # Preconditions
///
/// `xs` and `ys` have equal length of at least 2, and the two samples of the
/// chosen bracket have distinct `xs` values; a repeated x value inside the
/// bracket divides by zero. Callers pass curves with distinct sample
/// positions, so this is not special-cased here.
#[must_use]
pub fn interpolate(xs: &[f64], ys: &[f64], x_new: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    debug_assert!(xs.len() >= 2);

    let mut index = 0;
    while index < xs.len() - 1 && xs[index] < x_new {
        index += 1;
    }

    let right = index.max(1);
    let left = right - 1;

    let slope = (ys[right] - ys[left]) / (xs[right] - xs[left]);
    ys[left] + slope * (x_new - xs[left])
}
