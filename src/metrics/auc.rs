use crate::metrics::MetricError;

/// Trapezoidal area under `(x, y)`.
///
/// `x` must be monotonic; a non-increasing `x` yields the positive area of the reversed curve.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64, MetricError> {
    if x.len() != y.len() {
        return Err(MetricError::LengthMismatch {
            labels: x.len(),
            scores: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(MetricError::TooFewPoints(x.len()));
    }

    let mut direction = 1.0;
    if x.windows(2).any(|w| w[1] - w[0] < 0.0) {
        if x.windows(2).all(|w| w[1] - w[0] <= 0.0) {
            direction = -1.0;
        } else {
            return Err(MetricError::NonMonotonic);
        }
    }

    let area = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum::<f64>();
    Ok(direction * area)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/auc.rs"]
mod tests;
