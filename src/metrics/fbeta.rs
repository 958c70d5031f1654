use crate::metrics::MetricError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ClassCounts {
    true_positive: usize,
    predicted: usize,
    actual: usize,
}

/// Unweighted mean of per-class F-beta over the classes present in `truth` or `pred`.
///
/// A class with zero precision and recall contributes 0.
pub fn f_beta_macro(truth: &[bool], pred: &[bool], beta: f64) -> Result<f64, MetricError> {
    if truth.len() != pred.len() {
        return Err(MetricError::LengthMismatch {
            labels: truth.len(),
            scores: pred.len(),
        });
    }
    if truth.is_empty() {
        return Err(MetricError::Empty);
    }

    // index 0: negative class, 1: positive class
    let mut classes = [ClassCounts::default(); 2];
    for (&t, &p) in truth.iter().zip(pred) {
        classes[t as usize].actual += 1;
        classes[p as usize].predicted += 1;
        if t == p {
            classes[t as usize].true_positive += 1;
        }
    }

    let beta2 = beta * beta;
    let mut sum = 0.0;
    let mut present = 0usize;
    for class in classes.iter().filter(|c| c.actual + c.predicted > 0) {
        present += 1;
        let precision = ratio(class.true_positive, class.predicted);
        let recall = ratio(class.true_positive, class.actual);
        let denom = beta2 * precision + recall;
        if denom > 0.0 {
            sum += (1.0 + beta2) * precision * recall / denom;
        }
    }

    Ok(sum / present as f64)
}

pub fn f1_macro(truth: &[bool], pred: &[bool]) -> Result<f64, MetricError> {
    f_beta_macro(truth, pred, 1.0)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/fbeta.rs"]
mod tests;
