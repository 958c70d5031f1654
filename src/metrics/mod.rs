use thiserror::Error;

pub mod auc;
pub mod curve;
pub mod fbeta;
pub mod operating;

pub use auc::auc;
pub use curve::{PrCurve, RocCurve, precision_recall_curve, roc_curve};
pub use fbeta::{f_beta_macro, f1_macro};
pub use operating::{OperatingPoints, scan_operating_points};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("no samples to evaluate")]
    Empty,
    #[error("label and score lengths differ ({labels} vs {scores})")]
    LengthMismatch { labels: usize, scores: usize },
    #[error("non-finite score at index {0}")]
    NonFinite(usize),
    #[error("at least 2 points are needed to compute an area, got {0}")]
    TooFewPoints(usize),
    #[error("x is neither increasing nor decreasing")]
    NonMonotonic,
}

pub(crate) fn check_inputs(labels: &[bool], scores: &[f64]) -> Result<(), MetricError> {
    if labels.len() != scores.len() {
        return Err(MetricError::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    if labels.is_empty() {
        return Err(MetricError::Empty);
    }
    if let Some(idx) = scores.iter().position(|s| !s.is_finite()) {
        return Err(MetricError::NonFinite(idx));
    }
    Ok(())
}
