use crate::metrics::{MetricError, PrCurve, auc, f_beta_macro, f1_macro, precision_recall_curve};
use crate::model::buckets::ScoreBuckets;
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub f1: f64,
    pub f2: f64,
    pub pr_curve: PrCurve,
    pub pr_auc: f64,
}

pub fn binarize(scores: &[f64], thresholds: &ThresholdProfile) -> Vec<bool> {
    scores.iter().map(|&s| thresholds.is_positive(s)).collect()
}

/// F-scores and PR curve of the hard `score > threshold` decision.
///
/// The PR area is taken over the curve points in the order they are returned, with
/// precision as x, so a curve that is not monotonic in precision fails.
pub fn run_stage3(
    buckets: &ScoreBuckets,
    thresholds: &ThresholdProfile,
) -> Result<Stage3Output, MetricError> {
    let (labels, scores) = buckets.labeled();
    let predictions = binarize(&scores, thresholds);

    let f1 = f1_macro(&labels, &predictions)?;
    let f2 = f_beta_macro(&labels, &predictions, thresholds.f_beta_secondary)?;

    let prediction_scores = predictions
        .iter()
        .map(|&p| if p { 1.0 } else { 0.0 })
        .collect::<Vec<_>>();
    let pr_curve = precision_recall_curve(&labels, &prediction_scores)?;
    if pr_curve.recall_undefined {
        tracing::warn!("no abnormal samples; recall is set to 1");
    }
    let pr_auc = auc(&pr_curve.precision, &pr_curve.recall)?;

    Ok(Stage3Output {
        f1,
        f2,
        pr_curve,
        pr_auc,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_decision.rs"]
mod tests;
