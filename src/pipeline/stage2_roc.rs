use crate::metrics::{MetricError, OperatingPoints, RocCurve, auc, roc_curve, scan_operating_points};
use crate::model::buckets::ScoreBuckets;
use crate::model::thresholds::ThresholdProfile;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub curve: RocCurve,
    pub auc: f64,
    pub points: OperatingPoints,
}

pub fn run_stage2(
    buckets: &ScoreBuckets,
    thresholds: &ThresholdProfile,
) -> Result<Stage2Output, MetricError> {
    let (labels, scores) = buckets.labeled();
    let curve = roc_curve(&labels, &scores)?;
    if buckets.normal.is_empty() {
        tracing::warn!("no normal samples; false positive rate is undefined");
    }
    if buckets.abnormal.is_empty() {
        tracing::warn!("no abnormal samples; true positive rate is undefined");
    }

    let area = auc(&curve.fpr, &curve.tpr)?;
    let points = scan_operating_points(&curve, thresholds.target_fpr, thresholds.target_tpr);
    tracing::debug!(
        "roc points={} TPR={:.6} (FPR={}) FPR={:.6} (TPR={})",
        curve.len(),
        points.tpr_at_fpr,
        thresholds.target_fpr,
        points.fpr_at_tpr,
        thresholds.target_tpr
    );

    Ok(Stage2Output {
        curve,
        auc: area,
        points,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_roc.rs"]
mod tests;
