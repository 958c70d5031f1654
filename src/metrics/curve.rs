use crate::metrics::{MetricError, check_inputs};

/// Cumulative false/true positive counts at each distinct score, highest score first.
#[derive(Debug, Clone, PartialEq)]
pub struct ClfCounts {
    pub fps: Vec<f64>,
    pub tps: Vec<f64>,
    pub thresholds: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }
}

/// Precision/recall pairs in increasing-threshold order, closed by `(1, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub thresholds: Vec<f64>,
    /// Recall is undefined (set to 1) because no positive samples exist.
    pub recall_undefined: bool,
}

impl PrCurve {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.precision
            .iter()
            .copied()
            .zip(self.recall.iter().copied())
    }
}

pub fn binary_clf_counts(labels: &[bool], scores: &[f64]) -> Result<ClfCounts, MetricError> {
    check_inputs(labels, scores)?;

    let mut order = (0..scores.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut fps = Vec::new();
    let mut tps = Vec::new();
    let mut thresholds = Vec::new();

    let mut tp = 0.0f64;
    for (rank, &idx) in order.iter().enumerate() {
        if labels[idx] {
            tp += 1.0;
        }
        let last_of_value = match order.get(rank + 1) {
            Some(&next) => scores[next] != scores[idx],
            None => true,
        };
        if last_of_value {
            tps.push(tp);
            fps.push((rank + 1) as f64 - tp);
            thresholds.push(scores[idx]);
        }
    }

    Ok(ClfCounts {
        fps,
        tps,
        thresholds,
    })
}

/// ROC curve with collinear intermediate points dropped and a leading `(0, 0)` point.
///
/// A class without samples makes its rate axis NaN.
pub fn roc_curve(labels: &[bool], scores: &[f64]) -> Result<RocCurve, MetricError> {
    let counts = binary_clf_counts(labels, scores)?;
    let keep = non_collinear(&counts.fps, &counts.tps);

    let mut fps = Vec::with_capacity(keep.len() + 1);
    let mut tps = Vec::with_capacity(keep.len() + 1);
    let mut thresholds = Vec::with_capacity(keep.len() + 1);
    fps.push(0.0);
    tps.push(0.0);
    thresholds.push(f64::INFINITY);
    for idx in keep {
        fps.push(counts.fps[idx]);
        tps.push(counts.tps[idx]);
        thresholds.push(counts.thresholds[idx]);
    }

    Ok(RocCurve {
        fpr: normalize(&fps),
        tpr: normalize(&tps),
        thresholds,
    })
}

pub fn precision_recall_curve(labels: &[bool], scores: &[f64]) -> Result<PrCurve, MetricError> {
    let counts = binary_clf_counts(labels, scores)?;
    let n = counts.tps.len();
    let total_pos = counts.tps[n - 1];
    let recall_undefined = total_pos <= 0.0;

    let mut precision = Vec::with_capacity(n + 1);
    let mut recall = Vec::with_capacity(n + 1);
    let mut thresholds = Vec::with_capacity(n);
    for idx in (0..n).rev() {
        let tp = counts.tps[idx];
        let predicted = tp + counts.fps[idx];
        precision.push(if predicted > 0.0 { tp / predicted } else { 0.0 });
        recall.push(if recall_undefined { 1.0 } else { tp / total_pos });
        thresholds.push(counts.thresholds[idx]);
    }
    precision.push(1.0);
    recall.push(0.0);

    Ok(PrCurve {
        precision,
        recall,
        thresholds,
        recall_undefined,
    })
}

fn non_collinear(fps: &[f64], tps: &[f64]) -> Vec<usize> {
    let n = fps.len();
    if n <= 2 {
        return (0..n).collect();
    }
    let mut keep = Vec::with_capacity(n);
    keep.push(0);
    for i in 1..n - 1 {
        let d_fp = fps[i + 1] - 2.0 * fps[i] + fps[i - 1];
        let d_tp = tps[i + 1] - 2.0 * tps[i] + tps[i - 1];
        if d_fp != 0.0 || d_tp != 0.0 {
            keep.push(i);
        }
    }
    keep.push(n - 1);
    keep
}

fn normalize(counts: &[f64]) -> Vec<f64> {
    let total = counts.last().copied().unwrap_or(0.0);
    if total <= 0.0 {
        return vec![f64::NAN; counts.len()];
    }
    counts.iter().map(|c| c / total).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/curve.rs"]
mod tests;
