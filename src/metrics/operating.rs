use crate::metrics::RocCurve;

pub const TARGET_FPR: f64 = 0.1;
pub const TARGET_TPR: f64 = 0.9;

/// Points read off a ROC curve by nearest-value scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoints {
    /// FPR where `|(1 - FPR) - TPR|` is smallest.
    pub eer: f64,
    /// TPR at the sample nearest to the target FPR.
    pub tpr_at_fpr: f64,
    /// FPR at the sample nearest to the target TPR.
    pub fpr_at_tpr: f64,
}

/// Scans the curve in order; each running minimum starts at 1 and only a strictly
/// smaller distance replaces it, so ties keep the earliest sample and a value stays 0
/// when no sample comes closer than 1.
pub fn scan_operating_points(
    curve: &RocCurve,
    target_fpr: f64,
    target_tpr: f64,
) -> OperatingPoints {
    let mut best_eer = 1.0;
    let mut best_fpr = 1.0;
    let mut best_tpr = 1.0;

    let mut out = OperatingPoints {
        eer: 0.0,
        tpr_at_fpr: 0.0,
        fpr_at_tpr: 0.0,
    };

    for (fpr, tpr) in curve.points() {
        let d = ((1.0 - fpr) - tpr).abs();
        if d < best_eer {
            best_eer = d;
            out.eer = fpr;
        }

        let d = (fpr - target_fpr).abs();
        if d < best_fpr {
            best_fpr = d;
            out.tpr_at_fpr = tpr;
        }

        let d = (tpr - target_tpr).abs();
        if d < best_tpr {
            best_tpr = d;
            out.fpr_at_tpr = fpr;
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/operating.rs"]
mod tests;
