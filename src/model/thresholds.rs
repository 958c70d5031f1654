use crate::metrics::operating::{TARGET_FPR, TARGET_TPR};

/// Fixed cutoffs used by the evaluation stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdProfile {
    /// `score > decision_threshold` is a positive prediction.
    pub decision_threshold: f64,
    pub target_fpr: f64,
    pub target_tpr: f64,
    pub f_beta_secondary: f64,
}

impl ThresholdProfile {
    pub fn default_v1() -> Self {
        Self {
            decision_threshold: 6.0,
            target_fpr: TARGET_FPR,
            target_tpr: TARGET_TPR,
            f_beta_secondary: 2.0,
        }
    }

    pub fn with_decision_threshold(threshold: f64) -> Self {
        let mut base = Self::default_v1();
        base.decision_threshold = threshold;
        base
    }

    pub fn is_positive(&self, score: f64) -> bool {
        score > self.decision_threshold
    }
}
