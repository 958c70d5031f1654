
use super::*;
use crate::metrics::MetricError;

#[test]
fn test_binarize_is_strict() {
    let preds = binarize(&[6.0, 7.0, 6.5, -1.0], &ThresholdProfile::default_v1());
    assert_eq!(preds, vec![false, true, true, false]);
}

#[test]
fn test_binarize_custom_threshold() {
    let preds = binarize(&[1.0, 2.0], &ThresholdProfile::with_decision_threshold(1.0));
    assert_eq!(preds, vec![false, true]);
}

#[test]
fn test_perfect_decision() {
    let buckets = ScoreBuckets {
        normal: vec![6.0],
        abnormal: vec![7.0],
    };
    let out = run_stage3(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!((out.f1 - 1.0).abs() < 1e-12);
    assert!((out.f2 - 1.0).abs() < 1e-12);
    assert_eq!(out.pr_curve.precision, vec![0.5, 1.0, 1.0]);
    assert_eq!(out.pr_curve.recall, vec![1.0, 1.0, 0.0]);
    assert!((out.pr_auc - 0.5).abs() < 1e-12);
}

#[test]
fn test_partial_decision() {
    let buckets = ScoreBuckets {
        normal: vec![1.0, 9.0],
        abnormal: vec![9.0, 9.0],
    };
    let out = run_stage3(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!((out.f1 - (2.0 / 3.0 + 0.8) / 2.0).abs() < 1e-12);
    assert!((out.pr_auc - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_pr_auc_non_monotonic_precision_fails() {
    let buckets = ScoreBuckets {
        normal: vec![7.0, 7.0, 1.0],
        abnormal: vec![7.0, 1.0, 1.0],
    };
    let err = run_stage3(&buckets, &ThresholdProfile::default_v1()).unwrap_err();
    assert_eq!(err, MetricError::NonMonotonic);
}
