
use super::*;

#[test]
fn test_auc_increasing() {
    let area = auc(&[0.0, 0.0, 0.5, 0.5, 1.0], &[0.0, 0.5, 0.5, 1.0, 1.0]).unwrap();
    assert!((area - 0.75).abs() < 1e-12);
}

#[test]
fn test_auc_diagonal() {
    assert!((auc(&[0.0, 1.0], &[0.0, 1.0]).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_auc_decreasing_x_is_positive() {
    let area = auc(&[1.0, 0.5, 0.0], &[1.0, 1.0, 1.0]).unwrap();
    assert!((area - 1.0).abs() < 1e-12);
}

#[test]
fn test_auc_non_monotonic() {
    assert_eq!(
        auc(&[0.0, 1.0, 0.5], &[0.0, 1.0, 1.0]),
        Err(MetricError::NonMonotonic)
    );
}

#[test]
fn test_auc_too_few_points() {
    assert_eq!(auc(&[0.3], &[0.4]), Err(MetricError::TooFewPoints(1)));
}

#[test]
fn test_auc_nan_propagates() {
    let area = auc(&[0.0, 0.5, 1.0], &[f64::NAN, f64::NAN, f64::NAN]).unwrap();
    assert!(area.is_nan());
}
