
use super::*;

struct XorShift(u64);

impl XorShift {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[test]
fn test_perfect_separation() {
    let buckets = ScoreBuckets {
        normal: vec![1.0, 2.0, 3.0, 3.0],
        abnormal: vec![7.0, 8.0],
    };
    let out = run_stage2(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!((out.auc - 1.0).abs() < 1e-12);
    assert_eq!(out.points.eer, 0.0);
}

#[test]
fn test_random_scores_auc_near_half() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    let normal = (0..4000).map(|_| rng.next_f64() * 10.0).collect::<Vec<_>>();
    let abnormal = (0..4000).map(|_| rng.next_f64() * 10.0).collect::<Vec<_>>();
    let buckets = ScoreBuckets { normal, abnormal };
    let out = run_stage2(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!((out.auc - 0.5).abs() < 0.05, "auc = {}", out.auc);
    assert!((out.points.eer - 0.5).abs() < 0.05, "eer = {}", out.points.eer);
}

#[test]
fn test_inverted_scores() {
    let buckets = ScoreBuckets {
        normal: vec![9.0, 8.0],
        abnormal: vec![1.0, 2.0],
    };
    let out = run_stage2(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!(out.auc.abs() < 1e-12);
}

#[test]
fn test_empty_buckets() {
    let err = run_stage2(&ScoreBuckets::new(), &ThresholdProfile::default_v1()).unwrap_err();
    assert_eq!(err, MetricError::Empty);
}

#[test]
fn test_no_abnormal_gives_nan_auc() {
    let buckets = ScoreBuckets {
        normal: vec![1.0, 2.0, 3.0],
        abnormal: vec![],
    };
    let out = run_stage2(&buckets, &ThresholdProfile::default_v1()).unwrap();
    assert!(out.auc.is_nan());
}
