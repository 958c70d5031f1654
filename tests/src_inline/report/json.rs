
use super::*;
use std::path::PathBuf;

fn metrics(auc: f64) -> TagMetrics {
    TagMetrics {
        tag: "scan".to_string(),
        normal_samples: 3,
        abnormal_samples: 0,
        auc,
        eer: 0.0,
        tpr_at_target_fpr: 0.0,
        fpr_at_target_tpr: 0.0,
        f1: 1.0,
        f2: 1.0,
        pr_auc: 0.5,
        roc_plot: Some(PathBuf::from("figure/scan.png")),
        pr_plot: Some(PathBuf::from("figure/scan_PRC.png")),
    }
}

#[test]
fn test_render_summary_json() {
    let tags = vec![metrics(0.75)];
    let json = render_summary_json(&RunSummary::new(6.0, &tags)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "flowscore-eval");
    assert_eq!(value["threshold"], 6.0);
    assert_eq!(value["tags"][0]["tag"], "scan");
    assert_eq!(value["tags"][0]["auc"], 0.75);
    assert_eq!(value["tags"][0]["roc_plot"], "figure/scan.png");
}

#[test]
fn test_nan_serializes_as_null() {
    let tags = vec![metrics(f64::NAN)];
    let json = render_summary_json(&RunSummary::new(6.0, &tags)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["tags"][0]["auc"].is_null());
}

#[test]
fn test_write_summary_json_creates_parent() {
    let dir = std::env::temp_dir().join(format!("flowscore_json_test_{}", std::process::id()));
    let path = dir.join("nested").join("summary.json");
    let tags = vec![metrics(0.5)];
    write_summary_json(&path, &RunSummary::new(6.0, &tags)).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"scan\""));
}
