use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub mod json;
pub mod plot;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render {path}: {msg}")]
    Plot { path: PathBuf, msg: String },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything reported for one tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagMetrics {
    pub tag: String,
    pub normal_samples: usize,
    pub abnormal_samples: usize,
    pub auc: f64,
    pub eer: f64,
    pub tpr_at_target_fpr: f64,
    pub fpr_at_target_tpr: f64,
    pub f1: f64,
    pub f2: f64,
    pub pr_auc: f64,
    pub roc_plot: Option<PathBuf>,
    pub pr_plot: Option<PathBuf>,
}

/// Fixed-point, 6 decimals, minimum width 7. Non-finite values print as `nan`/`inf`.
pub fn format_metric(v: f64) -> String {
    if v.is_nan() {
        format!("{:>7}", "nan")
    } else if v.is_infinite() {
        format!("{:>7}", if v > 0.0 { "inf" } else { "-inf" })
    } else {
        format!("{:7.6}", v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
