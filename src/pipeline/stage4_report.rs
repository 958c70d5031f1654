use std::path::Path;

use crate::model::buckets::ScoreBuckets;
use crate::pipeline::stage2_roc::Stage2Output;
use crate::pipeline::stage3_decision::Stage3Output;
use crate::report::plot::{pr_plot_path, render_pr_plot, render_roc_plot, roc_plot_path};
use crate::report::{ReportError, TagMetrics};

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub tag: &'a str,
    pub buckets: &'a ScoreBuckets,
    pub roc: &'a Stage2Output,
    pub decision: &'a Stage3Output,
}

pub fn build_tag_metrics(input: &Stage4Input<'_>) -> TagMetrics {
    TagMetrics {
        tag: input.tag.to_string(),
        normal_samples: input.buckets.normal.len(),
        abnormal_samples: input.buckets.abnormal.len(),
        auc: input.roc.auc,
        eer: input.roc.points.eer,
        tpr_at_target_fpr: input.roc.points.tpr_at_fpr,
        fpr_at_target_tpr: input.roc.points.fpr_at_tpr,
        f1: input.decision.f1,
        f2: input.decision.f2,
        pr_auc: input.decision.pr_auc,
        roc_plot: None,
        pr_plot: None,
    }
}

/// Renders both plots into `figure_dir` and returns the tag's metrics.
pub fn write_reports(
    input: &Stage4Input<'_>,
    figure_dir: &Path,
) -> Result<TagMetrics, ReportError> {
    let mut metrics = build_tag_metrics(input);

    let roc_path = roc_plot_path(figure_dir, input.tag);
    render_roc_plot(&roc_path, input.tag, input.roc.curve.points(), input.roc.auc)?;
    tracing::info!("wrote {}", roc_path.display());

    let pr_path = pr_plot_path(figure_dir, input.tag);
    render_pr_plot(
        &pr_path,
        input.tag,
        input.decision.pr_curve.points(),
        input.decision.pr_auc,
    )?;
    tracing::info!("wrote {}", pr_path.display());

    metrics.roc_plot = Some(roc_path);
    metrics.pr_plot = Some(pr_path);
    Ok(metrics)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
