use crate::report::{TagMetrics, format_metric};

/// `AUC, EER, F1, F2, PR-AUC`
pub fn render_metrics_line(m: &TagMetrics) -> String {
    [m.auc, m.eer, m.f1, m.f2, m.pr_auc]
        .iter()
        .map(|&v| format_metric(v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
