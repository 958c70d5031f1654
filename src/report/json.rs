use std::path::Path;

use serde::Serialize;

use crate::report::{ReportError, TagMetrics};

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub threshold: f64,
    pub tags: &'a [TagMetrics],
}

impl<'a> RunSummary<'a> {
    pub fn new(threshold: f64, tags: &'a [TagMetrics]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            threshold,
            tags,
        }
    }
}

pub fn render_summary_json(summary: &RunSummary<'_>) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn write_summary_json(path: &Path, summary: &RunSummary<'_>) -> Result<(), ReportError> {
    let json = render_summary_json(summary)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json + "\n").map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
