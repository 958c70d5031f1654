use thiserror::Error;

use crate::input::InputError;
use crate::metrics::MetricError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("metric error for tag {tag}: {source}")]
    Metric {
        tag: String,
        #[source]
        source: MetricError,
    },
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AppError {
    pub fn is_target_not_found(&self) -> bool {
        matches!(self, AppError::Input(InputError::TargetNotFound(_)))
    }
}
