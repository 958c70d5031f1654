mod error;
mod input;
mod logging;
mod metrics;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::error::AppError;
use crate::input::{ALL_TARGETS, load_address_book};
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_aggregate::run_stage1;
use crate::pipeline::stage2_roc::run_stage2;
use crate::pipeline::stage3_decision::run_stage3;
use crate::pipeline::stage4_report::{Stage4Input, write_reports};
use crate::report::TagMetrics;
use crate::report::json::{RunSummary, write_summary_json};
use crate::report::plot::ensure_figure_dir;
use crate::report::text::render_metrics_line;

const TARGET_NOT_FOUND: &str = "Target Not found.";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "flowscore-eval",
    version,
    about = "ROC, EER and F-score evaluation of per-address traffic anomaly scores"
)]
struct Cli {
    /// Tag to analyze, or ALL for every non-numeric tag.
    #[arg(short = 't', long, default_value = ALL_TARGETS)]
    target: String,

    /// JSON object mapping each tag to its malicious IPv4 addresses.
    #[arg(long, default_value = "./address.json")]
    address: PathBuf,

    /// Directory holding one result sub-directory per tag.
    #[arg(long, default_value = "../result/")]
    results: PathBuf,

    /// Output directory for the ROC and PR plots.
    #[arg(long, default_value = "./figure/")]
    figures: PathBuf,

    /// Scores strictly above this value are positive predictions.
    #[arg(long, default_value_t = 6.0)]
    threshold: f64,

    /// Also write every tag's metrics to this JSON file.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
struct RunConfig {
    target: String,
    address_path: PathBuf,
    results_root: PathBuf,
    figure_dir: PathBuf,
    thresholds: ThresholdProfile,
    json_path: Option<PathBuf>,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            target: cli.target,
            address_path: cli.address,
            results_root: cli.results,
            figure_dir: cli.figures,
            thresholds: ThresholdProfile::with_decision_threshold(cli.threshold),
            json_path: cli.json,
        }
    }
}

fn main() {
    logging::init();
    let config = RunConfig::from(Cli::parse());
    if let Err(err) = run(&config) {
        if err.is_target_not_found() {
            println!("{TARGET_NOT_FOUND}");
        } else {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    ensure_figure_dir(&config.figure_dir)?;

    let book = load_address_book(&config.address_path)?;
    let tags = book.select(&config.target)?;

    let mut all = Vec::with_capacity(tags.len());
    for (tag, addrs) in tags {
        let metrics = analyze_tag(config, tag, addrs)?;
        println!("{}", render_metrics_line(&metrics));
        all.push(metrics);
    }

    if let Some(path) = &config.json_path {
        let summary = RunSummary::new(config.thresholds.decision_threshold, &all);
        write_summary_json(path, &summary)?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}

fn analyze_tag(config: &RunConfig, tag: &str, addrs: &[String]) -> Result<TagMetrics, AppError> {
    let _span = tracing::info_span!("tag", tag).entered();
    let metric_err = |source| AppError::Metric {
        tag: tag.to_string(),
        source,
    };

    let buckets = run_stage1(&config.results_root, tag, addrs)?;
    let roc = run_stage2(&buckets, &config.thresholds).map_err(metric_err)?;
    let decision = run_stage3(&buckets, &config.thresholds).map_err(metric_err)?;

    let input = Stage4Input {
        tag,
        buckets: &buckets,
        roc: &roc,
        decision: &decision,
    };
    Ok(write_reports(&input, &config.figure_dir)?)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
