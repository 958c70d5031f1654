use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::report::{ReportError, format_metric};

const FIREBRICK: RGBColor = RGBColor(178, 34, 34);
const ROYALBLUE: RGBColor = RGBColor(65, 105, 225);
const SIZE: (u32, u32) = (640, 480);

struct CurvePlot<'a> {
    title: String,
    x_desc: &'a str,
    y_desc: &'a str,
    area: f64,
}

pub fn roc_plot_path(figure_dir: &Path, tag: &str) -> PathBuf {
    figure_dir.join(format!("{tag}.png"))
}

pub fn pr_plot_path(figure_dir: &Path, tag: &str) -> PathBuf {
    figure_dir.join(format!("{tag}_PRC.png"))
}

pub fn ensure_figure_dir(figure_dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(figure_dir).map_err(|source| ReportError::Io {
        path: figure_dir.to_path_buf(),
        source,
    })
}

/// FPR against TPR with the chance diagonal.
pub fn render_roc_plot(
    path: &Path,
    tag: &str,
    points: impl IntoIterator<Item = (f64, f64)>,
    auc: f64,
) -> Result<(), ReportError> {
    let spec = CurvePlot {
        title: format!("{tag} RoC"),
        x_desc: "False Positive Rate",
        y_desc: "True Positive Rate",
        area: auc,
    };
    render_curve(path, &spec, points)
}

/// Precision against recall with the diagonal reference.
pub fn render_pr_plot(
    path: &Path,
    tag: &str,
    points: impl IntoIterator<Item = (f64, f64)>,
    pr_auc: f64,
) -> Result<(), ReportError> {
    let spec = CurvePlot {
        title: format!("{tag} RoC"),
        x_desc: "Precision",
        y_desc: "Recall",
        area: pr_auc,
    };
    render_curve(path, &spec, points)
}

fn render_curve(
    path: &Path,
    spec: &CurvePlot<'_>,
    points: impl IntoIterator<Item = (f64, f64)>,
) -> Result<(), ReportError> {
    let plot_err = |e: &dyn std::fmt::Display| ReportError::Plot {
        path: path.to_path_buf(),
        msg: e.to_string(),
    };

    let finite = points
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect::<Vec<_>>();

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_err(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, 0f64..1.05f64)
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .draw()
        .map_err(|e| plot_err(&e))?;

    chart
        .draw_series(LineSeries::new(finite, FIREBRICK.stroke_width(2)))
        .map_err(|e| plot_err(&e))?
        .label(format!("AUC: {}", format_metric(spec.area)))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FIREBRICK.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            vec![(0.0, 0.0), (1.0, 1.0)],
            6,
            4,
            ROYALBLUE.stroke_width(1),
        ))
        .map_err(|e| plot_err(&e))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| plot_err(&e))?;

    root.present().map_err(|e| plot_err(&e))?;
    Ok(())
}
