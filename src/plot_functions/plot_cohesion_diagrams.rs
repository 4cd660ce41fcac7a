// src/plot_functions/plot_cohesion_diagrams.rs

use plotters::backend::{BitMapBackend, SVGBackend};
use plotters::drawing::IntoDrawingArea;

use std::error::Error;
use std::path::Path;

use crate::data_analysis::cohesion_curve::{build_figure, CohesionFigure};
use crate::expression_set::ExpressionSet;
use crate::plot_framework::{draw_cohesion_figure, RenderConfig};
use crate::types::Interval;

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Writes an already built figure to `output_path`: SVG for a `.svg`
/// extension, PNG otherwise.
pub fn save_cohesion_figure(
    figure: &CohesionFigure,
    config: &RenderConfig,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let size = config.pixel_size()?;
    let title = config.title.as_deref();

    if is_svg_path(output_path) {
        let root_area = SVGBackend::new(output_path, size).into_drawing_area();
        draw_cohesion_figure(&root_area, figure, title)?;
        root_area.present()?;
    } else {
        let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_cohesion_figure(&root_area, figure, title)?;
        root_area.present()?;
    }

    println!(
        "  Cohesion diagrams ({} subplots) saved as '{}'.",
        figure.curves.len(),
        output_path.display()
    );
    Ok(())
}

/// Samples every component of `expressions` over `intervals` and draws the
/// stacked cohesion diagrams to `output_path`.
///
/// The figure is built and validated before the output file is created,
/// so invalid input never leaves a partial image behind. Returns the
/// figure that was drawn.
pub fn plot_cohesion_diagrams(
    config: &RenderConfig,
    intervals: &[Interval],
    expressions: &ExpressionSet,
    output_path: &Path,
) -> Result<CohesionFigure, Box<dyn Error>> {
    config.pixel_size()?;
    let figure = build_figure(intervals, expressions, config.samples_per_interval)?;
    save_cohesion_figure(&figure, config, output_path)?;
    Ok(figure)
}
