// src/plot_framework.rs

use plotters::backend::DrawingBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::element::{PathElement, Polygon, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::constants::{
    COLOR_GRID, DEFAULT_DPI, DEFAULT_FIGURE_HEIGHT_IN, DEFAULT_FIGURE_WIDTH_IN,
    DEFAULT_SAMPLES_PER_INTERVAL, FILL_OPACITY, GRID_OPACITY, LINE_WIDTH_PLOT, LINE_WIDTH_ZERO,
    MAIN_TITLE_MARGIN_PX, RANGE_PADDING_FLAT, RANGE_PADDING_FRACTION, X_AXIS_DESCRIPTION,
};
use crate::data_analysis::cohesion_curve::{CohesionCurve, CohesionFigure};
use crate::error::CohesionError;
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_MAIN_TITLE, FONT_TUPLE_TICK_LABEL,
};

/// Figure size and sampling settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// `(width, height)` in inches.
    pub figure_size: (f64, f64),
    pub dpi: f64,
    pub samples_per_interval: usize,
    pub title: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            figure_size: (DEFAULT_FIGURE_WIDTH_IN, DEFAULT_FIGURE_HEIGHT_IN),
            dpi: DEFAULT_DPI,
            samples_per_interval: DEFAULT_SAMPLES_PER_INTERVAL,
            title: None,
        }
    }
}

impl RenderConfig {
    /// Figure size in pixels.
    pub fn pixel_size(&self) -> Result<(u32, u32), CohesionError> {
        let (width, height) = self.figure_size;
        let to_px = |inches: f64| (inches * self.dpi).round();
        let (w, h) = (to_px(width), to_px(height));
        if !(w >= 1.0 && h >= 1.0 && w <= u32::MAX as f64 && h <= u32::MAX as f64) {
            return Err(CohesionError::InvalidFigureSize { width, height });
        }
        Ok((w as u32, h as u32))
    }
}

/// Calculate plot range with padding.
/// Adds a fraction of the span, or a fixed padding for flat curves.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = max - min;
    let padding = if range < 1e-9 {
        RANGE_PADDING_FLAT.max(max.abs() * RANGE_PADDING_FRACTION)
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Formats an axis tick value. Large magnitudes use "k"/"M" notation,
/// fractional values keep two decimals and nonzero values below 0.01 use
/// exponent notation so they never read as the zero tick.
pub fn format_tick_label(value: f64) -> String {
    // Collapse -0.0 so the zero tick never prints as "-0".
    let value = value + 0.0;
    if value != 0.0 && value.abs() < 0.01 {
        format!("{value:.2e}")
    } else if value.abs() >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if value.abs() >= 10_000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() != 0.0 {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Draws one component's subplot: grid and tick labels at the curve's
/// ticks, the zero line, the filled area under each segment and the curve.
fn draw_cohesion_chart<DB>(
    area: &DrawingArea<DB, Shift>,
    curve: &CohesionCurve,
    show_x_desc: bool,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = curve.component.color();

    let (x_first, x_last) = curve.x_limits();
    let (x_min, x_max) = if x_last > x_first {
        (x_first, x_last)
    } else {
        calculate_range(x_first, x_last)
    };
    let (y_lo, y_hi) = curve.y_value_range();
    let (y_min, y_max) = calculate_range(y_lo, y_hi);

    let mut chart = ChartBuilder::on(area)
        .caption(
            curve.component.label(),
            FONT_TUPLE_CHART_TITLE.into_font().color(&color),
        )
        .margin(5)
        .x_label_area_size(if show_x_desc { 45 } else { 25 })
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // Axis lines only; grid and tick labels are drawn at the exact ticks below.
    let blank_label = |_: &f64| String::new();
    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .set_all_tick_mark_size(0)
            .x_label_formatter(&blank_label)
            .y_label_formatter(&blank_label)
            .axis_desc_style(FONT_TUPLE_AXIS_LABEL);
        if show_x_desc {
            mesh.x_desc(X_AXIS_DESCRIPTION);
        }
        mesh.draw()?;
    }

    let grid_style = COLOR_GRID.mix(GRID_OPACITY).stroke_width(1);
    let x_ticks: Vec<f64> = curve
        .x_ticks
        .iter()
        .copied()
        .filter(|x| x.is_finite() && *x >= x_min && *x <= x_max)
        .collect();
    let y_ticks: Vec<f64> = curve
        .y_ticks
        .iter()
        .copied()
        .filter(|y| y.is_finite())
        .collect();

    for &x in &x_ticks {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, y_min), (x, y_max)],
            grid_style,
        )))?;
    }
    for &y in &y_ticks {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(x_min, y), (x_max, y)],
            grid_style,
        )))?;
    }

    chart.draw_series(LineSeries::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(LINE_WIDTH_ZERO),
    ))?;

    let fill_style = color.mix(FILL_OPACITY).filled();
    for run in curve.finite_runs() {
        if let (Some(&(x_start, _)), Some(&(x_end, _))) = (run.first(), run.last()) {
            let mut outline = Vec::with_capacity(run.len() + 2);
            outline.push((x_start, 0.0));
            outline.extend(run.iter().copied());
            outline.push((x_end, 0.0));
            chart.draw_series(std::iter::once(Polygon::new(outline, fill_style)))?;
        }
        chart.draw_series(LineSeries::new(run, color.stroke_width(LINE_WIDTH_PLOT)))?;
    }

    // Tick labels, positioned from the chart's backend coordinates.
    let area_offset = area.get_base_pixel();
    let x_label_style = FONT_TUPLE_TICK_LABEL
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for &x in &x_ticks {
        let (px, py) = chart.backend_coord(&(x, y_min));
        area.draw(&Text::new(
            format_tick_label(x),
            (px - area_offset.0, py - area_offset.1 + 4),
            x_label_style.clone(),
        ))?;
    }
    let y_label_style = FONT_TUPLE_TICK_LABEL
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for &y in &y_ticks {
        let (px, py) = chart.backend_coord(&(x_min, y));
        area.draw(&Text::new(
            format_tick_label(y),
            (px - area_offset.0 - 4, py - area_offset.1),
            y_label_style.clone(),
        ))?;
    }

    Ok(())
}

/// Draws every curve of `figure` as a vertical stack of subplots sharing
/// the x axis, in the figure's component order.
pub fn draw_cohesion_figure<DB>(
    root_area: &DrawingArea<DB, Shift>,
    figure: &CohesionFigure,
    title: Option<&str>,
) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root_area.fill(&WHITE)?;
    let plot_area = match title {
        Some(title) => {
            root_area.draw(&Text::new(
                title.to_string(),
                (10, 10),
                FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
            ))?;
            root_area.margin(MAIN_TITLE_MARGIN_PX, 5, 5, 5)
        }
        None => root_area.margin(5, 5, 5, 5),
    };

    if figure.curves.is_empty() {
        return Ok(());
    }
    let sub_plot_areas = plot_area.split_evenly((figure.curves.len(), 1));
    let last_index = figure.curves.len() - 1;
    for (index, (area, curve)) in sub_plot_areas.iter().zip(&figure.curves).enumerate() {
        draw_cohesion_chart(area, curve, index == last_index)?;
    }
    Ok(())
}
