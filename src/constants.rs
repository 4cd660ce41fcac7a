// src/constants.rs

use plotters::style::RGBColor;

// Default figure size in inches, converted to pixels with DEFAULT_DPI.
pub const DEFAULT_FIGURE_WIDTH_IN: f64 = 12.0;
pub const DEFAULT_FIGURE_HEIGHT_IN: f64 = 12.0;
pub const DEFAULT_DPI: f64 = 100.0;

// Evenly spaced samples per interval (endpoints included).
pub const DEFAULT_SAMPLES_PER_INTERVAL: usize = 50;
pub const MIN_SAMPLES_PER_INTERVAL: usize = 2;

// Opacity of the area between a curve and the zero line.
pub const FILL_OPACITY: f64 = 0.1;
pub const GRID_OPACITY: f64 = 0.3;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_ZERO: u32 = 1;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_TICK_LABEL: i32 = 12;

// Top margin reserved for the figure title, in pixels.
pub const MAIN_TITLE_MARGIN_PX: i32 = 40;

// Y range padding: fraction of the span, or a fixed value for flat curves.
pub const RANGE_PADDING_FRACTION: f64 = 0.1;
pub const RANGE_PADDING_FLAT: f64 = 0.5;

pub const X_AXIS_DESCRIPTION: &str = "x [m]";

// --- Force component colours (matplotlib named colours) ---
pub const COLOR_OLIVE: RGBColor = RGBColor(128, 128, 0);
pub const COLOR_BLUE: RGBColor = RGBColor(0, 0, 255);
pub const COLOR_CYAN: RGBColor = RGBColor(0, 255, 255);
pub const COLOR_ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const COLOR_PURPLE: RGBColor = RGBColor(128, 0, 128);
pub const COLOR_RED: RGBColor = RGBColor(255, 0, 0);
pub const COLOR_GRID: RGBColor = RGBColor(176, 176, 176);
