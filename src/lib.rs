// src/lib.rs - Library interface for the cohesion diagram renderer

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod expression_set;
pub mod font_config;
pub mod force_components;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use data_analysis::cohesion_curve::{build_figure, CohesionCurve, CohesionFigure};
pub use data_analysis::sampling::IntervalValue;
pub use error::CohesionError;
pub use expression_set::{constant, expression, ExpressionSet};
pub use force_components::ForceComponent;
pub use plot_framework::RenderConfig;
pub use plot_functions::plot_cohesion_diagrams::plot_cohesion_diagrams;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
