// src/main.rs

use clap::Parser;
use std::error::Error;
use std::path::{Path, PathBuf};

use cohesion_diagrams::constants::{
    DEFAULT_DPI, DEFAULT_FIGURE_HEIGHT_IN, DEFAULT_FIGURE_WIDTH_IN, DEFAULT_SAMPLES_PER_INTERVAL,
};
use cohesion_diagrams::data_analysis::cohesion_curve::{build_figure, CohesionFigure};
use cohesion_diagrams::data_input::load_case::{CohesionCase, LoadCaseFile};
use cohesion_diagrams::data_input::presets::{preset, PRESETS};
use cohesion_diagrams::plot_framework::{format_tick_label, RenderConfig};
use cohesion_diagrams::plot_functions::plot_cohesion_diagrams::save_cohesion_figure;

/// Render stacked cohesion diagrams (N, Ty, Tz, Mt, Mfy, Mfz) of a beam.
#[derive(Debug, Parser)]
#[command(name = "cohesion_diagrams", version, about)]
struct Cli {
    /// Built-in beam to render (see --list-presets)
    #[arg(long, conflicts_with = "load_case")]
    preset: Option<String>,

    /// JSON load case with intervals and piecewise polynomials
    #[arg(long, value_name = "FILE")]
    load_case: Option<PathBuf>,

    /// Output image; .svg writes SVG, anything else PNG
    #[arg(short, long, default_value = "cohesion_diagrams.png")]
    output: PathBuf,

    /// Figure width in inches
    #[arg(long, default_value_t = DEFAULT_FIGURE_WIDTH_IN)]
    width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = DEFAULT_FIGURE_HEIGHT_IN)]
    height: f64,

    /// Pixels per inch
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: f64,

    /// Evenly spaced samples per interval
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES_PER_INTERVAL)]
    samples: usize,

    /// Figure title (defaults to the load case title)
    #[arg(long)]
    title: Option<String>,

    /// Print the ticks of every subplot
    #[arg(short, long)]
    verbose: bool,

    /// List built-in presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn load_case(cli: &Cli) -> Result<CohesionCase, Box<dyn Error>> {
    if let Some(path) = &cli.load_case {
        let fallback_title = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        return Ok(LoadCaseFile::from_path(path)?.into_case(&fallback_title)?);
    }
    let name = cli.preset.as_deref().unwrap_or("cantilever");
    Ok(preset(name)?)
}

fn format_ticks(ticks: &[f64]) -> String {
    ticks
        .iter()
        .map(|&t| format_tick_label(t))
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_figure_summary(figure: &CohesionFigure) {
    println!("  x ticks: [{}]", format_ticks(&figure.boundary_ticks));
    for curve in &figure.curves {
        let (y_lo, y_hi) = curve.y_value_range();
        println!(
            "  {:<4} range [{}, {}], y ticks: [{}]",
            curve.component.id(),
            format_tick_label(y_lo),
            format_tick_label(y_hi),
            format_ticks(&curve.y_ticks)
        );
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let case = load_case(cli)?;
    let config = RenderConfig {
        figure_size: (cli.width, cli.height),
        dpi: cli.dpi,
        samples_per_interval: cli.samples,
        title: Some(cli.title.clone().unwrap_or_else(|| case.title.clone())),
    };

    println!("\n--- Generating Cohesion Diagrams: {} ---", case.title);
    println!(
        "  {} interval(s), {} component(s), {} samples per interval",
        case.intervals.len(),
        case.expressions.len(),
        config.samples_per_interval
    );

    let figure = build_figure(&case.intervals, &case.expressions, config.samples_per_interval)?;
    if cli.verbose {
        print_figure_summary(&figure);
    }
    save_cohesion_figure(&figure, &config, Path::new(&cli.output))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if cli.list_presets {
        println!("cohesion_diagrams {}", cohesion_diagrams::crate_version());
        for (name, description) in PRESETS {
            println!("  {name:<18} {description}");
        }
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
