// tests/cohesion_render_test.rs

use std::cell::RefCell;
use std::rc::Rc;

use plotters::drawing::IntoDrawingArea;
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
};

use cohesion_diagrams::plot_framework::draw_cohesion_figure;
use cohesion_diagrams::{
    build_figure, constant, expression, plot_cohesion_diagrams, CohesionError, CohesionFigure,
    ExpressionSet, ForceComponent, RenderConfig,
};

#[derive(Default)]
struct Recording {
    texts: Vec<(String, BackendColor)>,
    paths: Vec<(Vec<BackendCoord>, BackendColor)>,
    polygons: Vec<(Vec<BackendCoord>, BackendColor)>,
    presented: bool,
}

/// Backend that records what is drawn instead of rasterizing it, so text
/// layout does not depend on installed fonts.
struct RecordingBackend {
    size: (u32, u32),
    log: Rc<RefCell<Recording>>,
}

type DrawResult<T> = Result<T, DrawingErrorKind<std::io::Error>>;

impl DrawingBackend for RecordingBackend {
    type ErrorType = std::io::Error;

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn ensure_prepared(&mut self) -> DrawResult<()> {
        Ok(())
    }

    fn present(&mut self) -> DrawResult<()> {
        self.log.borrow_mut().presented = true;
        Ok(())
    }

    fn draw_pixel(&mut self, _point: BackendCoord, _color: BackendColor) -> DrawResult<()> {
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        _from: BackendCoord,
        _to: BackendCoord,
        _style: &S,
    ) -> DrawResult<()> {
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        _upper_left: BackendCoord,
        _bottom_right: BackendCoord,
        _style: &S,
        _fill: bool,
    ) -> DrawResult<()> {
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> DrawResult<()> {
        let points = path.into_iter().collect();
        self.log.borrow_mut().paths.push((points, style.color()));
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> DrawResult<()> {
        let points = vert.into_iter().collect();
        self.log.borrow_mut().polygons.push((points, style.color()));
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        _pos: BackendCoord,
    ) -> DrawResult<()> {
        self.log
            .borrow_mut()
            .texts
            .push((text.to_string(), style.color()));
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        _style: &TStyle,
    ) -> DrawResult<(u32, u32)> {
        Ok((text.chars().count() as u32 * 7, 12))
    }
}

fn record(figure: &CohesionFigure, title: Option<&str>) -> Recording {
    let log = Rc::new(RefCell::new(Recording::default()));
    let backend = RecordingBackend {
        size: (600, 900),
        log: Rc::clone(&log),
    };
    let root_area = backend.into_drawing_area();
    draw_cohesion_figure(&root_area, figure, title).unwrap();
    root_area.present().unwrap();
    drop(root_area);
    Rc::try_unwrap(log).ok().unwrap().into_inner()
}

fn same_rgb(color: &BackendColor, component: ForceComponent) -> bool {
    let c = component.color();
    color.rgb == (c.0, c.1, c.2)
}

fn gapped_beam() -> (Vec<(f64, f64)>, ExpressionSet) {
    let intervals = vec![(0.0, 1.0), (2.0, 3.0)];
    let expressions = ExpressionSet::new()
        .with(ForceComponent::N, vec![constant(400.0), constant(-200.0)])
        .with(
            ForceComponent::Mfy,
            vec![expression(|x| 100.0 * x), expression(|x| 50.0 * (3.0 - x))],
        )
        .with(
            ForceComponent::Tz,
            vec![constant(10.0), expression(|x| 10.0 - x)],
        );
    (intervals, expressions)
}

#[test]
fn test_one_titled_subplot_per_component_in_order() {
    let (intervals, expressions) = gapped_beam();
    let figure = build_figure(&intervals, &expressions, 20).unwrap();
    let recording = record(&figure, Some("Gapped beam"));

    let labels: Vec<ForceComponent> = recording
        .texts
        .iter()
        .filter_map(|(text, color)| {
            figure
                .components()
                .into_iter()
                .find(|c| *text == c.label() && same_rgb(color, *c))
        })
        .collect();
    assert_eq!(
        labels,
        vec![ForceComponent::N, ForceComponent::Mfy, ForceComponent::Tz]
    );
    assert!(recording.texts.iter().any(|(t, _)| t == "Gapped beam"));
    assert!(recording.presented);
}

#[test]
fn test_x_description_only_on_bottom_subplot() {
    let (intervals, expressions) = gapped_beam();
    let figure = build_figure(&intervals, &expressions, 5).unwrap();
    let recording = record(&figure, None);
    let count = recording.texts.iter().filter(|(t, _)| t == "x [m]").count();
    assert_eq!(count, 1);
}

#[test]
fn test_one_fill_and_line_per_segment() {
    let (intervals, expressions) = gapped_beam();
    let figure = build_figure(&intervals, &expressions, 10).unwrap();
    let recording = record(&figure, None);

    for component in figure.components() {
        let fills: Vec<_> = recording
            .polygons
            .iter()
            .filter(|(_, color)| same_rgb(color, component))
            .collect();
        assert_eq!(fills.len(), 2, "{component} fills");
        for (_, color) in &fills {
            assert!((color.alpha - 0.1).abs() < 1e-9);
        }

        let lines: Vec<_> = recording
            .paths
            .iter()
            .filter(|(_, color)| same_rgb(color, component) && color.alpha > 0.99)
            .collect();
        assert!(lines.len() >= 2, "{component} lines");
    }
}

#[test]
fn test_no_line_drawn_across_gap() {
    let (intervals, expressions) = gapped_beam();
    let figure = build_figure(&intervals, &expressions, 10).unwrap();
    let recording = record(&figure, None);

    for component in figure.components() {
        let lines: Vec<&Vec<BackendCoord>> = recording
            .paths
            .iter()
            .filter(|(_, color)| same_rgb(color, component) && color.alpha > 0.99)
            .map(|(points, _)| points)
            .collect();
        let all_x: Vec<i32> = lines.iter().flat_map(|p| p.iter().map(|c| c.0)).collect();
        let total = all_x.iter().max().unwrap() - all_x.iter().min().unwrap();
        for points in lines {
            let lo = points.iter().map(|c| c.0).min().unwrap();
            let hi = points.iter().map(|c| c.0).max().unwrap();
            // Each interval covers a third of the x range; a line across
            // the gap would cover at least two thirds.
            assert!(hi - lo < total / 2, "{component} line spans the gap");
        }
    }
}

#[test]
fn test_nan_value_breaks_line_and_fill() {
    let expressions = ExpressionSet::new().with(
        ForceComponent::N,
        vec![expression(|x| if x == 2.0 { f64::NAN } else { 100.0 })],
    );
    let figure = build_figure(&[(0.0, 4.0)], &expressions, 5).unwrap();
    let recording = record(&figure, None);

    let line_lengths: Vec<usize> = recording
        .paths
        .iter()
        .filter(|(_, color)| same_rgb(color, ForceComponent::N) && color.alpha > 0.99)
        .map(|(points, _)| points.len())
        .collect();
    assert_eq!(line_lengths, vec![2, 2]);

    let fills = recording
        .polygons
        .iter()
        .filter(|(_, color)| same_rgb(color, ForceComponent::N))
        .count();
    assert_eq!(fills, 2);
}

#[test]
fn test_tick_labels_are_drawn() {
    let (intervals, expressions) = gapped_beam();
    let figure = build_figure(&intervals, &expressions, 10).unwrap();
    let recording = record(&figure, None);
    let texts: Vec<&str> = recording.texts.iter().map(|(t, _)| t.as_str()).collect();

    for label in ["0", "1", "2", "3", "400", "-200", "100", "50"] {
        assert!(texts.contains(&label), "missing tick label {label}");
    }
}

#[test]
fn test_mismatch_fails_without_writing_output() {
    let intervals = [(0.0, 2.0), (2.0, 5.0)];
    let expressions = ExpressionSet::new().with(ForceComponent::Ty, vec![constant(1.0)]);
    let output = std::env::temp_dir().join(format!(
        "cohesion_mismatch_{}.png",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&output);

    let err = plot_cohesion_diagrams(&RenderConfig::default(), &intervals, &expressions, &output)
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<CohesionError>(),
        Some(&CohesionError::LengthMismatch {
            component: ForceComponent::Ty,
            expected: 2,
            found: 1,
        })
    );
    assert!(!output.exists());
}

#[test]
fn test_invalid_figure_size_fails_before_drawing() {
    let expressions = ExpressionSet::new().with(ForceComponent::N, vec![constant(1.0)]);
    let config = RenderConfig {
        figure_size: (-1.0, 4.0),
        ..RenderConfig::default()
    };
    let output = std::env::temp_dir().join(format!("cohesion_size_{}.png", std::process::id()));
    let err = plot_cohesion_diagrams(&config, &[(0.0, 1.0)], &expressions, &output).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CohesionError>(),
        Some(CohesionError::InvalidFigureSize { .. })
    ));
    assert!(!output.exists());
}
