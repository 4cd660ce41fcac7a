// src/data_analysis/cohesion_curve.rs

use crate::constants::MIN_SAMPLES_PER_INTERVAL;
use crate::data_analysis::sampling::sample_interval;
use crate::error::CohesionError;
use crate::expression_set::ExpressionSet;
use crate::force_components::ForceComponent;
use crate::types::{CurveSegment, Interval, IntervalFunction};

/// Sampled, stitched curve of one force component, ready to draw.
///
/// Consecutive intervals are separated by a single `NaN` in both `x` and
/// `y`; no line is drawn across that gap.
#[derive(Debug, Clone)]
pub struct CohesionCurve {
    pub component: ForceComponent,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Interval boundaries, deduplicated in first-seen order.
    pub x_ticks: Vec<f64>,
    /// Endpoint or scalar values of each interval plus 0, sorted ascending.
    /// Duplicates are kept.
    pub y_ticks: Vec<f64>,
}

impl CohesionCurve {
    /// First and last x coordinate, used as the x-axis limits.
    pub fn x_limits(&self) -> (f64, f64) {
        match (self.x.first(), self.x.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => (0.0, 0.0),
        }
    }

    /// Number of gap markers between intervals.
    pub fn separator_count(&self) -> usize {
        self.x.iter().filter(|v| v.is_nan()).count()
    }

    /// Splits the curve at the gap markers.
    pub fn segments(&self) -> Vec<CurveSegment> {
        let mut segments = Vec::new();
        let mut current = CurveSegment::new();
        for (&x, &y) in self.x.iter().zip(&self.y) {
            if x.is_nan() {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push((x, y));
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    /// Splits the curve into drawable runs: at the gap markers and at any
    /// non-finite sample value, so no line or fill bridges a missing value.
    pub fn finite_runs(&self) -> Vec<CurveSegment> {
        let mut runs = Vec::new();
        for segment in self.segments() {
            let mut current = CurveSegment::new();
            for (x, y) in segment {
                if y.is_finite() {
                    current.push((x, y));
                } else if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
            if !current.is_empty() {
                runs.push(current);
            }
        }
        runs
    }

    /// Smallest and largest finite value among samples and y ticks.
    /// Always spans 0 since 0 is a y tick.
    pub fn y_value_range(&self) -> (f64, f64) {
        self.y
            .iter()
            .chain(&self.y_ticks)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// All curves of one figure, in subplot order.
#[derive(Debug, Clone)]
pub struct CohesionFigure {
    pub boundary_ticks: Vec<f64>,
    pub curves: Vec<CohesionCurve>,
}

impl CohesionFigure {
    pub fn components(&self) -> Vec<ForceComponent> {
        self.curves.iter().map(|c| c.component).collect()
    }

    pub fn curve(&self, component: ForceComponent) -> Option<&CohesionCurve> {
        self.curves.iter().find(|c| c.component == component)
    }
}

/// Flattens every interval's start and end and removes repeats, keeping
/// the first occurrence. `[(0, 2), (2, 5)]` gives `[0, 2, 5]`.
pub fn boundary_ticks(intervals: &[Interval]) -> Vec<f64> {
    let mut ticks: Vec<f64> = Vec::with_capacity(intervals.len() * 2);
    for &(start, end) in intervals {
        for bound in [start, end] {
            if !ticks.iter().any(|t| t.to_bits() == bound.to_bits() || *t == bound) {
                ticks.push(bound);
            }
        }
    }
    ticks
}

/// Samples each interval function over its interval and stitches the
/// results into one curve.
///
/// `functions` must hold exactly one function per interval.
pub fn build_curve(
    component: ForceComponent,
    intervals: &[Interval],
    functions: &[IntervalFunction],
    samples_per_interval: usize,
    x_ticks: &[f64],
) -> Result<CohesionCurve, CohesionError> {
    if functions.len() != intervals.len() {
        return Err(CohesionError::LengthMismatch {
            component,
            expected: intervals.len(),
            found: functions.len(),
        });
    }

    let capacity = intervals.len() * (samples_per_interval + 1);
    let mut x = Vec::with_capacity(capacity);
    let mut y = Vec::with_capacity(capacity);
    let mut y_ticks = Vec::with_capacity(intervals.len() * 2 + 1);

    for (index, (&interval, function)) in intervals.iter().zip(functions).enumerate() {
        let sampled = sample_interval(component, index, interval, samples_per_interval, function)?;
        if index > 0 {
            x.push(f64::NAN);
            y.push(f64::NAN);
        }
        x.extend(sampled.x.iter());
        y.extend(sampled.y.iter());
        y_ticks.extend(sampled.ticks);
    }

    y_ticks.push(0.0);
    y_ticks.sort_by(f64::total_cmp);

    Ok(CohesionCurve {
        component,
        x,
        y,
        x_ticks: x_ticks.to_vec(),
        y_ticks,
    })
}

/// Validates the inputs, then builds one curve per component of
/// `expressions`, in insertion order.
///
/// Every check runs before any function is evaluated, so a mismatched
/// input never produces a partial figure.
pub fn build_figure(
    intervals: &[Interval],
    expressions: &ExpressionSet,
    samples_per_interval: usize,
) -> Result<CohesionFigure, CohesionError> {
    if intervals.is_empty() {
        return Err(CohesionError::EmptyIntervals);
    }
    if expressions.is_empty() {
        return Err(CohesionError::EmptyExpressionSet);
    }
    if samples_per_interval < MIN_SAMPLES_PER_INTERVAL {
        return Err(CohesionError::TooFewSamples {
            min: MIN_SAMPLES_PER_INTERVAL,
            found: samples_per_interval,
        });
    }
    for (component, functions) in expressions.iter() {
        if functions.len() != intervals.len() {
            return Err(CohesionError::LengthMismatch {
                component,
                expected: intervals.len(),
                found: functions.len(),
            });
        }
    }

    let x_ticks = boundary_ticks(intervals);
    let curves = expressions
        .iter()
        .map(|(component, functions)| {
            build_curve(component, intervals, functions, samples_per_interval, &x_ticks)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CohesionFigure {
        boundary_ticks: x_ticks,
        curves,
    })
}
