// src/data_input/presets.rs

// Built-in beams with closed-form cohesion expressions. Loads in N,
// distributed loads in N/m, lengths in m.

use crate::data_input::load_case::CohesionCase;
use crate::error::CohesionError;
use crate::expression_set::{constant, expression, ExpressionSet};
use crate::force_components::ForceComponent;

/// `(name, description)` of every preset.
pub const PRESETS: [(&str, &str); 4] = [
    ("cantilever", "Cantilever clamped at x = 0, point load at the free end"),
    ("simply-supported", "Simply supported beam, off-centre point load"),
    ("uniform-load", "Simply supported beam under a uniform distributed load"),
    ("shaft", "Shaft with stepwise axial load and torque"),
];

pub fn preset(name: &str) -> Result<CohesionCase, CohesionError> {
    match name {
        "cantilever" => Ok(cantilever(2.0, 1000.0)),
        "simply-supported" => Ok(simply_supported(4.0, 1.5, 2000.0)),
        "uniform-load" => Ok(uniform_load(6.0, 500.0)),
        "shaft" => Ok(shaft()),
        _ => Err(CohesionError::UnknownPreset(name.to_string())),
    }
}

/// Clamped at x = 0, downward load `f` at x = `length`.
///
/// Every preset uses the same sign convention: dMfz/dx = -Ty.
pub fn cantilever(length: f64, f: f64) -> CohesionCase {
    CohesionCase {
        title: format!("Cantilever, L = {length} m, F = {f} N"),
        intervals: vec![(0.0, length)],
        expressions: ExpressionSet::new()
            .with(ForceComponent::Ty, vec![constant(-f)])
            .with(
                ForceComponent::Mfz,
                vec![expression(move |x| f * (x - length))],
            ),
    }
}

/// Pinned at both ends, downward load `f` at x = `a`.
pub fn simply_supported(length: f64, a: f64, f: f64) -> CohesionCase {
    let reaction_left = f * (length - a) / length;
    let reaction_right = f * a / length;
    CohesionCase {
        title: format!("Simply supported, L = {length} m, F = {f} N at x = {a} m"),
        intervals: vec![(0.0, a), (a, length)],
        expressions: ExpressionSet::new()
            .with(
                ForceComponent::Ty,
                vec![constant(-reaction_left), constant(reaction_right)],
            )
            .with(
                ForceComponent::Mfz,
                vec![
                    expression(move |x| reaction_left * x),
                    expression(move |x| reaction_right * (length - x)),
                ],
            ),
    }
}

/// Pinned at both ends, uniform downward load `q` over the whole span.
pub fn uniform_load(length: f64, q: f64) -> CohesionCase {
    CohesionCase {
        title: format!("Simply supported, L = {length} m, q = {q} N/m"),
        intervals: vec![(0.0, length)],
        expressions: ExpressionSet::new()
            .with(
                ForceComponent::Ty,
                vec![expression(move |x| q * (x - length / 2.0))],
            )
            .with(
                ForceComponent::Mfz,
                vec![expression(move |x| q * x * (length - x) / 2.0)],
            ),
    }
}

pub fn shaft() -> CohesionCase {
    CohesionCase {
        title: "Shaft, stepwise axial load and torque".to_string(),
        intervals: vec![(0.0, 0.5), (0.5, 1.2), (1.2, 2.0)],
        expressions: ExpressionSet::new()
            .with(
                ForceComponent::N,
                vec![constant(1500.0), constant(1500.0), constant(0.0)],
            )
            .with(
                ForceComponent::Mt,
                vec![constant(0.0), constant(120.0), constant(-80.0)],
            ),
    }
}
