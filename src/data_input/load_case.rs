// src/data_input/load_case.rs

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use ndarray::Array1;

use crate::data_analysis::sampling::IntervalValue;
use crate::error::CohesionError;
use crate::expression_set::ExpressionSet;
use crate::force_components::ForceComponent;
use crate::types::{Interval, IntervalFunction};

/// A beam with its intervals and cohesion expressions, ready to render.
#[derive(Debug)]
pub struct CohesionCase {
    pub title: String,
    pub intervals: Vec<Interval>,
    pub expressions: ExpressionSet,
}

/// Polynomial in `(x - origin)`, coefficients in ascending powers.
///
/// A single coefficient describes a constant and evaluates to a scalar;
/// anything longer evaluates sample by sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub origin: f64,
}

impl Polynomial {
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = x - self.origin;
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * t + c)
    }

    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    pub fn into_interval_function(self) -> IntervalFunction {
        if self.is_constant() {
            let value = self.coefficients.first().copied().unwrap_or(0.0);
            Box::new(move |_: &Array1<f64>| IntervalValue::Scalar(value))
        } else {
            Box::new(move |x: &Array1<f64>| IntervalValue::Samples(x.mapv(|v| self.evaluate(v))))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub component: String,
    pub pieces: Vec<Polynomial>,
}

/// On-disk load case (JSON). Components keep the order they are listed in.
///
/// ```json
/// {
///   "title": "Cantilever, end load",
///   "intervals": [[0.0, 2.0]],
///   "components": [
///     { "component": "Ty",  "pieces": [{ "coefficients": [1000.0] }] },
///     { "component": "Mfz", "pieces": [{ "coefficients": [0.0, 1000.0], "origin": 2.0 }] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseFile {
    #[serde(default)]
    pub title: Option<String>,
    pub intervals: Vec<Interval>,
    pub components: Vec<ComponentEntry>,
}

impl LoadCaseFile {
    pub fn from_json_str(text: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks the file and turns its polynomials into interval functions.
    ///
    /// Interval/function count mismatches are left to
    /// [`build_figure`](crate::data_analysis::cohesion_curve::build_figure),
    /// which reports them per component.
    pub fn into_case(self, fallback_title: &str) -> Result<CohesionCase, CohesionError> {
        for (index, &(start, end)) in self.intervals.iter().enumerate() {
            if !start.is_finite() || !end.is_finite() {
                return Err(CohesionError::InvalidLoadCase(format!(
                    "interval {index} has a non-finite bound"
                )));
            }
        }

        let mut expressions = ExpressionSet::new();
        for entry in self.components {
            let component: ForceComponent = entry.component.parse()?;
            if expressions.get(component).is_some() {
                return Err(CohesionError::InvalidLoadCase(format!(
                    "component {component} listed more than once"
                )));
            }
            if let Some(index) = entry.pieces.iter().position(|p| p.coefficients.is_empty()) {
                return Err(CohesionError::InvalidLoadCase(format!(
                    "{component}, piece {index}: no coefficients"
                )));
            }
            let functions = entry
                .pieces
                .into_iter()
                .map(Polynomial::into_interval_function)
                .collect();
            expressions.insert(component, functions);
        }

        Ok(CohesionCase {
            title: self.title.unwrap_or_else(|| fallback_title.to_string()),
            intervals: self.intervals,
            expressions,
        })
    }
}
