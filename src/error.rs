// src/error.rs

use thiserror::Error;

use crate::force_components::ForceComponent;

/// Errors raised while validating inputs or building cohesion curves.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CohesionError {
    #[error("no intervals supplied")]
    EmptyIntervals,

    #[error("expression set is empty")]
    EmptyExpressionSet,

    #[error("at least {min} samples per interval are required, got {found}")]
    TooFewSamples { min: usize, found: usize },

    #[error("{component}: {found} interval functions supplied for {expected} intervals")]
    LengthMismatch {
        component: ForceComponent,
        expected: usize,
        found: usize,
    },

    #[error("{component}, interval {interval}: function returned {found} values for {expected} samples")]
    SampleShape {
        component: ForceComponent,
        interval: usize,
        expected: usize,
        found: usize,
    },

    #[error("figure size {width} x {height} in does not give a drawable surface")]
    InvalidFigureSize { width: f64, height: f64 },

    #[error("unknown force component '{0}' (expected one of N, Ty, Tz, Mt, Mfy, Mfz)")]
    UnknownComponent(String),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid load case: {0}")]
    InvalidLoadCase(String),
}
