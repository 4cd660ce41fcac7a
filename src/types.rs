// src/types.rs
// Type aliases shared by the sampling and plotting modules

use ndarray::Array1;

use crate::data_analysis::sampling::IntervalValue;

/// `(start, end)` of one sub-domain of the beam's length coordinate.
pub type Interval = (f64, f64);

/// Closed-form expression valid on one interval, evaluated on all sample
/// positions at once.
pub type IntervalFunction = Box<dyn Fn(&Array1<f64>) -> IntervalValue>;

/// One NaN-free run of `(x, y)` points between two gap markers.
pub type CurveSegment = Vec<(f64, f64)>;
