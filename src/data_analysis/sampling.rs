// src/data_analysis/sampling.rs

use ndarray::Array1;

use crate::error::CohesionError;
use crate::force_components::ForceComponent;
use crate::types::{Interval, IntervalFunction};

/// Result of evaluating an interval function on its sample positions.
#[derive(Debug, Clone, PartialEq)]
pub enum IntervalValue {
    /// One value for the whole interval; broadcast to every sample.
    Scalar(f64),
    /// One value per sample position, aligned with the input.
    Samples(Array1<f64>),
}

impl IntervalValue {
    /// Values the interval contributes to the y ticks: the scalar itself,
    /// or the first and last sample.
    pub fn tick_candidates(&self) -> Vec<f64> {
        match self {
            IntervalValue::Scalar(value) => vec![*value],
            IntervalValue::Samples(values) => match (values.first(), values.last()) {
                (Some(first), Some(last)) => vec![*first, *last],
                _ => Vec::new(),
            },
        }
    }

    /// Expands a scalar into a constant array of `len` samples. Sample
    /// arrays are returned unchanged.
    pub fn broadcast(self, len: usize) -> Array1<f64> {
        match self {
            IntervalValue::Scalar(value) => Array1::from_elem(len, value),
            IntervalValue::Samples(values) => values,
        }
    }
}

impl From<f64> for IntervalValue {
    fn from(value: f64) -> Self {
        IntervalValue::Scalar(value)
    }
}

impl From<Array1<f64>> for IntervalValue {
    fn from(values: Array1<f64>) -> Self {
        IntervalValue::Samples(values)
    }
}

/// One interval after sampling and broadcasting.
#[derive(Debug, Clone)]
pub struct SampledInterval {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub ticks: Vec<f64>,
}

/// Evaluates `function` on `samples` evenly spaced points spanning
/// `interval`, endpoints included.
pub fn sample_interval(
    component: ForceComponent,
    interval_index: usize,
    interval: Interval,
    samples: usize,
    function: &IntervalFunction,
) -> Result<SampledInterval, CohesionError> {
    let (start, end) = interval;
    let x = Array1::linspace(start, end, samples);
    let value = function(&x);

    if let IntervalValue::Samples(values) = &value {
        if values.len() != x.len() {
            return Err(CohesionError::SampleShape {
                component,
                interval: interval_index,
                expected: x.len(),
                found: values.len(),
            });
        }
    }

    let ticks = value.tick_candidates();
    let y = value.broadcast(x.len());
    Ok(SampledInterval { x, y, ticks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn boxed<F>(f: F) -> IntervalFunction
    where
        F: Fn(&Array1<f64>) -> IntervalValue + 'static,
    {
        Box::new(f)
    }

    #[test]
    fn test_scalar_is_broadcast_to_constant_segment() {
        let f = boxed(|_| IntervalValue::Scalar(5.0));
        let sampled = sample_interval(ForceComponent::Ty, 0, (0.0, 3.0), 4, &f).unwrap();
        assert_eq!(sampled.x, array![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(sampled.y, array![5.0, 5.0, 5.0, 5.0]);
        assert_eq!(sampled.ticks, vec![5.0]);
    }

    #[test]
    fn test_samples_contribute_first_and_last_ticks() {
        let f = boxed(|x| IntervalValue::Samples(x.mapv(|v| 2.0 * v)));
        let sampled = sample_interval(ForceComponent::Mfz, 0, (0.0, 3.0), 7, &f).unwrap();
        assert_eq!(sampled.ticks, vec![0.0, 6.0]);
        assert_eq!(sampled.y.len(), 7);
        assert_eq!(sampled.y[3], 3.0);
    }

    #[test]
    fn test_misaligned_samples_are_rejected() {
        let f = boxed(|_| IntervalValue::Samples(array![1.0, 2.0]));
        let err = sample_interval(ForceComponent::N, 2, (0.0, 1.0), 5, &f).unwrap_err();
        assert_eq!(
            err,
            CohesionError::SampleShape {
                component: ForceComponent::N,
                interval: 2,
                expected: 5,
                found: 2,
            }
        );
    }

    #[test]
    fn test_nan_values_pass_through() {
        let f = boxed(|x| IntervalValue::Samples(x.mapv(|v| (v - 1.0).sqrt())));
        let sampled = sample_interval(ForceComponent::Mt, 0, (0.0, 2.0), 3, &f).unwrap();
        assert!(sampled.y[0].is_nan());
        assert_eq!(sampled.y[2], 1.0);
    }

    #[test]
    fn test_reversed_interval_samples_downwards() {
        let f = boxed(|_| IntervalValue::Scalar(1.0));
        let sampled = sample_interval(ForceComponent::N, 0, (4.0, 2.0), 3, &f).unwrap();
        assert_eq!(sampled.x, array![4.0, 3.0, 2.0]);
    }
}
