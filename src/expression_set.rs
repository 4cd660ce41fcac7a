// src/expression_set.rs

use std::fmt;

use ndarray::Array1;

use crate::data_analysis::sampling::IntervalValue;
use crate::force_components::ForceComponent;
use crate::types::IntervalFunction;

/// Interval function returning the same value over its whole interval.
pub fn constant(value: f64) -> IntervalFunction {
    Box::new(move |_: &Array1<f64>| IntervalValue::Scalar(value))
}

/// Interval function evaluating `f` at every sample position.
pub fn expression<F>(f: F) -> IntervalFunction
where
    F: Fn(f64) -> f64 + 'static,
{
    Box::new(move |x: &Array1<f64>| IntervalValue::Samples(x.mapv(&f)))
}

/// Ordered mapping from force component to its interval functions, one per
/// interval. Iteration follows insertion order, which is also the order of
/// the stacked subplots.
#[derive(Default)]
pub struct ExpressionSet {
    entries: Vec<(ForceComponent, Vec<IntervalFunction>)>,
}

impl ExpressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the functions of `component`. An existing entry keeps its
    /// position and has its functions replaced.
    pub fn insert(&mut self, component: ForceComponent, functions: Vec<IntervalFunction>) {
        match self.entries.iter_mut().find(|(c, _)| *c == component) {
            Some(entry) => entry.1 = functions,
            None => self.entries.push((component, functions)),
        }
    }

    /// Builder form of [`ExpressionSet::insert`].
    pub fn with(mut self, component: ForceComponent, functions: Vec<IntervalFunction>) -> Self {
        self.insert(component, functions);
        self
    }

    pub fn get(&self, component: ForceComponent) -> Option<&[IntervalFunction]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, functions)| functions.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn components(&self) -> impl Iterator<Item = ForceComponent> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ForceComponent, &[IntervalFunction])> + '_ {
        self.entries
            .iter()
            .map(|(c, functions)| (*c, functions.as_slice()))
    }
}

impl fmt::Debug for ExpressionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(c, functions)| (c, functions.len())))
            .finish()
    }
}
