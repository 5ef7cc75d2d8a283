//! Progress reporting
//!
//! The loop reports one `(generation, best_fitness)` pair per generation,
//! including the initial population, to a `ProgressSink`.

use serde::{Deserialize, Serialize};

/// Receiver of per-generation best fitness
pub trait ProgressSink {
    /// Record the best fitness of `generation`
    fn record(&mut self, generation: usize, best_fitness: f64);
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn record(&mut self, generation: usize, best_fitness: f64) {
        (**self).record(generation, best_fitness);
    }
}

/// Discards every record
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn record(&mut self, _generation: usize, _best_fitness: f64) {}
}

/// Ordered series of `(generation, best_fitness)` points, ready for plotting
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessSeries {
    points: Vec<(usize, f64)>,
}

impl FitnessSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded points in arrival order
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Number of recorded points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent point
    pub fn last(&self) -> Option<(usize, f64)> {
        self.points.last().copied()
    }

    /// Fitness values only
    pub fn fitness_values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, f)| f).collect()
    }

    /// Clear the series
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl ProgressSink for FitnessSeries {
    fn record(&mut self, generation: usize, best_fitness: f64) {
        self.points.push((generation, best_fitness));
    }
}

/// Logs every record as an `info` event
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    label: Option<String>,
}

impl TracingSink {
    /// Create an unlabelled sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a run label to every event
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl ProgressSink for TracingSink {
    fn record(&mut self, generation: usize, best_fitness: f64) {
        match &self.label {
            Some(label) => tracing::info!(run = %label, generation, best_fitness, "progress"),
            None => tracing::info!(generation, best_fitness, "progress"),
        }
    }
}

/// Forward every record to two sinks
impl<A: ProgressSink, B: ProgressSink> ProgressSink for (A, B) {
    fn record(&mut self, generation: usize, best_fitness: f64) {
        self.0.record(generation, best_fitness);
        self.1.record(generation, best_fitness);
    }
}
