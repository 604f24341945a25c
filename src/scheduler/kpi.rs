//! Metrics aggregation.
//!
//! Every engine feeds the same accumulator, so the reduction from
//! per-process times to averages is identical across disciplines.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use crate::models::{Metrics, ProcessOutcome};

/// Running sums of per-process turnaround, waiting and response times.
///
/// Sums are kept as `i128` and divided once in [`finish`](Self::finish),
/// so averages carry no accumulated floating-point error and `n` terms of
/// up to `i64::MAX` each cannot overflow.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    total_turnaround: i128,
    total_waiting: i128,
    total_response: i128,
}

impl MetricsAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one process's response time (`start - arrival`).
    ///
    /// Call exactly once per process, at its first dispatch.
    pub fn record_response(&mut self, response: i64) {
        self.total_response += i128::from(response);
    }

    /// Adds one process's turnaround and waiting times at completion.
    pub fn record_completion(&mut self, turnaround: i64, waiting: i64) {
        self.total_turnaround += i128::from(turnaround);
        self.total_waiting += i128::from(waiting);
    }

    /// Adds every time of a finished outcome.
    pub fn record_outcome(&mut self, outcome: &ProcessOutcome) {
        self.record_response(outcome.response());
        self.record_completion(outcome.turnaround(), outcome.waiting());
    }

    /// Divides each sum by `n`. Returns [`Metrics::ZERO`] when `n == 0`.
    pub fn finish(&self, n: usize) -> Metrics {
        if n == 0 {
            return Metrics::ZERO;
        }
        let n = n as f64;
        Metrics {
            avg_turnaround: self.total_turnaround as f64 / n,
            avg_waiting: self.total_waiting as f64 / n,
            avg_response: self.total_response as f64 / n,
        }
    }
}
