//! Averaged scheduling metrics.
//!
//! | Metric | Per-process definition |
//! |--------|------------------------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

/// Mean timing metrics over all simulated processes.
///
/// All values are in ticks and non-negative for valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean of `completion - arrival`.
    pub avg_turnaround: f64,
    /// Mean of `turnaround - burst`.
    pub avg_waiting: f64,
    /// Mean of `first dispatch - arrival`.
    pub avg_response: f64,
}

impl Metrics {
    /// All-zero metrics (the result for an empty process list).
    pub const ZERO: Self = Self {
        avg_turnaround: 0.0,
        avg_waiting: 0.0,
        avg_response: 0.0,
    };

    /// Creates metrics from explicit averages.
    pub fn new(avg_turnaround: f64, avg_waiting: f64, avg_response: f64) -> Self {
        Self {
            avg_turnaround,
            avg_waiting,
            avg_response,
        }
    }

    /// Whether every average is within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Metrics, epsilon: f64) -> bool {
        (self.avg_turnaround - other.avg_turnaround).abs() <= epsilon
            && (self.avg_waiting - other.avg_waiting).abs() <= epsilon
            && (self.avg_response - other.avg_response).abs() <= epsilon
    }
}
