//! Random workload generation.
//!
//! Produces valid process batches for benchmarking disciplines against each
//! other and for randomized testing. Generation is driven entirely by the
//! caller's RNG, so a seeded RNG yields a reproducible batch.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are uniform in `[0, max_arrival]`.
    pub max_arrival: i64,
    /// Minimum burst time (clamped to at least 1).
    pub min_burst: i64,
    /// Maximum burst time (inclusive).
    pub max_burst: i64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
        }
    }
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default time ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }
}

/// Generates up to `config.count` processes with IDs `1..=count`.
///
/// Degenerate ranges are repaired rather than rejected, so the result always
/// passes [`crate::validation::validate_processes`]:
/// - `count` is capped at `ProcessId::MAX`, keeping every ID distinct
/// - arrivals never go below 0 and bursts never below 1
/// - ranges shrink until `max_arrival + count * max_burst` fits in `i64`
pub fn generate_workload<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let count = id_limit(config.count);
    let n = i64::from(count).max(1);
    let max_arrival = config.max_arrival.clamp(0, i64::MAX - n);
    let max_burst = config.max_burst.clamp(1, (i64::MAX - max_arrival) / n);
    let min_burst = config.min_burst.clamp(1, max_burst);

    (1..=count)
        .map(|id| {
            Process::new(
                id,
                rng.random_range(0..=max_arrival),
                rng.random_range(min_burst..=max_burst),
            )
        })
        .collect()
}

/// Largest ID handed out for a requested `count`.
fn id_limit(count: usize) -> ProcessId {
    ProcessId::try_from(count).unwrap_or(ProcessId::MAX)
}
