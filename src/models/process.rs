//! Process (job) model.
//!
//! A process is the unit of simulated CPU work: it becomes eligible at its
//! arrival time and needs `burst_time` units of CPU before it completes.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The consumer defines what one tick means.

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = u32;

/// A process to be simulated.
///
/// Immutable input. Engines never modify the caller's processes; all
/// mutable bookkeeping (remaining work, start/completion times) lives in
/// engine-private working copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier, used for tie-breaking and output correlation.
    pub id: ProcessId,
    /// Tick at which the process becomes eligible to run. Must be >= 0.
    pub arrival_time: i64,
    /// Total CPU time required. Must be > 0.
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Earliest tick at which this process could possibly complete.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 0, 1)
            .with_arrival_time(12)
            .with_burst_time(30);

        assert_eq!(p.id, 7);
        assert_eq!(p.arrival_time, 12);
        assert_eq!(p.burst_time, 30);
        assert_eq!(p.earliest_completion(), 42);
    }

    #[test]
    fn test_process_serde() {
        let p = Process::new(3, 4, 5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":3,"arrival_time":4,"burst_time":5}"#);

        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
