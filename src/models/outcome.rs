//! Per-process results and execution trace entries.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// Finished timing record for one process.
///
/// Produced by an engine once the process has completed. `start_time` is the
/// tick of first dispatch, `completion_time` the tick its last unit of work
/// finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival tick (copied from input).
    pub arrival_time: i64,
    /// Burst length (copied from input).
    pub burst_time: i64,
    /// First dispatch tick.
    pub start_time: i64,
    /// Completion tick.
    pub completion_time: i64,
}

impl ProcessOutcome {
    /// Creates an outcome for `process`.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
        }
    }

    /// `completion - arrival`.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion_time - self.arrival_time
    }

    /// `turnaround - burst`: time spent ready but not running.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst_time
    }

    /// `start - arrival`: time to first dispatch.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

/// One contiguous interval of CPU time, `[start, end)`, given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub id: ProcessId,
    /// Dispatch tick.
    pub start: i64,
    /// Tick the CPU was released (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(id: ProcessId, start: i64, end: i64) -> Self {
        Self { id, start, end }
    }

    /// Slice length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `tick` falls inside `[start, end)`.
    #[inline]
    pub fn contains(&self, tick: i64) -> bool {
        self.start <= tick && tick < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_derived_times() {
        let p = Process::new(2, 1, 3);
        let o = ProcessOutcome::new(&p, 5, 8);
        assert_eq!(o.turnaround(), 7);
        assert_eq!(o.waiting(), 4);
        assert_eq!(o.response(), 4);
    }

    #[test]
    fn test_slice_contains() {
        let s = ExecutionSlice::new(1, 2, 4);
        assert_eq!(s.duration(), 2);
        assert!(!s.contains(1));
        assert!(s.contains(2));
        assert!(s.contains(3));
        assert!(!s.contains(4)); // half-open
    }
}
