//! Engine-private working copies of processes.

use crate::models::{Process, ProcessOutcome};

/// Lifecycle of a process inside one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Not yet admitted (arrival in the future, or not yet scanned).
    Pending,
    /// Waiting in, or dispatched from, the ready queue.
    Queued,
    /// Finished; never re-enqueued.
    Done,
}

/// Mutable bookkeeping for one process during a run.
///
/// Each engine call builds its own `Vec<WorkingProcess>`, so the caller's
/// input is never touched and concurrent runs share nothing.
#[derive(Debug, Clone)]
pub(crate) struct WorkingProcess {
    pub process: Process,
    pub remaining_time: i64,
    pub start_time: Option<i64>,
    pub completion_time: Option<i64>,
    pub status: Status,
}

impl WorkingProcess {
    pub fn new(process: Process) -> Self {
        Self {
            process,
            remaining_time: process.burst_time,
            start_time: None,
            completion_time: None,
            status: Status::Pending,
        }
    }

    /// Working copies of every process, in input order.
    pub fn copy_all(processes: &[Process]) -> Vec<Self> {
        processes.iter().copied().map(Self::new).collect()
    }

    /// Records a dispatch at `now`. Returns the response time on the
    /// first dispatch and `None` on every later one.
    pub fn dispatch(&mut self, now: i64) -> Option<i64> {
        if self.start_time.is_some() {
            return None;
        }
        self.start_time = Some(now);
        Some(now - self.process.arrival_time)
    }

    /// Marks the process finished at `now`.
    pub fn complete(&mut self, now: i64) {
        self.remaining_time = 0;
        self.completion_time = Some(now);
        self.status = Status::Done;
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// Finished record, once both timestamps are set.
    pub fn outcome(&self) -> Option<ProcessOutcome> {
        match (self.start_time, self.completion_time) {
            (Some(start), Some(completion)) => {
                Some(ProcessOutcome::new(&self.process, start, completion))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_dispatch_only_once() {
        let mut w = WorkingProcess::new(Process::new(1, 2, 5));
        assert_eq!(w.remaining_time, 5);
        assert_eq!(w.dispatch(4), Some(2));
        assert_eq!(w.dispatch(9), None);
        assert_eq!(w.start_time, Some(4));
    }

    #[test]
    fn test_outcome_requires_completion() {
        let mut w = WorkingProcess::new(Process::new(1, 0, 3));
        assert!(w.outcome().is_none());
        w.dispatch(0);
        assert!(w.outcome().is_none());
        w.complete(3);
        assert!(w.is_done());
        assert_eq!(w.outcome().map(|o| o.completion_time), Some(3));
    }
}
