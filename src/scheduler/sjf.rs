//! Shortest-Job-First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! Repeat until every process has completed:
//! 1. Among unfinished processes with `arrival <= now`, pick the shortest
//!    burst; ties by (arrival, id).
//! 2. If none has arrived, idle until the earliest unfinished arrival and
//!    re-evaluate.
//! 3. Run the pick to completion. A shorter job arriving mid-run waits.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.
//!
//! # Reference
//! Smith (1956), optimal for mean flow time when all jobs are available at t=0.

use log::trace;

use super::state::WorkingProcess;
use super::{assemble, MetricsAccumulator, Scheduler};
use crate::models::{Discipline, ExecutionSlice, Process, Simulation};
use crate::ordering::shortest_job_order;

/// Non-preemptive Shortest-Job-First engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn discipline(&self) -> Discipline {
        Discipline::Sjf
    }

    fn execute(&self, processes: &[Process]) -> Simulation {
        if processes.is_empty() {
            return Simulation::empty(Discipline::Sjf);
        }

        let n = processes.len();
        let mut slots = WorkingProcess::copy_all(processes);
        let mut trace = Vec::with_capacity(n);
        let mut acc = MetricsAccumulator::new();
        let mut current_time = 0;
        let mut completed = 0;

        while completed < n {
            let Some(idx) = select_shortest(&slots, current_time) else {
                // Nothing ready: idle until the next arrival
                match next_arrival(&slots) {
                    Some(arrival) => {
                        trace!("SJF idle {current_time} -> {arrival}");
                        current_time = arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let slot = &mut slots[idx];
            let completion = current_time + slot.process.burst_time;
            trace!(
                "SJF dispatch P{} at {current_time} (burst {})",
                slot.process.id,
                slot.process.burst_time
            );

            slot.dispatch(current_time);
            slot.complete(completion);
            if let Some(outcome) = slot.outcome() {
                acc.record_outcome(&outcome);
            }
            trace.push(ExecutionSlice::new(slot.process.id, current_time, completion));

            current_time = completion;
            completed += 1;
        }

        assemble(Discipline::Sjf, &slots, trace, acc.finish(n))
    }
}

/// Index of the shortest unfinished job that has arrived by `now`.
fn select_shortest(slots: &[WorkingProcess], now: i64) -> Option<usize> {
    slots
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_done() && s.process.arrival_time <= now)
        .min_by(|(_, a), (_, b)| shortest_job_order(&a.process, &b.process))
        .map(|(idx, _)| idx)
}

/// Earliest arrival among unfinished processes.
fn next_arrival(slots: &[WorkingProcess]) -> Option<i64> {
    slots
        .iter()
        .filter(|s| !s.is_done())
        .map(|s| s.process.arrival_time)
        .min()
}
