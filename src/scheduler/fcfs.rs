//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Sort a copy of the batch by (arrival, id).
//! 2. Walk it in order; if the CPU is idle before the next arrival, jump
//!    the clock forward (idle time is not charged to anyone).
//! 3. Each process runs to completion as soon as it is dispatched.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use log::trace;

use super::state::WorkingProcess;
use super::{assemble, MetricsAccumulator, Scheduler};
use crate::models::{Discipline, ExecutionSlice, Process, Simulation};
use crate::ordering::sort_by_arrival;

/// First-Come-First-Served engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn discipline(&self) -> Discipline {
        Discipline::Fcfs
    }

    fn execute(&self, processes: &[Process]) -> Simulation {
        if processes.is_empty() {
            return Simulation::empty(Discipline::Fcfs);
        }

        let mut slots = WorkingProcess::copy_all(processes);
        let mut trace = Vec::with_capacity(processes.len());
        let mut acc = MetricsAccumulator::new();
        let mut current_time = 0;

        for idx in sort_by_arrival(processes) {
            let slot = &mut slots[idx];
            let arrival = slot.process.arrival_time;
            if current_time < arrival {
                trace!("FCFS idle {current_time} -> {arrival}");
                current_time = arrival;
            }

            let completion = current_time + slot.process.burst_time;
            slot.dispatch(current_time);
            slot.complete(completion);
            if let Some(outcome) = slot.outcome() {
                acc.record_outcome(&outcome);
            }
            trace.push(ExecutionSlice::new(slot.process.id, current_time, completion));

            current_time = completion;
        }

        assemble(
            Discipline::Fcfs,
            &slots,
            trace,
            acc.finish(processes.len()),
        )
    }
}
