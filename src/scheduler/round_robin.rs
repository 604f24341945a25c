//! Round-Robin scheduling with a fixed time quantum.
//!
//! # Algorithm
//!
//! A FIFO ready queue is fed in (arrival, id) order. Each dispatch pops the
//! head and runs it for `min(remaining, quantum)` ticks.
//!
//! - Admission runs every time the clock moves: a pending process whose
//!   arrival is `<= now` is appended to the queue.
//! - If the queue is empty while work remains, the clock jumps to the next
//!   pending arrival.
//! - A preempted process rejoins the tail only **after** every process that
//!   arrived during its slice has been admitted. Newcomers therefore run
//!   ahead of the process they arrived behind, which differs from the
//!   textbook variant where the preempted process re-enters first.
//!
//! Response time is charged once, at a process's first dispatch.
//!
//! # Complexity
//! O(n log n + Σ⌈burst / quantum⌉). Admission uses a cursor over the
//! arrival-sorted order, since admitted processes always form a prefix of it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use log::trace;

use super::state::{Status, WorkingProcess};
use super::{assemble, MetricsAccumulator, Scheduler};
use crate::error::SimulationError;
use crate::models::{Discipline, ExecutionSlice, Process, Simulation};
use crate::ordering::sort_by_arrival;

/// Preemptive Round-Robin engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin engine.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if `quantum <= 0`.
    pub fn new(quantum: i64) -> Result<Self, SimulationError> {
        if quantum <= 0 {
            return Err(SimulationError::InvalidQuantum { quantum });
        }
        Ok(Self { quantum })
    }

    /// Maximum ticks granted per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn discipline(&self) -> Discipline {
        Discipline::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn execute(&self, processes: &[Process]) -> Simulation {
        if processes.is_empty() {
            return Simulation::empty(self.discipline());
        }
        RoundRobinRun::new(processes, self.quantum).run(self.discipline())
    }
}

/// State of one Round-Robin simulation.
struct RoundRobinRun {
    slots: Vec<WorkingProcess>,
    /// Input indices in (arrival, id) order.
    arrival_order: Vec<usize>,
    /// Next position in `arrival_order` not yet admitted.
    cursor: usize,
    ready: VecDeque<usize>,
    quantum: i64,
    current_time: i64,
    completed: usize,
    trace: Vec<ExecutionSlice>,
    acc: MetricsAccumulator,
}

impl RoundRobinRun {
    fn new(processes: &[Process], quantum: i64) -> Self {
        Self {
            slots: WorkingProcess::copy_all(processes),
            arrival_order: sort_by_arrival(processes),
            cursor: 0,
            ready: VecDeque::with_capacity(processes.len()),
            quantum,
            current_time: 0,
            completed: 0,
            trace: Vec::new(),
            acc: MetricsAccumulator::new(),
        }
    }

    fn run(mut self, discipline: Discipline) -> Simulation {
        let n = self.slots.len();

        while self.completed < n {
            self.admit_arrivals();

            let Some(idx) = self.ready.pop_front() else {
                self.idle();
                continue;
            };

            self.dispatch(idx);
        }

        let metrics = self.acc.finish(n);
        assemble(discipline, &self.slots, self.trace, metrics)
    }

    /// Enqueues every pending process that has arrived by `current_time`,
    /// in arrival order.
    fn admit_arrivals(&mut self) {
        while let Some(&idx) = self.arrival_order.get(self.cursor) {
            let slot = &mut self.slots[idx];
            if slot.process.arrival_time > self.current_time {
                break;
            }
            if slot.status == Status::Pending {
                slot.status = Status::Queued;
                self.ready.push_back(idx);
            }
            self.cursor += 1;
        }
    }

    /// Advances the clock while the ready queue is empty.
    fn idle(&mut self) {
        match self.arrival_order.get(self.cursor) {
            Some(&idx) => {
                let arrival = self.slots[idx].process.arrival_time;
                trace!("RR idle {} -> {arrival}", self.current_time);
                self.current_time = self.current_time.max(arrival);
            }
            // Unreachable for validated input: nothing queued, nothing pending
            None => self.current_time += 1,
        }
    }

    /// Runs the process at `idx` for one slice.
    fn dispatch(&mut self, idx: usize) {
        let start = self.current_time;
        let slot = &mut self.slots[idx];
        if let Some(response) = slot.dispatch(start) {
            self.acc.record_response(response);
        }

        let slice = slot.remaining_time.min(self.quantum);
        slot.remaining_time -= slice;
        self.current_time += slice;
        let end = self.current_time;
        let id = slot.process.id;
        trace!("RR run P{id} {start} -> {end} (remaining {})", slot.remaining_time);

        if slot.remaining_time <= 0 {
            slot.complete(end);
            let turnaround = end - slot.process.arrival_time;
            self.acc
                .record_completion(turnaround, turnaround - slot.process.burst_time);
            self.completed += 1;
        } else {
            // Newcomers from this slice go ahead of the preempted process
            self.admit_arrivals();
            self.ready.push_back(idx);
        }

        self.trace.push(ExecutionSlice::new(id, start, end));
    }
}
