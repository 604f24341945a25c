//! Simulation result model.
//!
//! A simulation bundles everything one engine run produces: per-process
//! outcomes, the CPU execution trace, and the averaged metrics.
//!
//! # Derived KPIs
//!
//! | KPI | Definition |
//! |-----|-----------|
//! | Makespan | Latest completion time |
//! | Busy time | Sum of execution slice lengths |
//! | Idle time | Makespan - busy time |
//! | Utilization | Busy time / makespan |
//! | Throughput | Completed processes / makespan |
//! | Context switches | Adjacent slices owned by different processes |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ExecutionSlice, Metrics, ProcessId, ProcessOutcome};

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum ticks granted per dispatch. Must be > 0.
        quantum: i64,
    },
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}

/// Result of simulating one process batch under one discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    /// Discipline that produced this result.
    pub discipline: Discipline,
    /// Per-process outcomes, in the caller's input order.
    pub outcomes: Vec<ProcessOutcome>,
    /// CPU execution slices in time order.
    pub trace: Vec<ExecutionSlice>,
    /// Averaged metrics.
    pub metrics: Metrics,
}

impl Simulation {
    /// Empty result for a zero-process batch.
    pub fn empty(discipline: Discipline) -> Self {
        Self {
            discipline,
            outcomes: Vec::new(),
            trace: Vec::new(),
            metrics: Metrics::ZERO,
        }
    }

    /// Number of simulated processes.
    pub fn process_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Outcome for the given process ID.
    pub fn outcome(&self, id: ProcessId) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    /// All slices executed by the given process, in time order.
    pub fn slices_for(&self, id: ProcessId) -> Vec<&ExecutionSlice> {
        self.trace.iter().filter(|s| s.id == id).collect()
    }

    /// Latest completion time (0 for an empty simulation).
    pub fn makespan(&self) -> i64 {
        self.outcomes
            .iter()
            .map(|o| o.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total ticks the CPU spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.trace.iter().map(|s| s.duration()).sum()
    }

    /// Ticks in `[0, makespan)` where the CPU had nothing to run.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub fn utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        self.busy_time() as f64 / makespan as f64
    }

    /// Completed processes per tick.
    pub fn throughput(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        self.outcomes.len() as f64 / makespan as f64
    }

    /// Number of dispatches that handed the CPU to a different process.
    pub fn context_switches(&self) -> usize {
        self.trace.windows(2).filter(|w| w[0].id != w[1].id).count()
    }
}
