//! Offline CPU scheduling simulator.
//!
//! Given a fixed batch of processes (id, arrival time, burst time), computes
//! per-process start/completion times and averaged turnaround, waiting and
//! response times under three single-CPU disciplines.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessOutcome`,
//!   `ExecutionSlice`, `Metrics`, `Simulation`, `Discipline`
//! - **`ordering`**: The shared (arrival, id) tie-break order
//! - **`scheduler`**: FCFS, non-preemptive SJF and Round-Robin engines,
//!   plus the shared metrics accumulator
//! - **`validation`**: Input precondition checks (duplicate IDs, negative
//!   arrivals, non-positive bursts)
//! - **`workload`**: Seeded random batch generation
//!
//! # Example
//!
//! ```
//! use u_cpu_sched::{rr_metrics, Process};
//!
//! let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3)];
//! let metrics = rr_metrics(&processes, 2).unwrap();
//! assert!((metrics.avg_turnaround - 7.0).abs() < 1e-10);
//! assert!((metrics.avg_response - 0.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{Discipline, Metrics, Process, Simulation};
pub use scheduler::{fcfs_metrics, rr_metrics, sjf_metrics, Scheduler, SimulationRequest};
