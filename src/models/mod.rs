//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling engine: the input
//! `Process`, the per-process `ProcessOutcome`, the `ExecutionSlice` trace
//! entry, the averaged `Metrics`, and the `Simulation` bundle.
//!
//! # Domain Mappings
//!
//! | u-cpu-sched | Operating system | Batch system |
//! |-------------|------------------|--------------|
//! | Process | Process/Thread | Job |
//! | ExecutionSlice | Time slice | Run segment |
//! | Simulation | Dispatch log | Run report |

mod metrics;
mod outcome;
mod process;
mod simulation;

pub use metrics::Metrics;
pub use outcome::{ExecutionSlice, ProcessOutcome};
pub use process::{Process, ProcessId};
pub use simulation::{Discipline, Simulation};
