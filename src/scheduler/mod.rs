//! Scheduling engines and metrics aggregation.
//!
//! Three single-CPU disciplines share one data model, one tie-break order
//! ([`crate::ordering::arrival_order`]) and one metrics reduction
//! ([`MetricsAccumulator`]):
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst among arrived |
//! | [`RoundRobin`] | quantum expiry | FIFO ready queue |
//!
//! Each run works on a private copy of the input and returns a
//! [`Simulation`]; the caller's processes are never modified.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;
mod state;

pub use fcfs::Fcfs;
pub use kpi::MetricsAccumulator;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use std::fmt::Debug;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Discipline, ExecutionSlice, Metrics, Process, Simulation};
use crate::validation::validate_processes;
use state::WorkingProcess;

/// A CPU scheduling engine.
pub trait Scheduler: Send + Sync + Debug {
    /// Engine name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Discipline descriptor for this engine.
    fn discipline(&self) -> Discipline;

    /// Runs the simulation on input that already passed
    /// [`validate_processes`].
    fn execute(&self, processes: &[Process]) -> Simulation;

    /// Validates `processes`, then runs the simulation.
    fn simulate(&self, processes: &[Process]) -> Result<Simulation, SimulationError> {
        validate_processes(processes)?;
        Ok(self.execute(processes))
    }

    /// Validates and simulates, keeping only the averaged metrics.
    fn metrics(&self, processes: &[Process]) -> Result<Metrics, SimulationError> {
        Ok(self.simulate(processes)?.metrics)
    }
}

impl Discipline {
    /// Builds the engine for this discipline.
    ///
    /// Fails with [`SimulationError::InvalidQuantum`] for a Round-Robin
    /// quantum that is not positive.
    pub fn scheduler(&self) -> Result<Box<dyn Scheduler>, SimulationError> {
        let scheduler: Box<dyn Scheduler> = match *self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)?),
        };
        Ok(scheduler)
    }

    /// Simulates `processes` under this discipline.
    pub fn simulate(&self, processes: &[Process]) -> Result<Simulation, SimulationError> {
        self.scheduler()?.simulate(processes)
    }
}

/// Input bundle for one simulation: a process batch plus a discipline.
///
/// Serializable, so a harness can load it from any serde format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: Vec<Process>,
    /// Discipline to simulate under.
    pub discipline: Discipline,
}

impl SimulationRequest {
    /// Creates an empty request for the given discipline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            processes: Vec::new(),
            discipline,
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Adds several processes.
    pub fn with_processes(mut self, processes: impl IntoIterator<Item = Process>) -> Self {
        self.processes.extend(processes);
        self
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Runs the request.
    pub fn run(&self) -> Result<Simulation, SimulationError> {
        self.discipline.simulate(&self.processes)
    }
}

/// FCFS averaged metrics for `processes`.
pub fn fcfs_metrics(processes: &[Process]) -> Result<Metrics, SimulationError> {
    Fcfs.metrics(processes)
}

/// Non-preemptive SJF averaged metrics for `processes`.
pub fn sjf_metrics(processes: &[Process]) -> Result<Metrics, SimulationError> {
    Sjf.metrics(processes)
}

/// Round-Robin averaged metrics for `processes` with the given quantum.
///
/// A non-positive `quantum` is rejected before the batch is examined.
pub fn rr_metrics(processes: &[Process], quantum: i64) -> Result<Metrics, SimulationError> {
    RoundRobin::new(quantum)?.metrics(processes)
}

/// Collects finished working copies into a [`Simulation`].
fn assemble(
    discipline: Discipline,
    slots: &[WorkingProcess],
    trace: Vec<ExecutionSlice>,
    metrics: Metrics,
) -> Simulation {
    let simulation = Simulation {
        discipline,
        outcomes: slots.iter().filter_map(WorkingProcess::outcome).collect(),
        trace,
        metrics,
    };
    debug!(
        "{} finished: {} processes, makespan {}, {} slices",
        discipline,
        simulation.process_count(),
        simulation.makespan(),
        simulation.trace.len()
    );
    simulation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn two_processes() -> Vec<Process> {
        vec![Process::new(1, 0, 5), Process::new(2, 1, 3)]
    }

    #[test]
    fn test_free_functions_match_engines() {
        let ps = two_processes();
        assert_eq!(fcfs_metrics(&ps).unwrap(), Fcfs.execute(&ps).metrics);
        assert_eq!(sjf_metrics(&ps).unwrap(), Sjf.execute(&ps).metrics);
        assert_eq!(
            rr_metrics(&ps, 2).unwrap(),
            RoundRobin::new(2).unwrap().execute(&ps).metrics
        );
    }

    #[test]
    fn test_empty_batch_all_engines() {
        assert_eq!(fcfs_metrics(&[]).unwrap(), Metrics::ZERO);
        assert_eq!(sjf_metrics(&[]).unwrap(), Metrics::ZERO);
        assert_eq!(rr_metrics(&[], 3).unwrap(), Metrics::ZERO);
    }

    #[test]
    fn test_invalid_quantum() {
        for quantum in [0, -1] {
            let err = rr_metrics(&two_processes(), quantum).unwrap_err();
            assert_eq!(err, SimulationError::InvalidQuantum { quantum });
        }
        // Quantum is checked even for an empty batch
        assert!(rr_metrics(&[], 0).is_err());
    }

    #[test]
    fn test_invalid_input_rejected_by_every_engine() {
        let ps = vec![Process::new(1, 0, 5), Process::new(1, 2, 3)];
        for result in [fcfs_metrics(&ps), sjf_metrics(&ps), rr_metrics(&ps, 2)] {
            match result {
                Err(SimulationError::InvalidInput(errors)) => {
                    assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
                }
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_discipline_dispatch() {
        let ps = two_processes();
        let sim = Discipline::RoundRobin { quantum: 2 }.simulate(&ps).unwrap();
        assert_eq!(sim.discipline, Discipline::RoundRobin { quantum: 2 });
        assert_eq!(sim.trace.len(), 5);

        let sched = Discipline::Sjf.scheduler().unwrap();
        assert_eq!(sched.name(), "SJF");
        assert!(Discipline::RoundRobin { quantum: 0 }.scheduler().is_err());
    }

    #[test]
    fn test_request_builder_and_run() {
        let request = SimulationRequest::new(Discipline::Fcfs)
            .with_process(Process::new(1, 0, 5))
            .with_processes([Process::new(2, 1, 3)]);
        assert_eq!(request.processes.len(), 2);

        let sim = request.run().unwrap();
        assert_eq!(sim.outcome(2).map(|o| o.start_time), Some(5));

        let rr = request.with_discipline(Discipline::RoundRobin { quantum: 2 });
        assert_eq!(rr.run().unwrap().outcome(2).map(|o| o.completion_time), Some(7));
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": 1, "arrival_time": 0, "burst_time": 5},
                {"id": 2, "arrival_time": 1, "burst_time": 3}
            ],
            "discipline": {"kind": "round_robin", "quantum": 2}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        let m = request.run().unwrap().metrics;
        assert!((m.avg_turnaround - 7.0).abs() < 1e-10);
        assert!((m.avg_waiting - 3.0).abs() < 1e-10);
        assert!((m.avg_response - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_caller_input_unchanged() {
        let ps = vec![
            Process::new(3, 4, 2),
            Process::new(1, 0, 6),
            Process::new(2, 1, 1),
        ];
        let before = ps.clone();
        fcfs_metrics(&ps).unwrap();
        sjf_metrics(&ps).unwrap();
        rr_metrics(&ps, 1).unwrap();
        assert_eq!(ps, before);
    }

    #[test]
    fn test_clock_overflow_rejected() {
        let late = vec![Process::new(1, i64::MAX, 1)];
        let long = vec![Process::new(1, 0, i64::MAX), Process::new(2, 0, 1)];

        for result in [
            fcfs_metrics(&late),
            sjf_metrics(&late),
            rr_metrics(&late, 1),
            rr_metrics(&long, i64::MAX),
        ] {
            match result {
                Err(SimulationError::InvalidInput(errors)) => {
                    assert!(errors
                        .iter()
                        .any(|e| e.kind == ValidationErrorKind::TimeOverflow));
                }
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }
}
