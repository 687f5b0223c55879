use std::collections::HashSet;
use std::num::NonZeroUsize;

use log::debug;

use crate::error::ScheduleError;
use crate::policy::Policy;
use crate::process::Process;
use crate::schedulers::{Fcfs, Priority, RoundRobin, Scheduler, Sjf};
use crate::timeline::{Slice, Timeline};

/// A finished simulation: the batch in its input order with all
/// outputs filled in, and the CPU trace in time order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub processes: Vec<Process>,
    pub slices: Vec<Slice>,
}

impl Schedule {
    /// Completion time of the last process, 0 for an empty schedule.
    pub fn makespan(&self) -> usize {
        self.slices.last().map_or(0, |s| s.end)
    }

    /// Time the CPU spent running something.
    pub fn busy_time(&self) -> usize {
        self.slices.iter().map(Slice::len).sum()
    }
}

fn check_batch(batch: &[Process]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(batch.len());
    for p in batch {
        if !seen.insert(p.id()) {
            return Err(ScheduleError::DuplicateId { id: p.id() });
        }
        if p.burst_time() == 0 {
            return Err(ScheduleError::ZeroBurst { id: p.id() });
        }
        if !p.is_fresh() {
            return Err(ScheduleError::StaleProcess { id: p.id() });
        }
    }
    Ok(())
}

/// Simulates `batch` under `policy`.
///
/// Every process must be fresh: a batch that has already been through the
/// engine is rejected with [`ScheduleError::StaleProcess`] rather than
/// producing zero-length runs. An empty batch yields an empty schedule.
pub fn schedule(mut batch: Vec<Process>, policy: Policy) -> Result<Schedule, ScheduleError> {
    let mut scheduler: Box<dyn Scheduler> = match policy {
        Policy::Fcfs => Box::new(Fcfs),
        Policy::Sjf => Box::new(Sjf),
        Policy::Priority => Box::new(Priority),
        Policy::RoundRobin { quantum } => {
            let quantum = NonZeroUsize::new(quantum).ok_or(ScheduleError::InvalidQuantum)?;
            Box::new(RoundRobin::new(quantum))
        }
    };

    if batch.is_empty() {
        return Ok(Schedule::default());
    }
    check_batch(&batch)?;

    debug!("{}: scheduling {} processes", scheduler.name(), batch.len());
    let mut timeline = Timeline::new();
    scheduler.run(&mut batch, &mut timeline);

    Ok(Schedule {
        processes: batch,
        slices: timeline.into_slices(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two() -> Vec<Process> {
        vec![
            Process::new(1, "P1", 0, 5, 0),
            Process::new(2, "P2", 1, 3, 0),
        ]
    }

    #[test]
    fn empty_batch_is_not_an_error() {
        for policy in [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Priority,
            Policy::RoundRobin { quantum: 4 },
        ] {
            let out = schedule(Vec::new(), policy).unwrap();
            assert!(out.processes.is_empty());
            assert!(out.slices.is_empty());
            assert_eq!(out.makespan(), 0);
        }
    }

    #[test]
    fn zero_quantum_is_rejected_even_when_empty() {
        assert_eq!(
            schedule(Vec::new(), Policy::RoundRobin { quantum: 0 }).unwrap_err(),
            ScheduleError::InvalidQuantum
        );
        assert_eq!(
            schedule(two(), Policy::RoundRobin { quantum: 0 }).unwrap_err(),
            ScheduleError::InvalidQuantum
        );
    }

    #[test]
    fn rescheduling_a_finished_batch_is_rejected() {
        let done = schedule(two(), Policy::Fcfs).unwrap();
        assert_eq!(
            schedule(done.processes, Policy::Priority).unwrap_err(),
            ScheduleError::StaleProcess { id: 1 }
        );
    }

    #[test]
    fn zero_burst_is_rejected() {
        let batch = vec![Process::new(4, "P4", 0, 0, 0)];
        assert_eq!(
            schedule(batch, Policy::Fcfs).unwrap_err(),
            ScheduleError::ZeroBurst { id: 4 }
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let batch = vec![Process::new(1, "a", 0, 1, 0), Process::new(1, "b", 0, 1, 0)];
        assert_eq!(
            schedule(batch, Policy::Sjf).unwrap_err(),
            ScheduleError::DuplicateId { id: 1 }
        );
    }

    #[test]
    fn output_keeps_input_order() {
        let batch = vec![
            Process::new(7, "late", 9, 1, 0),
            Process::new(3, "early", 0, 1, 0),
        ];
        let out = schedule(batch, Policy::Fcfs).unwrap();
        let ids: Vec<_> = out.processes.iter().map(Process::id).collect();
        assert_eq!(ids, vec![7, 3]);
        assert_eq!(out.slices[0].id, 3);
    }

    #[test]
    fn busy_time_and_makespan() {
        let out = schedule(
            vec![Process::new(1, "P1", 2, 3, 0), Process::new(2, "P2", 10, 1, 0)],
            Policy::Fcfs,
        )
        .unwrap();
        assert_eq!(out.busy_time(), 4);
        assert_eq!(out.makespan(), 11);
    }
}
