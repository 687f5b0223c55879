use log::{debug, trace};

use crate::process::{Pid, Process};

/// One contiguous run of a single process on the CPU, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub id: Pid,
    pub start: usize,
    pub end: usize,
}

impl Slice {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Simulated clock plus the execution trace recorded so far.
#[derive(Debug, Default)]
pub struct Timeline {
    now: usize,
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    pub fn now(&self) -> usize {
        self.now
    }

    /// Idle the CPU until `time`. Never moves the clock backwards.
    pub fn advance_to(&mut self, time: usize) {
        if self.now < time {
            trace!("{}: idle until {}", self.now, time);
            self.now = time;
        }
    }

    /// Idle for a single tick.
    pub fn tick(&mut self) {
        trace!("{}: idle", self.now);
        self.now += 1;
    }

    /// Give the CPU to `process` for at most `units`, advancing the clock by
    /// the time it actually used. Back-to-back runs of the same process are
    /// merged into one slice.
    pub fn run(&mut self, process: &mut Process, units: usize) -> usize {
        process.mark_dispatched(self.now);
        let start = self.now;
        let ran = process.execute(units);
        self.now += ran;

        if let Some(last) = self.slices.last_mut() {
            if last.id == process.id() && last.end == start {
                last.end = self.now;
                return ran;
            }
        }
        self.slices.push(Slice {
            id: process.id(),
            start,
            end: self.now,
        });
        ran
    }

    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}

/// Final bookkeeping once `process` has no time left: turnaround is
/// `end - arrival` and waiting is derived from it.
pub fn finalize(process: &mut Process, start: usize, end: usize) {
    process.complete(end);
    debug!(
        "{}: {} done ({}..{}) tat={} wait={}",
        end,
        process.name(),
        start,
        end,
        process.turnaround_time(),
        process.waiting_time()
    );
}
