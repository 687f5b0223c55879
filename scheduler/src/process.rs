/// Process identifier, assigned by the caller and unique within a batch.
pub type Pid = u32;

/// A process as seen by the simulator: static inputs plus the timing
/// outputs the engine fills in.
///
/// Times are in abstract simulation units. A process built with
/// [`Process::new`] is fresh (`remaining_time == burst_time`, no outputs);
/// the engine refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: Pid,
    name: String,
    arrival_time: usize,
    burst_time: usize,
    priority: i32,

    remaining_time: usize,
    start_time: Option<usize>,
    completion_time: Option<usize>,
    waiting_time: usize,
    turnaround_time: usize,
    response_time: Option<usize>,
}

impl Process {
    pub fn new(
        id: Pid,
        name: impl Into<String>,
        arrival_time: usize,
        burst_time: usize,
        priority: i32,
    ) -> Process {
        Process {
            id,
            name: name.into(),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
            response_time: None,
        }
    }

    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> usize {
        self.arrival_time
    }

    pub fn burst_time(&self) -> usize {
        self.burst_time
    }

    /// Lower value runs first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    /// Time of first dispatch.
    pub fn start_time(&self) -> Option<usize> {
        self.start_time
    }

    pub fn completion_time(&self) -> Option<usize> {
        self.completion_time
    }

    pub fn waiting_time(&self) -> usize {
        self.waiting_time
    }

    pub fn turnaround_time(&self) -> usize {
        self.turnaround_time
    }

    /// First dispatch minus arrival. Only the preemptive policies set it;
    /// `None` means "not computed".
    pub fn response_time(&self) -> Option<usize> {
        self.response_time
    }

    pub fn is_fresh(&self) -> bool {
        self.remaining_time == self.burst_time && self.completion_time.is_none()
    }

    pub fn is_done(&self) -> bool {
        self.remaining_time == 0
    }

    /// Runs the process for `units`, clamped to what it still needs.
    /// Returns the time actually consumed.
    pub(crate) fn execute(&mut self, units: usize) -> usize {
        let ran = units.min(self.remaining_time);
        self.remaining_time -= ran;
        ran
    }

    pub(crate) fn mark_dispatched(&mut self, now: usize) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Set once, on first dispatch.
    pub(crate) fn record_response(&mut self, now: usize) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    pub(crate) fn complete(&mut self, end: usize) {
        self.completion_time = Some(end);
        self.turnaround_time = end - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_process_is_fresh() {
        let p = Process::new(1, "P1", 3, 7, 2);
        assert_eq!(p.remaining_time(), 7);
        assert_eq!(p.response_time(), None);
        assert_eq!(p.start_time(), None);
        assert_eq!(p.waiting_time(), 0);
        assert!(p.is_fresh());
        assert!(!p.is_done());
    }

    #[test]
    fn execute_never_overshoots() {
        let mut p = Process::new(1, "P1", 0, 3, 0);
        assert_eq!(p.execute(2), 2);
        assert_eq!(p.execute(4), 1);
        assert_eq!(p.remaining_time(), 0);
        assert!(p.is_done());
        assert_eq!(p.execute(1), 0);
    }

    #[test]
    fn complete_derives_waiting_from_turnaround() {
        let mut p = Process::new(2, "P2", 1, 3, 0);
        p.execute(3);
        p.complete(8);
        assert_eq!(p.turnaround_time(), 7);
        assert_eq!(p.waiting_time(), 4);
        assert_eq!(p.completion_time(), Some(8));
    }

    #[test]
    fn response_is_write_once() {
        let mut p = Process::new(1, "P1", 2, 5, 0);
        p.record_response(4);
        p.record_response(9);
        assert_eq!(p.response_time(), Some(2));
    }
}
