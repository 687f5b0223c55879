use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::process::Process;
use crate::timeline::{finalize, Timeline};

/// A scheduling discipline. Runs a fresh batch to completion on the given
/// timeline, filling in every process's outputs.
pub trait Scheduler {
    fn name(&self) -> &'static str;
    fn run(&mut self, procs: &mut [Process], timeline: &mut Timeline);
}

/// Indices of `procs` by arrival time; ties keep input order.
fn arrival_order(procs: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..procs.len()).collect();
    order.sort_by_key(|&i| procs[i].arrival_time());
    order
}

/// Walks an arrival-sorted index list, handing out everything that has
/// arrived by a given time.
struct Admission {
    order: Vec<usize>,
    next: usize,
}

impl Admission {
    fn new(procs: &[Process]) -> Self {
        Admission {
            order: arrival_order(procs),
            next: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.next == self.order.len()
    }

    fn admit(&mut self, procs: &[Process], now: usize, mut enqueue: impl FnMut(usize)) {
        while let Some(&i) = self.order.get(self.next) {
            if procs[i].arrival_time() > now {
                break;
            }
            trace!("{}: admit {}", now, procs[i].name());
            enqueue(i);
            self.next += 1;
        }
    }
}

/// Runs `procs[i]` from now until it finishes.
fn run_to_completion(procs: &mut [Process], i: usize, timeline: &mut Timeline) {
    let p = &mut procs[i];
    timeline.advance_to(p.arrival_time());
    let start = timeline.now();
    debug!("{}: dispatch {}", start, p.name());
    let burst = p.burst_time();
    timeline.run(p, burst);
    finalize(p, start, timeline.now());
}

/// First-come-first-served. Non-preemptive, in arrival order.
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&mut self, procs: &mut [Process], timeline: &mut Timeline) {
        for i in arrival_order(procs) {
            run_to_completion(procs, i, timeline);
        }
    }
}

/// Non-preemptive shortest-job-first over a ranking fixed up front.
///
/// Processes are ranked once by `(burst, arrival)`. Whenever the CPU is
/// free, the best-ranked process that has already arrived runs to
/// completion. If nothing has arrived yet the CPU idles until the next
/// arrival. The ranking uses total burst, never remaining time, so this is
/// not SRTF.
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&mut self, procs: &mut [Process], timeline: &mut Timeline) {
        let mut ranking: Vec<usize> = (0..procs.len()).collect();
        ranking.sort_by_key(|&i| (procs[i].burst_time(), procs[i].arrival_time()));

        while !ranking.is_empty() {
            let now = timeline.now();
            match ranking
                .iter()
                .position(|&i| procs[i].arrival_time() <= now)
            {
                Some(pos) => {
                    let i = ranking.remove(pos);
                    run_to_completion(procs, i, timeline);
                }
                None => {
                    let next_arrival = ranking
                        .iter()
                        .map(|&i| procs[i].arrival_time())
                        .min()
                        .unwrap_or(now);
                    timeline.advance_to(next_arrival);
                }
            }
        }
    }
}

/// Preemptive priority scheduling at unit-tick granularity. Lower
/// `priority` wins; ties go to the earlier arrival, then to input order.
pub struct Priority;

impl Scheduler for Priority {
    fn name(&self) -> &'static str {
        "PRIO"
    }

    fn run(&mut self, procs: &mut [Process], timeline: &mut Timeline) {
        let mut pending = Admission::new(procs);
        let mut ready = BinaryHeap::new();
        let mut last = None;

        loop {
            pending.admit(procs, timeline.now(), |i| {
                ready.push(Reverse((procs[i].priority(), procs[i].arrival_time(), i)))
            });

            let Some(Reverse((_, _, i))) = ready.pop() else {
                if pending.exhausted() {
                    break;
                }
                timeline.tick();
                last = None;
                continue;
            };

            let p = &mut procs[i];
            if last != Some(i) {
                debug!("{}: dispatch {} (prio {})", timeline.now(), p.name(), p.priority());
                last = Some(i);
            }
            p.record_response(timeline.now());
            timeline.run(p, 1);

            if p.is_done() {
                let end = timeline.now();
                let start = end - p.burst_time();
                finalize(p, start, end);
                last = None;
            } else {
                ready.push(Reverse((p.priority(), p.arrival_time(), i)));
            }
        }
    }
}

/// Round-robin with a fixed quantum.
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin { quantum }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&mut self, procs: &mut [Process], timeline: &mut Timeline) {
        let mut pending = Admission::new(procs);
        let mut ready: VecDeque<usize> = VecDeque::new();

        while !pending.exhausted() || !ready.is_empty() {
            pending.admit(procs, timeline.now(), |i| ready.push_back(i));

            let Some(i) = ready.pop_front() else {
                timeline.tick();
                continue;
            };

            {
                let p = &mut procs[i];
                debug!("{}: dispatch {} (rem {})", timeline.now(), p.name(), p.remaining_time());
                p.record_response(timeline.now());
                timeline.run(p, self.quantum.get());
            }

            // Arrivals during the slice queue up ahead of the preempted process.
            pending.admit(procs, timeline.now(), |i| ready.push_back(i));

            let p = &mut procs[i];
            if p.is_done() {
                let end = timeline.now();
                let start = end - p.burst_time();
                finalize(p, start, end);
            } else {
                ready.push_back(i);
            }
        }
    }
}
