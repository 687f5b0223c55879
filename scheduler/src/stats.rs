use crate::engine::Schedule;

/// Aggregate figures over a finished schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub makespan: usize,
    pub busy_time: usize,
    pub cpu_utilization: f64,
    pub avg_turnaround_time: f64,
    pub avg_wait_time: f64,
    pub max_wait_time: usize,
    /// Only over processes that have a response time.
    pub avg_response_time: Option<f64>,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl Summary {
    pub fn from_schedule(schedule: &Schedule) -> Summary {
        let procs = &schedule.processes;
        if procs.is_empty() {
            return Summary::default();
        }

        let n = procs.len() as f64;
        let makespan = schedule.makespan();
        let busy_time = schedule.busy_time();

        let responses: Vec<usize> = procs.iter().filter_map(|p| p.response_time()).collect();
        let avg_response_time = if responses.is_empty() {
            None
        } else {
            Some(responses.iter().sum::<usize>() as f64 / responses.len() as f64)
        };

        Summary {
            makespan,
            busy_time,
            cpu_utilization: ratio(busy_time as f64, makespan as f64),
            avg_turnaround_time: procs.iter().map(|p| p.turnaround_time()).sum::<usize>() as f64
                / n,
            avg_wait_time: procs.iter().map(|p| p.waiting_time()).sum::<usize>() as f64 / n,
            max_wait_time: procs.iter().map(|p| p.waiting_time()).max().unwrap_or(0),
            avg_response_time,
            throughput: ratio(n, makespan as f64),
        }
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
