use cpusched::{schedule, Policy, Process, Slice};

fn batch(specs: &[(usize, usize, i32)]) -> Vec<Process> {
    specs
        .iter()
        .enumerate()
        .map(|(n, &(at, bt, pr))| {
            let id = n as u32 + 1;
            Process::new(id, format!("P{}", id), at, bt, pr)
        })
        .collect()
}

fn slice(id: u32, start: usize, end: usize) -> Slice {
    Slice { id, start, end }
}

#[test]
fn fcfs_two_processes() {
    let out = schedule(batch(&[(0, 5, 0), (1, 3, 0)]), Policy::Fcfs).unwrap();
    let (p1, p2) = (&out.processes[0], &out.processes[1]);

    assert_eq!(p1.start_time(), Some(0));
    assert_eq!(p1.turnaround_time(), 5);
    assert_eq!(p1.waiting_time(), 0);

    assert_eq!(p2.start_time(), Some(5));
    assert_eq!(p2.turnaround_time(), 7);
    assert_eq!(p2.waiting_time(), 4);

    assert_eq!(p1.response_time(), None);
    assert_eq!(p2.response_time(), None);
    assert_eq!(out.slices, vec![slice(1, 0, 5), slice(2, 5, 8)]);
}

#[test]
fn sjf_cannot_run_what_has_not_arrived() {
    let out = schedule(batch(&[(0, 8, 0), (1, 4, 0)]), Policy::Sjf).unwrap();
    let (p1, p2) = (&out.processes[0], &out.processes[1]);

    assert_eq!(out.slices, vec![slice(1, 0, 8), slice(2, 8, 12)]);
    assert_eq!(p1.turnaround_time(), 8);
    assert_eq!(p1.waiting_time(), 0);
    assert_eq!(p2.turnaround_time(), 11);
    assert_eq!(p2.waiting_time(), 7);
}

#[test]
fn priority_preempts_on_next_tick() {
    let out = schedule(batch(&[(0, 4, 2), (1, 3, 1)]), Policy::Priority).unwrap();
    let (p1, p2) = (&out.processes[0], &out.processes[1]);

    assert_eq!(out.slices, vec![slice(1, 0, 1), slice(2, 1, 4), slice(1, 4, 7)]);
    assert_eq!(p2.completion_time(), Some(4));
    assert_eq!(p2.turnaround_time(), 3);
    assert_eq!(p2.waiting_time(), 0);
    assert_eq!(p1.completion_time(), Some(7));
    assert_eq!(p1.turnaround_time(), 7);
    assert_eq!(p1.waiting_time(), 3);
}

#[test]
fn round_robin_quantum_four() {
    let out = schedule(
        batch(&[(0, 5, 0), (1, 3, 0)]),
        Policy::RoundRobin { quantum: 4 },
    )
    .unwrap();
    let (p1, p2) = (&out.processes[0], &out.processes[1]);

    assert_eq!(out.slices, vec![slice(1, 0, 4), slice(2, 4, 7), slice(1, 7, 8)]);
    assert_eq!(p2.turnaround_time(), 6);
    assert_eq!(p2.waiting_time(), 3);
    assert_eq!(p2.response_time(), Some(3));
    assert_eq!(p1.turnaround_time(), 8);
    assert_eq!(p1.waiting_time(), 3);
    assert_eq!(p1.response_time(), Some(0));
}

#[test]
fn four_process_workload_under_every_policy() {
    // arrivals 0,1,3,5 bursts 9,2,5,6 priorities 1,2,3,4
    let specs = [(0, 9, 1), (1, 2, 2), (3, 5, 3), (5, 6, 4)];

    let fcfs = schedule(batch(&specs), Policy::Fcfs).unwrap();
    let tat: Vec<_> = fcfs.processes.iter().map(Process::turnaround_time).collect();
    assert_eq!(tat, vec![9, 10, 13, 17]);

    let sjf = schedule(batch(&specs), Policy::Sjf).unwrap();
    let ids: Vec<_> = sjf.slices.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    // P1 has the best priority and holds the CPU throughout.
    let prio = schedule(batch(&specs), Policy::Priority).unwrap();
    let ids: Vec<_> = prio.slices.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(prio.processes[0].completion_time(), Some(9));

    let rr = schedule(batch(&specs), Policy::RoundRobin { quantum: 4 }).unwrap();
    assert_eq!(
        rr.slices,
        vec![
            slice(1, 0, 4),
            slice(2, 4, 6),
            slice(3, 6, 10),
            slice(1, 10, 14),
            slice(4, 14, 18),
            slice(3, 18, 19),
            slice(1, 19, 20),
            slice(4, 20, 22),
        ]
    );
    let resp: Vec<_> = rr.processes.iter().map(|p| p.response_time()).collect();
    assert_eq!(resp, vec![Some(0), Some(3), Some(3), Some(9)]);
}
