use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use cpusched::input::{parse_list, processes_from_lists, read_process_file};
use cpusched::{schedule, Policy, Process, RandGenerator, Schedule, Summary};

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "cpusched", version)]
#[command(about = "Simulate FCFS, SJF, preemptive priority and round-robin scheduling")]
struct Args {
    /// Scheduler specification: F, S, P, R or R<quantum>
    #[arg(short, long, default_value = "F")]
    schedspec: Policy,

    /// Round-robin quantum, overrides the one in the schedspec
    #[arg(short, long)]
    quantum: Option<usize>,

    /// Arrival times, comma separated (e.g. 0,1,3,5)
    #[arg(long, requires = "bursts", conflicts_with_all = ["inputfile", "rfile"])]
    arrivals: Option<String>,

    /// Burst times, comma separated (e.g. 9,2,5,6)
    #[arg(long, requires = "arrivals")]
    bursts: Option<String>,

    /// Priorities, comma separated; lower runs first
    #[arg(long, requires = "arrivals")]
    priorities: Option<String>,

    /// Process file with one `arrival burst [priority]` per line
    #[arg(long, conflicts_with = "rfile")]
    inputfile: Option<PathBuf>,

    /// Random number file used to generate a workload
    #[arg(long, requires = "count")]
    rfile: Option<PathBuf>,

    /// Number of processes to generate from --rfile
    #[arg(long)]
    count: Option<usize>,

    /// Largest generated arrival time (exclusive)
    #[arg(long, default_value_t = 20)]
    max_arrival: usize,

    /// Largest generated burst
    #[arg(long, default_value_t = 10)]
    max_burst: usize,

    /// Largest generated priority
    #[arg(long, default_value_t = 4)]
    max_priority: usize,

    /// Print the execution trace
    #[arg(short, long)]
    gantt: bool,

    /// Verbose trace (-v dispatches, -vv queue activity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn policy(&self) -> Result<Policy> {
        Ok(match (self.schedspec, self.quantum) {
            (Policy::RoundRobin { .. }, Some(q)) => Policy::round_robin(q)?,
            (_, Some(_)) => bail!("--quantum only applies to round-robin"),
            (policy, None) => policy,
        })
    }

    fn load_batch(&self) -> Result<Vec<Process>> {
        if let Some(path) = &self.inputfile {
            return read_process_file(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }

        if let Some(path) = &self.rfile {
            let mut rand = RandGenerator::from_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let count = self.count.unwrap_or(0);
            return Ok(rand.synthesize(count, self.max_arrival, self.max_burst, self.max_priority));
        }

        let arrivals: Vec<usize> = parse_list("arrival", self.arrivals.as_deref().unwrap_or(""))?;
        let bursts: Vec<usize> = parse_list("burst", self.bursts.as_deref().unwrap_or(""))?;
        let priorities: Vec<i32> = parse_list("priority", self.priorities.as_deref().unwrap_or(""))?;
        Ok(processes_from_lists(&arrivals, &bursts, &priorities)?)
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

fn fmt_opt(v: Option<usize>) -> String {
    v.map_or_else(|| "-1".to_owned(), |v| v.to_string())
}

fn print_results(schedule: &Schedule) {
    println!(
        "{:>4} {:<10} {:>7} {:>5} {:>4} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "PID", "Name", "Arrival", "Burst", "Prio", "Start", "End", "Wait", "TAT", "Resp"
    );
    for p in &schedule.processes {
        println!(
            "{:>4} {:<10} {:>7} {:>5} {:>4} {:>5} {:>5} {:>5} {:>5} {:>5}",
            p.id(),
            p.name(),
            p.arrival_time(),
            p.burst_time(),
            p.priority(),
            fmt_opt(p.start_time()),
            fmt_opt(p.completion_time()),
            p.waiting_time(),
            p.turnaround_time(),
            fmt_opt(p.response_time()),
        );
    }
}

fn print_gantt(schedule: &Schedule) {
    let mut line = String::new();
    let mut now = 0;
    for s in &schedule.slices {
        if s.start > now {
            line.push_str(&format!("| idle {}-{} ", now, s.start));
        }
        line.push_str(&format!("| P{} {}-{} ", s.id, s.start, s.end));
        now = s.end;
    }
    if !line.is_empty() {
        line.push('|');
    }
    println!("{}", line);
}

fn print_summary(policy: Policy, stats: &Summary) {
    let resp = stats
        .avg_response_time
        .map_or_else(|| "-".to_owned(), |r| format!("{:.2}", r));
    println!("{}", policy);
    println!(
        "SUM: {} {:.2} {:.2} {:.2} {} {} {:.3}",
        stats.makespan,
        stats.cpu_utilization * 100.0,
        stats.avg_turnaround_time,
        stats.avg_wait_time,
        stats.max_wait_time,
        resp,
        stats.throughput
    );
}

fn run(args: &Args) -> Result<()> {
    let policy = args.policy()?;
    let batch = args.load_batch()?;
    info!("{} processes under {}", batch.len(), policy);

    let result = schedule(batch, policy).context("scheduling failed")?;

    print_results(&result);
    if args.gantt {
        print_gantt(&result);
    }
    print_summary(policy, &Summary::from_schedule(&result));
    Ok(())
}

fn get_default_args() -> Vec<String> {
    vec![
        "cpusched".to_string(),
        "-sR4".to_string(),
        "--arrivals".to_string(),
        "0,1,3,5".to_string(),
        "--bursts".to_string(),
        "9,2,5,6".to_string(),
        "--priorities".to_string(),
        "1,2,3,4".to_string(),
        "--gantt".to_string(),
    ]
}

fn main() -> Result<()> {
    let default_args = get_default_args();
    let args = std::env::args().collect::<Vec<String>>();
    let actual_args = if args.len() > 1 { &args } else { &default_args };

    let args = Args::parse_from(actual_args);
    init_logger(args.verbose);
    run(&args)
}
