//! Discrete-event CPU scheduling simulator.
//!
//! Hand [`schedule`] a batch of fresh [`Process`]es and a [`Policy`]; it
//! returns the same batch, in input order, with start, completion,
//! waiting, turnaround and (for preemptive policies) response times filled
//! in, plus the CPU trace as a list of [`Slice`]s.
//!
//! ```
//! use cpusched::{schedule, Policy, Process};
//!
//! let batch = vec![
//!     Process::new(1, "P1", 0, 5, 0),
//!     Process::new(2, "P2", 1, 3, 0),
//! ];
//! let out = schedule(batch, Policy::RoundRobin { quantum: 4 }).unwrap();
//! assert_eq!(out.processes[1].turnaround_time(), 6);
//! assert_eq!(out.processes[1].response_time(), Some(3));
//! ```

mod engine;
mod error;
pub mod input;
mod policy;
mod process;
mod rand_generator;
mod schedulers;
mod stats;
mod timeline;

pub use engine::{schedule, Schedule};
pub use error::{InputError, ScheduleError};
pub use policy::{Policy, DEFAULT_QUANTUM};
pub use process::{Pid, Process};
pub use rand_generator::RandGenerator;
pub use schedulers::{Fcfs, Priority, RoundRobin, Scheduler, Sjf};
pub use stats::Summary;
pub use timeline::{finalize, Slice, Timeline};
