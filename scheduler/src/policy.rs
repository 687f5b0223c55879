use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{InputError, ScheduleError};

/// Quantum used for round-robin when none is given.
pub const DEFAULT_QUANTUM: usize = 4;

/// The scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: usize },
}

impl Policy {
    pub fn round_robin(quantum: usize) -> Result<Policy, ScheduleError> {
        if quantum == 0 {
            return Err(ScheduleError::InvalidQuantum);
        }
        Ok(Policy::RoundRobin { quantum })
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Priority | Policy::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Priority => write!(f, "PRIO"),
            Policy::RoundRobin { quantum } => write!(f, "RR {}", quantum),
        }
    }
}

fn schedspec_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:(F|fcfs|fifo)|(S|sjf)|(P|prio|priority)|(?:R|rr|round-robin)(\d+)?)$")
            .expect("schedspec pattern is valid")
    })
}

/// Accepts `F`, `S`, `P`, `R` or `R<num>`, plus the long names
/// `fcfs`/`fifo`, `sjf`, `prio`/`priority`, `rr`/`round-robin`.
impl FromStr for Policy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = schedspec_regex()
            .captures(s.trim())
            .ok_or_else(|| InputError::BadSchedSpec(s.to_owned()))?;

        if caps.get(1).is_some() {
            return Ok(Policy::Fcfs);
        }
        if caps.get(2).is_some() {
            return Ok(Policy::Sjf);
        }
        if caps.get(3).is_some() {
            return Ok(Policy::Priority);
        }
        let quantum = match caps.get(4) {
            Some(q) => q
                .as_str()
                .parse()
                .map_err(|_| InputError::BadSchedSpec(s.to_owned()))?,
            None => DEFAULT_QUANTUM,
        };
        Ok(Policy::round_robin(quantum)?)
    }
}
