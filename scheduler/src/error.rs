use std::num::ParseIntError;

use thiserror::Error;

use crate::process::Pid;

/// Reasons the engine refuses a batch or a policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("round-robin quantum must be positive")]
    InvalidQuantum,

    #[error("process {id} has a zero burst time")]
    ZeroBurst { id: Pid },

    #[error("process {id} was already scheduled (remaining time differs from burst time)")]
    StaleProcess { id: Pid },

    #[error("process id {id} appears more than once in the batch")]
    DuplicateId { id: Pid },
}

/// Errors raised while turning user input into a process batch.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number {value:?} in {field} list")]
    BadNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{field} list has {got} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("burst time of process {id} must be positive")]
    ZeroBurst { id: Pid },

    #[error("{path}:{line}: {reason}")]
    BadLine {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("invalid scheduler specification {0:?}, must be one of F, S, P, R<num>")]
    BadSchedSpec(String),

    #[error("random file {0} holds no numbers")]
    EmptyRandFile(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
