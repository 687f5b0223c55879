use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::process::{Pid, Process};

/// Deterministic "random" numbers replayed from a file. The first line is
/// the count, the numbers follow; the sequence wraps around when used up.
pub struct RandGenerator {
    values: Vec<u32>,
    ofs: usize,
}

impl RandGenerator {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut tokens = contents.split_whitespace();

        let count: usize = match tokens.next() {
            Some(tok) => tok.parse().map_err(|source| InputError::BadNumber {
                field: "random count",
                value: tok.to_owned(),
                source,
            })?,
            None => return Err(InputError::EmptyRandFile(path.display().to_string())),
        };

        let values = tokens
            .take(count)
            .map(|tok| {
                tok.parse().map_err(|source| InputError::BadNumber {
                    field: "random",
                    value: tok.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        if values.is_empty() {
            return Err(InputError::EmptyRandFile(path.display().to_string()));
        }
        Ok(RandGenerator { values, ofs: 0 })
    }

    /// Returns `None` for an empty sequence.
    pub fn from_values(values: Vec<u32>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(RandGenerator { values, ofs: 0 })
        }
    }

    pub fn next_raw(&mut self) -> u32 {
        let v = self.values[self.ofs];
        self.ofs = (self.ofs + 1) % self.values.len();
        v
    }

    /// A value in `1..=bound`. `bound` must be positive.
    pub fn random(&mut self, bound: usize) -> usize {
        1 + self.next_raw() as usize % bound
    }

    /// Builds `count` fresh processes with arrivals in `0..max_arrival`,
    /// bursts in `1..=max_burst` and priorities in `1..=max_priority`.
    pub fn synthesize(
        &mut self,
        count: usize,
        max_arrival: usize,
        max_burst: usize,
        max_priority: usize,
    ) -> Vec<Process> {
        (1..=count)
            .map(|n| {
                let id = n as Pid;
                let at = self.random(max_arrival.max(1)) - 1;
                let bt = self.random(max_burst.max(1));
                let prio = self.random(max_priority.max(1)) as i32;
                Process::new(id, format!("P{}", id), at, bt, prio)
            })
            .collect()
    }
}
