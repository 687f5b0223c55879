use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::InputError;
use crate::process::{Pid, Process};

/// Parses a comma separated list such as `"0, 1,3,5"`. An empty or blank
/// string is an empty list.
pub fn parse_list<T: FromStr<Err = std::num::ParseIntError>>(
    field: &'static str,
    text: &str,
) -> Result<Vec<T>, InputError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|item| {
            let item = item.trim();
            item.parse().map_err(|source| InputError::BadNumber {
                field,
                value: item.to_owned(),
                source,
            })
        })
        .collect()
}

/// Builds a batch from parallel lists. Ids run from 1 and names are `P<id>`.
/// `priorities` may be empty, in which case every process gets priority 0.
pub fn processes_from_lists(
    arrivals: &[usize],
    bursts: &[usize],
    priorities: &[i32],
) -> Result<Vec<Process>, InputError> {
    if bursts.len() != arrivals.len() {
        return Err(InputError::LengthMismatch {
            field: "burst",
            expected: arrivals.len(),
            got: bursts.len(),
        });
    }
    if !priorities.is_empty() && priorities.len() != arrivals.len() {
        return Err(InputError::LengthMismatch {
            field: "priority",
            expected: arrivals.len(),
            got: priorities.len(),
        });
    }

    arrivals
        .iter()
        .zip(bursts)
        .enumerate()
        .map(|(n, (&at, &bt))| {
            let id = n as Pid + 1;
            if bt == 0 {
                return Err(InputError::ZeroBurst { id });
            }
            let prio = priorities.get(n).copied().unwrap_or(0);
            Ok(Process::new(id, format!("P{}", id), at, bt, prio))
        })
        .collect()
}

/// Reads a process file: one `arrival burst [priority]` triple per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn read_process_file(path: impl AsRef<Path>) -> Result<Vec<Process>, InputError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    parse_process_lines(&path.display().to_string(), reader)
}

pub fn parse_process_lines(origin: &str, reader: impl BufRead) -> Result<Vec<Process>, InputError> {
    let mut processes = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let bad = |reason: String| InputError::BadLine {
            path: origin.to_owned(),
            line: lineno + 1,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(bad(format!(
                "expected `arrival burst [priority]`, got {} fields",
                fields.len()
            )));
        }
        let at: usize = fields[0]
            .parse()
            .map_err(|e| bad(format!("arrival {:?}: {}", fields[0], e)))?;
        let bt: usize = fields[1]
            .parse()
            .map_err(|e| bad(format!("burst {:?}: {}", fields[1], e)))?;
        let prio: i32 = match fields.get(2) {
            Some(f) => f.parse().map_err(|e| bad(format!("priority {:?}: {}", f, e)))?,
            None => 0,
        };
        if bt == 0 {
            return Err(bad("burst must be positive".to_owned()));
        }

        let id = processes.len() as Pid + 1;
        processes.push(Process::new(id, format!("P{}", id), at, bt, prio));
    }
    Ok(processes)
}
